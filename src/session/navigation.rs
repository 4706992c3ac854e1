use std::str::FromStr;

use bracket_geometry::prelude::Point;
use tracing::debug;

use super::resources::VisitedSet;
use crate::{
    error::{DungeonError, Result},
    map::{Dungeon, GridDims},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveCommand {
    North,
    South,
    East,
    West,
    Room(usize),
}

impl FromStr for MoveCommand {
    type Err = DungeonError;

    /// Compass letters are case-sensitive; anything else must be a room index.
    fn from_str(input: &str) -> Result<Self> {
        match input {
            "N" => Ok(MoveCommand::North),
            "S" => Ok(MoveCommand::South),
            "E" => Ok(MoveCommand::East),
            "W" => Ok(MoveCommand::West),
            other => other
                .parse::<usize>()
                .map(MoveCommand::Room)
                .map_err(|_| DungeonError::InvalidCommand {
                    input: other.to_string(),
                }),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Entered { from: usize, to: usize },
    /// The target is rocked; the party stays put but has sensed it.
    Blocked { at: usize, sensed: usize },
    Stayed { at: usize },
}

impl MoveOutcome {
    pub fn resting_index(&self) -> usize {
        match *self {
            MoveOutcome::Entered { to, .. } => to,
            MoveOutcome::Blocked { at, .. } => at,
            MoveOutcome::Stayed { at } => at,
        }
    }
}

/// Target room for a move. North and south wrap around the grid; east and
/// west stop at its edge.
pub fn resolve_target(dims: GridDims, from: usize, command: MoveCommand) -> usize {
    let num_rooms = dims.num_rooms();
    let dim = dims.dim as usize;
    let here = dims.coords(from);
    match command {
        MoveCommand::North => (from + num_rooms - dim) % num_rooms,
        MoveCommand::South => (from + dim) % num_rooms,
        MoveCommand::West => dims
            .index_of(Point::new(here.x - 1, here.y))
            .unwrap_or(from),
        MoveCommand::East => dims
            .index_of(Point::new(here.x + 1, here.y))
            .unwrap_or(from),
        MoveCommand::Room(index) => index,
    }
}

pub fn move_party(
    dungeon: &mut Dungeon,
    visited: &mut VisitedSet,
    from: usize,
    command: MoveCommand,
) -> Result<MoveOutcome> {
    if !dungeon.room(from)?.holds_party() {
        return Err(DungeonError::InvalidPartyState { from });
    }
    let target = resolve_target(dungeon.dims(), from, command);
    let blocked = dungeon.room(target)?.is_blocked();

    visited.noise(target);
    if blocked {
        debug!(from, target, "move blocked by rocked room");
        return Ok(MoveOutcome::Blocked {
            at: from,
            sensed: target,
        });
    }
    if target == from {
        return Ok(MoveOutcome::Stayed { at: from });
    }

    dungeon.room_mut(from)?.clear_party();
    dungeon.room_mut(target)?.place_party();
    debug!(from, target, "party moved");
    Ok(MoveOutcome::Entered { from, to: target })
}
