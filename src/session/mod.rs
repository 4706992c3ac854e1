pub mod narrative;
pub mod navigation;
pub mod obstacles;
pub mod placement;
pub mod resources;

use std::io::Write;

use bracket_random::prelude::RandomNumberGenerator;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::{
    config::DungeonConfig,
    error::{DungeonError, Result},
    map::{Dungeon, GridDims},
    render::{GlyphWriter, draw_canvas},
    rng::RandomSource,
};

use self::{
    navigation::{MoveCommand, MoveOutcome},
    resources::{Origin, VisitedSet},
};

/// Limits that shape a session but not the grid itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionRules {
    pub story_draws: usize,
    pub max_spawn_attempts: usize,
}

/// All mutable game state for one play-through.
pub struct GameSession<R = RandomNumberGenerator> {
    dungeon: Dungeon,
    rng: R,
    rules: SessionRules,
    party: Option<usize>,
    origin: Origin,
    visited: VisitedSet,
}

#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub captured_at: DateTime<Utc>,
    pub dim: i32,
    pub unit: i32,
    pub party: Option<usize>,
    pub origin_index: Option<usize>,
    pub origin_id: Option<char>,
    pub visited: Vec<usize>,
    pub rows: Vec<String>,
}

impl GameSession<RandomNumberGenerator> {
    pub fn from_config(config: &DungeonConfig) -> Result<Self> {
        let dims = config.validate()?;
        let rng = match config.seed {
            Some(seed) => RandomNumberGenerator::seeded(seed),
            None => RandomNumberGenerator::new(),
        };
        let rules = SessionRules {
            story_draws: config.story_draws,
            max_spawn_attempts: config.spawn_attempts(dims.num_rooms()),
        };
        Ok(Self::new(dims, rules, rng))
    }
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(dims: GridDims, rules: SessionRules, rng: R) -> Self {
        Self {
            dungeon: Dungeon::new(dims),
            rng,
            rules,
            party: None,
            origin: Origin::default(),
            visited: VisitedSet::default(),
        }
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn party(&self) -> Option<usize> {
        self.party
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Places the party, labels the rooms, then scatters rocks.
    pub fn init_game(&mut self) -> Result<usize> {
        // surface the capacity error before the party lands anywhere
        self.check_story_capacity()?;
        let num_rooms = self.dungeon.num_rooms();
        let party = self.init_party()?;
        self.shuffle_ids()?;
        self.mark_room_numbers();
        for _ in 0..obstacles::rock_count(num_rooms) {
            self.fill_with_rocks();
        }
        info!(
            party,
            origin_id = ?self.origin.story_id,
            rooms = num_rooms,
            "game initialised"
        );
        Ok(party)
    }

    pub fn init_party(&mut self) -> Result<usize> {
        let index = placement::init_party(
            &mut self.dungeon,
            &mut self.rng,
            self.rules.max_spawn_attempts,
        )?;
        if let Some(previous) = self.party.filter(|&previous| previous != index) {
            self.dungeon.room_mut(previous)?.clear_party();
        }
        self.party = Some(index);
        self.origin.index = Some(index);
        self.visited.noise(index);
        Ok(index)
    }

    fn check_story_capacity(&self) -> Result<()> {
        let num_rooms = self.dungeon.num_rooms();
        if num_rooms > self.rules.story_draws {
            return Err(DungeonError::NarrativeIdCapacityExceeded {
                num_rooms,
                capacity: self.rules.story_draws,
            });
        }
        Ok(())
    }

    pub fn shuffle_ids(&mut self) -> Result<()> {
        narrative::shuffle_ids(
            &mut self.dungeon,
            &mut self.origin,
            &mut self.rng,
            self.rules.story_draws,
        )
    }

    pub fn mark_room_numbers(&mut self) {
        self.dungeon.mark_room_numbers();
    }

    pub fn fill_with_rocks(&mut self) -> usize {
        obstacles::fill_with_rocks(&mut self.dungeon, &mut self.rng, self.party)
    }

    pub fn step_party(&mut self, from: usize, command: MoveCommand) -> Result<MoveOutcome> {
        let outcome = navigation::move_party(&mut self.dungeon, &mut self.visited, from, command)?;
        self.party = Some(outcome.resting_index());
        Ok(outcome)
    }

    pub fn move_party(&mut self, from: usize, command: MoveCommand) -> Result<usize> {
        self.step_party(from, command)
            .map(|outcome| outcome.resting_index())
    }

    /// Walks the party back to where it spawned and redraws the story ids.
    ///
    /// Fails without moving anyone when the story ids cannot be redrawn.
    pub fn reset_to_origin(&mut self, from: usize) -> Result<usize> {
        self.check_story_capacity()?;
        let origin = self.origin.index.unwrap_or(from);
        let party = self.move_party(from, MoveCommand::Room(origin))?;
        self.shuffle_ids()?;
        info!(from, party, origin, "reset to origin");
        Ok(party)
    }

    /// True grid when `denoised`; otherwise unvisited rooms are fogged.
    pub fn canvas_lines(&self, party: Option<usize>, denoised: bool) -> Vec<String> {
        self.dungeon
            .canvas_lines(|idx| denoised || self.visited.contains(idx) || party == Some(idx))
    }

    pub fn render(
        &self,
        party: Option<usize>,
        denoised: bool,
        writer: &mut dyn GlyphWriter,
        out: &mut dyn Write,
    ) -> Result<()> {
        let lines = self.canvas_lines(party, denoised);
        draw_canvas(&lines, writer, out)?;
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let dims = self.dungeon.dims();
        SessionSnapshot {
            captured_at: Utc::now(),
            dim: dims.dim,
            unit: dims.unit,
            party: self.party,
            origin_index: self.origin.index,
            origin_id: self.origin.story_id,
            visited: self.visited.to_vec(),
            rows: self.canvas_lines(self.party, true),
        }
    }

    /// Canned play-through: label the grid, drop two rocks, spawn, then walk
    /// south three times and east once.
    pub fn run_demo(&mut self) -> Result<usize> {
        self.shuffle_ids()?;
        self.mark_room_numbers();
        self.fill_with_rocks();
        self.fill_with_rocks();
        let mut party = self.init_party()?;
        for command in [
            MoveCommand::South,
            MoveCommand::South,
            MoveCommand::South,
            MoveCommand::East,
        ] {
            party = self.move_party(party, command)?;
        }
        Ok(party)
    }
}
