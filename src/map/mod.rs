mod room;

pub use room::Room;

use bracket_geometry::prelude::Point;
use tracing::debug;

use crate::{
    config::MIN_UNIT,
    error::{DungeonError, Result},
};

pub const FLOOR: char = ' ';
pub const WALL: char = '#';
pub const DOOR: char = '^';
pub const PARTY: char = '@';
pub const FOG: char = '*';

/// Grid geometry derived from the side length and the room unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridDims {
    pub dim: i32,
    pub unit: i32,
}

impl GridDims {
    pub fn new(dim: i32, unit: i32) -> Result<Self> {
        if dim < 1 {
            return Err(DungeonError::InvalidConfig {
                reason: format!("dim must be positive, got {dim}"),
            });
        }
        if unit < MIN_UNIT {
            return Err(DungeonError::InvalidConfig {
                reason: format!("unit must be at least {MIN_UNIT}, got {unit}"),
            });
        }
        // dim <= height, so the width product also bounds 2 * unit
        let overflows = dim
            .checked_mul(unit)
            .and_then(|height| height.checked_mul(2))
            .is_none()
            || dim.checked_mul(dim).is_none();
        if overflows {
            return Err(DungeonError::InvalidConfig {
                reason: format!("a {dim}x{dim} grid of unit {unit} is too large"),
            });
        }
        Ok(Self { dim, unit })
    }

    pub fn height(&self) -> i32 {
        self.dim * self.unit
    }

    pub fn width(&self) -> i32 {
        2 * self.height()
    }

    /// Always `dim * dim`.
    pub fn num_rooms(&self) -> usize {
        ((self.height() / self.unit) * (self.width() / (2 * self.unit))) as usize
    }

    pub fn rows(&self) -> i32 {
        self.dim
    }

    /// Column and grid row of a room index.
    pub fn coords(&self, index: usize) -> Point {
        let dim = self.dim as usize;
        Point::new((index % dim) as i32, (index / dim) as i32)
    }

    pub fn index_of(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 || point.x >= self.dim || point.y >= self.dim {
            return None;
        }
        Some((point.y * self.dim + point.x) as usize)
    }
}

/// Fixed arena of rooms indexed `0..num_rooms`, laid out row-major.
#[derive(Clone, Debug)]
pub struct Dungeon {
    dims: GridDims,
    rooms: Vec<Room>,
}

impl Dungeon {
    pub fn new(dims: GridDims) -> Self {
        let rooms = (0..dims.num_rooms()).map(|_| Room::build(dims.unit)).collect();
        debug!(dim = dims.dim, unit = dims.unit, rooms = dims.num_rooms(), "built dungeon");
        Self { dims, rooms }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    #[cfg(test)]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> &mut [Room] {
        &mut self.rooms
    }

    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.rooms.len() {
            Ok(())
        } else {
            Err(DungeonError::RoomIndexOutOfRange {
                index,
                num_rooms: self.rooms.len(),
            })
        }
    }

    pub fn room(&self, index: usize) -> Result<&Room> {
        self.check_index(index)?;
        Ok(&self.rooms[index])
    }

    pub fn room_mut(&mut self, index: usize) -> Result<&mut Room> {
        self.check_index(index)?;
        Ok(&mut self.rooms[index])
    }

    #[cfg(test)]
    pub fn party_rooms(&self) -> Vec<usize> {
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| room.holds_party())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Writes each room's index as a lowercase base-36 digit, leaving rocked
    /// rooms alone.
    pub fn mark_room_numbers(&mut self) {
        for (idx, room) in self.rooms.iter_mut().enumerate() {
            if room.probe_blocked() {
                continue;
            }
            if let Some(digit) = char::from_digit(idx as u32, 36) {
                room.set_tile(room.number_label_point(), digit);
            }
        }
    }

    /// Composes the canvas, substituting a fog room wherever `shown` is false.
    pub fn canvas_lines(&self, shown: impl Fn(usize) -> bool) -> Vec<String> {
        let fog = Room::fogged(self.dims.unit);
        let dim = self.dims.dim as usize;
        let mut lines = Vec::with_capacity(self.dims.height() as usize);
        for grid_row in 0..self.dims.rows() as usize {
            for y in 0..self.dims.unit {
                let mut line = String::with_capacity(self.dims.width() as usize);
                for col in 0..dim {
                    let idx = grid_row * dim + col;
                    let room = if shown(idx) { &self.rooms[idx] } else { &fog };
                    line.extend(room.row(y));
                }
                lines.push(line);
            }
        }
        lines
    }
}
