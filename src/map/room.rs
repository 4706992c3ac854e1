use bracket_geometry::prelude::Point;

use super::{DOOR, FLOOR, FOG, PARTY, WALL};

/// One explorable cell of the dungeon: a `unit` x `2 * unit` character grid.
///
/// Cell roles are fixed by position. The border is wall with a door at the
/// midpoint of each side; the interior holds the spawn cell, two label cells
/// and the probe cell checked before relabelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub unit: i32,
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<char>,
}

impl Room {
    pub fn empty(unit: i32) -> Self {
        Self::filled(unit, FLOOR)
    }

    pub fn fogged(unit: i32) -> Self {
        Self::filled(unit, FOG)
    }

    fn filled(unit: i32, glyph: char) -> Self {
        let width = 2 * unit;
        let height = unit;
        Self {
            unit,
            width,
            height,
            tiles: vec![glyph; (width * height) as usize],
        }
    }

    /// Walled room with four doors and a blank interior.
    pub fn build(unit: i32) -> Self {
        let mut room = Self::empty(unit);
        for y in 0..room.height {
            for x in 0..room.width {
                let point = Point::new(x, y);
                if room.is_border(point) {
                    room.set_tile(point, WALL);
                }
            }
        }
        for door in room.door_points() {
            room.set_tile(door, DOOR);
        }
        room
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(Point::new(x, y)) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    pub fn is_border(&self, point: Point) -> bool {
        point.x == 0 || point.y == 0 || point.x == self.width - 1 || point.y == self.height - 1
    }

    pub fn tile_at(&self, point: Point) -> Option<char> {
        self.idx(point.x, point.y).map(|idx| self.tiles[idx])
    }

    pub fn set_tile(&mut self, point: Point, glyph: char) {
        if let Some(idx) = self.idx(point.x, point.y) {
            self.tiles[idx] = glyph;
        }
    }

    pub fn row(&self, y: i32) -> &[char] {
        match self.idx(0, y) {
            Some(start) => &self.tiles[start..start + self.width as usize],
            None => &[],
        }
    }

    pub fn fill_row(&mut self, y: i32, glyph: char) {
        if let Some(start) = self.idx(0, y) {
            self.tiles[start..start + self.width as usize].fill(glyph);
        }
    }

    /// North, south, west, east.
    pub fn door_points(&self) -> [Point; 4] {
        [
            Point::new(self.unit, 0),
            Point::new(self.unit, self.height - 1),
            Point::new(0, self.unit / 2),
            Point::new(self.width - 1, self.unit / 2),
        ]
    }

    pub fn spawn_point(&self) -> Point {
        Point::new(self.unit / 2 + 2, self.unit / 2 + 1)
    }

    pub fn story_label_point(&self) -> Point {
        Point::new(2 * self.unit - 3, 2)
    }

    pub fn number_label_point(&self) -> Point {
        Point::new(1, 1)
    }

    pub fn probe_point(&self) -> Point {
        Point::new(2 * self.unit - 1 - self.unit / 4, 1)
    }

    pub fn holds_party(&self) -> bool {
        self.tile_at(self.spawn_point()) == Some(PARTY)
    }

    /// A room is impassable once its spawn cell has been rocked over.
    pub fn is_blocked(&self) -> bool {
        self.tile_at(self.spawn_point()) == Some(WALL)
    }

    pub fn probe_blocked(&self) -> bool {
        self.tile_at(self.probe_point()) == Some(WALL)
    }

    pub fn story_label(&self) -> Option<char> {
        self.tile_at(self.story_label_point())
    }

    pub fn place_party(&mut self) {
        self.set_tile(self.spawn_point(), PARTY);
    }

    pub fn clear_party(&mut self) {
        self.set_tile(self.spawn_point(), FLOOR);
    }

    /// Overwrites every interior row with rock, sealing the east and west doors.
    pub fn fill_with_rocks(&mut self) {
        for y in 1..self.height - 1 {
            self.fill_row(y, WALL);
        }
    }
}
