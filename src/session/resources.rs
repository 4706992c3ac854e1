use std::collections::BTreeSet;

/// Where the party first spawned, and the story id pinned to that room.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Origin {
    pub index: Option<usize>,
    pub story_id: Option<char>,
}

/// Rooms the party has entered or bumped into. Only ever grows.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    rooms: BTreeSet<usize>,
}

impl VisitedSet {
    pub fn noise(&mut self, index: usize) {
        self.rooms.insert(index);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.rooms.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Ascending room indices.
    pub fn to_vec(&self) -> Vec<usize> {
        self.rooms.iter().copied().collect()
    }
}
