//! Injectable random source for the generators.

use bracket_random::prelude::RandomNumberGenerator;

/// Uniform draws used by obstacle placement, party placement and story ids.
pub trait RandomSource {
    /// Returns an index in `0..upper`. Callers never pass zero.
    fn roll_index(&mut self, upper: usize) -> usize;

    fn pick<T: Copy>(&mut self, choices: &[T]) -> T {
        choices[self.roll_index(choices.len())]
    }
}

impl RandomSource for RandomNumberGenerator {
    fn roll_index(&mut self, upper: usize) -> usize {
        self.range(0, upper as i32) as usize
    }
}

/// Replays a fixed sequence of rolls, wrapping each into range.
#[cfg(test)]
pub struct ScriptedRolls {
    rolls: Vec<usize>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRolls {
    pub fn new(rolls: Vec<usize>) -> Self {
        Self { rolls, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRolls {
    fn roll_index(&mut self, upper: usize) -> usize {
        if self.rolls.is_empty() {
            return 0;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll % upper
    }
}
