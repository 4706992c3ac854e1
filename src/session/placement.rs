use tracing::debug;

use crate::{
    error::{DungeonError, Result},
    map::Dungeon,
    rng::RandomSource,
};

/// Drops the party marker into a random open room.
///
/// Rocked rooms are redrawn, up to `max_attempts` draws in total.
pub fn init_party<R: RandomSource>(
    dungeon: &mut Dungeon,
    rng: &mut R,
    max_attempts: usize,
) -> Result<usize> {
    for attempt in 1..=max_attempts {
        let index = rng.roll_index(dungeon.num_rooms());
        let room = dungeon.room_mut(index)?;
        if room.is_blocked() {
            debug!(index, attempt, "spawn room is rocked, redrawing");
            continue;
        }
        room.place_party();
        debug!(index, attempt, "placed party");
        return Ok(index);
    }
    Err(DungeonError::NoValidSpawn {
        attempts: max_attempts,
    })
}
