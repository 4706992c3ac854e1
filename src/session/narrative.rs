use tracing::debug;

use super::resources::Origin;
use crate::{
    error::{DungeonError, Result},
    map::Dungeon,
    rng::RandomSource,
};

/// One letter per prepared story room.
pub const STORY_ALPHABET: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// Assigns or reshuffles the story label of every open room.
///
/// The origin id is drawn once and then pinned to whichever room holds the
/// party. Rocked rooms keep whatever their label cell already shows; every
/// other room gets a fresh draw.
pub fn shuffle_ids<R: RandomSource>(
    dungeon: &mut Dungeon,
    origin: &mut Origin,
    rng: &mut R,
    capacity: usize,
) -> Result<()> {
    let num_rooms = dungeon.num_rooms();
    if num_rooms > capacity {
        return Err(DungeonError::NarrativeIdCapacityExceeded {
            num_rooms,
            capacity,
        });
    }

    let origin_id = match origin.story_id {
        Some(id) => id,
        None => {
            let id = rng.pick(&STORY_ALPHABET);
            origin.story_id = Some(id);
            debug!(%id, "drew origin story id");
            id
        }
    };

    let stories: Vec<char> = (0..capacity).map(|_| rng.pick(&STORY_ALPHABET)).collect();

    for (idx, room) in dungeon.rooms_mut().iter_mut().enumerate() {
        if room.probe_blocked() {
            continue;
        }
        let label = if room.holds_party() {
            origin_id
        } else {
            stories[idx]
        };
        room.set_tile(room.story_label_point(), label);
    }
    debug!(rooms = num_rooms, "shuffled story ids");
    Ok(())
}
