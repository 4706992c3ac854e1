use tracing::debug;

use crate::{map::Dungeon, rng::RandomSource};

/// Number of rock draws made when a game starts.
pub fn rock_count(num_rooms: usize) -> usize {
    ((num_rooms as f64).sqrt() as usize).saturating_sub(1)
}

/// Rocks over a uniformly drawn room and returns its index.
///
/// Nothing is excluded from the draw: the room may already be rocked, or it may
/// hold the party. An occupied room is sealed around the party, which keeps its
/// marker on the spawn cell.
pub fn fill_with_rocks<R: RandomSource>(
    dungeon: &mut Dungeon,
    rng: &mut R,
    occupied: Option<usize>,
) -> usize {
    let index = rng.roll_index(dungeon.num_rooms());
    if let Ok(room) = dungeon.room_mut(index) {
        room.fill_with_rocks();
        if occupied == Some(index) {
            room.place_party();
            debug!(index, "rocked the occupied room around the party");
        } else {
            debug!(index, "rocked room");
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        map::{GridDims, WALL},
        rng::ScriptedRolls,
    };

    #[test]
    fn test_rock_count_follows_grid_side() {
        assert_eq!(rock_count(1), 0);
        assert_eq!(rock_count(4), 1);
        assert_eq!(rock_count(9), 2);
        assert_eq!(rock_count(16), 3);
    }

    #[test]
    fn test_rocks_seal_the_drawn_room_only() {
        let mut dungeon = Dungeon::new(GridDims::new(3, 5).unwrap());
        let mut rng = ScriptedRolls::new(vec![6]);
        assert_eq!(fill_with_rocks(&mut dungeon, &mut rng, None), 6);
        for (idx, room) in dungeon.rooms().iter().enumerate() {
            assert_eq!(room.is_blocked(), idx == 6);
        }
        let rocked = dungeon.room(6).unwrap();
        for y in 1..rocked.height - 1 {
            assert!(rocked.row(y).iter().all(|&glyph| glyph == WALL));
        }
    }

    #[test]
    fn test_rocking_twice_is_idempotent() {
        let mut dungeon = Dungeon::new(GridDims::new(3, 5).unwrap());
        let mut rng = ScriptedRolls::new(vec![2]);
        fill_with_rocks(&mut dungeon, &mut rng, None);
        let once = dungeon.room(2).unwrap().clone();
        fill_with_rocks(&mut dungeon, &mut rng, None);
        assert_eq!(dungeon.room(2).unwrap(), &once);
    }

    #[test]
    fn test_occupied_room_keeps_the_marker() {
        let mut dungeon = Dungeon::new(GridDims::new(3, 5).unwrap());
        dungeon.room_mut(4).unwrap().place_party();
        let mut rng = ScriptedRolls::new(vec![4]);
        fill_with_rocks(&mut dungeon, &mut rng, Some(4));
        assert_eq!(dungeon.party_rooms(), vec![4]);
        assert!(dungeon.room(4).unwrap().probe_blocked());
    }
}
