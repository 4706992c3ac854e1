//! Error kinds raised by dungeon operations.
//!
//! Every variant is detected before the failing operation touches the grid,
//! so callers can report the error and keep playing on unchanged state.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DungeonError {
    #[error("room {from} does not hold the party marker")]
    InvalidPartyState { from: usize },

    #[error("room index {index} is outside 0..{num_rooms}")]
    RoomIndexOutOfRange { index: usize, num_rooms: usize },

    #[error("no unblocked spawn room found after {attempts} attempts")]
    NoValidSpawn { attempts: usize },

    #[error("{num_rooms} rooms exceed the narrative id capacity of {capacity}")]
    NarrativeIdCapacityExceeded { num_rooms: usize, capacity: usize },

    #[error("unrecognised command '{input}'")]
    InvalidCommand { input: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DungeonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_room() {
        let err = DungeonError::RoomIndexOutOfRange {
            index: 12,
            num_rooms: 9,
        };
        assert_eq!(err.to_string(), "room index 12 is outside 0..9");

        let err = DungeonError::InvalidPartyState { from: 3 };
        assert!(err.to_string().contains("room 3"));
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DungeonError = io.into();
        assert!(matches!(err, DungeonError::Io(_)));
    }
}
