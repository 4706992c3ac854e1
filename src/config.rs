use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{DungeonError, Result},
    map::GridDims,
};

pub const DEFAULT_DIM: i32 = 3;
pub const DEFAULT_UNIT: i32 = 5;
pub const DEFAULT_STORY_DRAWS: usize = 9;
/// Smallest unit that keeps the spawn cell off the bottom wall.
pub const MIN_UNIT: i32 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub dim: i32,
    pub unit: i32,
    pub seed: Option<u64>,
    pub story_draws: usize,
    pub max_spawn_attempts: Option<usize>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIM,
            unit: DEFAULT_UNIT,
            seed: None,
            story_draws: DEFAULT_STORY_DRAWS,
            max_spawn_attempts: None,
        }
    }
}

impl DungeonConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<GridDims> {
        if self.story_draws == 0 {
            return Err(DungeonError::InvalidConfig {
                reason: "story_draws must be at least 1".to_string(),
            });
        }
        if self.max_spawn_attempts == Some(0) {
            return Err(DungeonError::InvalidConfig {
                reason: "max_spawn_attempts must be at least 1".to_string(),
            });
        }
        let dims = GridDims::new(self.dim, self.unit)?;
        // reject before any room is allocated
        if dims.num_rooms() > self.story_draws {
            return Err(DungeonError::NarrativeIdCapacityExceeded {
                num_rooms: dims.num_rooms(),
                capacity: self.story_draws,
            });
        }
        Ok(dims)
    }

    /// Defaults to four draws per room.
    pub fn spawn_attempts(&self, num_rooms: usize) -> usize {
        self.max_spawn_attempts
            .unwrap_or_else(|| num_rooms.saturating_mul(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_three_by_three() {
        let config = DungeonConfig::default();
        let dims = config.validate().unwrap();
        assert_eq!(dims.num_rooms(), 9);
        assert_eq!(config.spawn_attempts(dims.num_rooms()), 36);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DungeonConfig::from_json_str(r#"{ "seed": 99, "unit": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.unit, 7);
        assert_eq!(config.dim, DEFAULT_DIM);
        assert_eq!(config.story_draws, DEFAULT_STORY_DRAWS);
    }

    #[test]
    fn test_rejects_small_unit_and_empty_draws() {
        let config = DungeonConfig {
            unit: 4,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DungeonError::InvalidConfig { .. })
        ));

        let config = DungeonConfig {
            story_draws: 0,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DungeonError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_huge_dim_is_rejected_not_overflowed() {
        let config = DungeonConfig {
            dim: 50_000,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DungeonError::InvalidConfig { .. })
        ));

        let config = DungeonConfig {
            dim: i32::MAX,
            unit: i32::MAX,
            story_draws: usize::MAX,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DungeonError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_grid_larger_than_story_draws_is_rejected() {
        let config = DungeonConfig {
            dim: 4,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DungeonError::NarrativeIdCapacityExceeded {
                num_rooms: 16,
                capacity: 9
            })
        ));

        let config = DungeonConfig {
            dim: 4,
            story_draws: 16,
            ..DungeonConfig::default()
        };
        assert_eq!(config.validate().unwrap().num_rooms(), 16);
        assert_eq!(config.spawn_attempts(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        assert!(matches!(
            DungeonConfig::from_json_str("{ dim: }"),
            Err(DungeonError::Json(_))
        ));
    }
}
