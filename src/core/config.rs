//! Board configuration.
//!
//! The board edge and the Zobrist seed are fixed when a `Board` is built.
//! The seed is carried explicitly so two boards built from the same config
//! hash identically.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::square::MAX_BOARD_SIZE;
use super::zobrist::{ZobristKeys, DEFAULT_ZOBRIST_SEED};

/// Standard board edge.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Smallest edge that fits both sides' two starting ranks.
pub const MIN_BOARD_SIZE: usize = 4;

/// A board edge outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Board size must be {min}-{max}, got {0}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
pub struct BoardSizeError(pub usize);

/// Check that `size` is a playable board edge.
pub fn check_board_size(size: usize) -> Result<(), BoardSizeError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(BoardSizeError(size))
    }
}

/// Board construction parameters.
///
/// Deserializing rejects an out-of-range `size`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    /// Edge length of the square board.
    pub size: usize,

    /// Seed for the Zobrist key table.
    pub zobrist_seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            zobrist_seed: DEFAULT_ZOBRIST_SEED,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawBoardConfig {
    size: usize,
    zobrist_seed: u64,
}

impl Default for RawBoardConfig {
    fn default() -> Self {
        let BoardConfig { size, zobrist_seed } = BoardConfig::default();
        Self { size, zobrist_seed }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = BoardSizeError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        check_board_size(raw.size)?;
        Ok(Self {
            size: raw.size,
            zobrist_seed: raw.zobrist_seed,
        })
    }
}

impl BoardConfig {
    /// Create a config for a board edge with the default seed.
    ///
    /// Panics if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::default().with_size(size)
    }

    /// Set the board edge.
    pub fn with_size(mut self, size: usize) -> Self {
        if let Err(err) = check_board_size(size) {
            panic!("{err}");
        }
        self.size = size;
        self
    }

    /// Set the Zobrist seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.zobrist_seed = seed;
        self
    }

    /// Build the key table this config describes.
    #[must_use]
    pub fn zobrist_keys(&self) -> ZobristKeys {
        ZobristKeys::new(self.size, self.zobrist_seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 8);
        assert_eq!(config.zobrist_seed, 1);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardConfig::new(6).with_seed(99);
        assert_eq!(config.size, 6);
        assert_eq!(config.zobrist_seed, 99);
        assert_eq!(config.zobrist_keys().size(), 6);
        assert_eq!(config.zobrist_keys().seed(), 99);
    }

    #[test]
    #[should_panic(expected = "Board size must be")]
    fn test_too_small() {
        let _ = BoardConfig::new(3);
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::new(10).with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"size": 6}"#).unwrap();
        assert_eq!(config.size, 6);
        assert_eq!(config.zobrist_seed, DEFAULT_ZOBRIST_SEED);
    }

    #[test]
    fn test_deserialize_rejects_bad_size() {
        let err = serde_json::from_str::<BoardConfig>(r#"{"size": 3}"#).unwrap_err();
        assert!(err.to_string().contains("Board size must be 4-26, got 3"));
        assert!(serde_json::from_str::<BoardConfig>(r#"{"size": 27}"#).is_err());
        assert!(serde_json::from_str::<BoardConfig>(r#"{"size": 26}"#).is_ok());
    }

    #[test]
    fn test_check_board_size() {
        assert_eq!(check_board_size(4), Ok(()));
        assert_eq!(check_board_size(26), Ok(()));
        assert_eq!(check_board_size(3), Err(BoardSizeError(3)));
        assert_eq!(check_board_size(0), Err(BoardSizeError(0)));
    }
}
