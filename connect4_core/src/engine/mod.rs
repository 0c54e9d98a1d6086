use crate::engine::config::EngineConfig;
use crate::engine::search::AlphaBetaEngine;
use crate::error::GameError;
use crate::logic::board::Board;
use crate::logic::game::GameState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod config;
pub mod eval;
pub mod move_list;
pub mod search;


/// Requested playing strength. Maps 1:1 onto search depth in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(15);

    pub const fn depth(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Level {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::LevelOutOfRange(value))
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u64,
    pub time_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 0-indexed column.
    pub column: usize,
    /// Score for the side to move; diagnostic only.
    pub score: i32,
    pub stats: SearchStats,
}

pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

pub trait Searcher {
    fn search(&mut self, board: &Board, level: Level) -> Result<SearchResult, GameError>;
}

/// Validates `level`, rebuilds the position from `history` and searches it.
pub fn best_move(
    history: &str,
    level: u8,
    config: Arc<EngineConfig>,
) -> Result<SearchResult, GameError> {
    let level = Level::try_from(level)?;
    let state = GameState::from_history(history)?;
    AlphaBetaEngine::new(config).search(&state.board, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert_eq!(Level::try_from(0), Err(GameError::LevelOutOfRange(0)));
        assert_eq!(Level::try_from(16), Err(GameError::LevelOutOfRange(16)));
        assert_eq!(Level::try_from(1).map(Level::depth), Ok(1));
        assert_eq!(Level::try_from(15).map(Level::depth), Ok(15));
    }

    #[test]
    fn test_level_deserialize_rejects_out_of_range() {
        let level: Level = serde_json::from_str("7").unwrap();
        assert_eq!(level.depth(), 7);
        assert!(serde_json::from_str::<Level>("0").is_err());
        assert!(serde_json::from_str::<Level>("16").is_err());
    }

    #[test]
    fn test_best_move_checks_level_first() {
        let config = Arc::new(EngineConfig::default());
        assert_eq!(
            best_move("garbage", 0, config.clone()).unwrap_err(),
            GameError::LevelOutOfRange(0)
        );
        assert_eq!(
            best_move("", 16, config).unwrap_err(),
            GameError::LevelOutOfRange(16)
        );
    }
}
