use serde::{Deserialize, Serialize};

/// Everything that can go wrong between a raw request and a chosen column.
/// All variants are pure functions of the input; retrying cannot help.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("malformed history at offset {position}: {reason}")]
    MalformedHistory { position: usize, reason: String },

    /// `column` is 1-indexed, as written in the history.
    #[error("column {column} is out of range (move {ply})")]
    InvalidColumn { column: usize, ply: usize },

    /// `column` is 1-indexed, as written in the history.
    #[error("column {column} is full (move {ply})")]
    ColumnFull { column: usize, ply: usize },

    #[error("move {ply} was recorded after the game was already won")]
    ContinuationAfterWin { ply: usize },

    #[error("no legal move: the game is already over")]
    NoLegalMove,

    #[error("level {0} is out of range (1-15)")]
    LevelOutOfRange(u8),
}

/// Caller-facing classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidHistory,
    GameOver,
    InvalidLevel,
}

impl GameError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedHistory { .. }
            | Self::InvalidColumn { .. }
            | Self::ColumnFull { .. }
            | Self::ContinuationAfterWin { .. } => ErrorKind::InvalidHistory,
            Self::NoLegalMove => ErrorKind::GameOver,
            Self::LevelOutOfRange(_) => ErrorKind::InvalidLevel,
        }
    }
}

/// Errors raised while loading engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
