use connect4_core::{GameError, SearchResult};
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveQuery {
    /// Move history such as `B3R3B2R4`, 1-indexed columns.
    #[serde(default)]
    pub position: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// 0-indexed column chosen for the side to move.
    pub column: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
}

impl From<&SearchResult> for MoveResponse {
    fn from(result: &SearchResult) -> Self {
        Self {
            column: result.column,
            score: Some(result.score),
        }
    }
}

/// Error class as seen by clients. Distinguishes a bad request from a
/// finished game so the UI can offer a reset instead of reporting a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidHistory,
    GameOver,
    InvalidLevel,
    /// The request could not be decoded at all.
    BadRequest,
    Internal,
}

impl From<connect4_core::ErrorKind> for ErrorKind {
    fn from(kind: connect4_core::ErrorKind) -> Self {
        match kind {
            connect4_core::ErrorKind::InvalidHistory => Self::InvalidHistory,
            connect4_core::ErrorKind::GameOver => Self::GameOver,
            connect4_core::ErrorKind::InvalidLevel => Self::InvalidLevel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&GameError> for ErrorResponse {
    fn from(err: &GameError) -> Self {
        Self::new(err.kind().into(), err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
