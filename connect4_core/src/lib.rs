//! Connect Four position model and fixed-depth alpha-beta search.
//!
//! Positions are never stored: every call rebuilds the board from a move
//! history such as `B3R3B2R4` and searches it at the requested level (1-15).

pub mod engine;
pub mod error;
pub mod logic;

pub use engine::{best_move, Level, SearchResult, SearchStats};
pub use error::{ErrorKind, GameError};
