//! Wire format for move histories: a run of `<marker><column>` tokens such as
//! `B3R3B2R4`, where the marker is `B` or `R` (either case) and the column is
//! 1-indexed. Columns are converted to 0-indexed before any board operation.

use crate::error::GameError;
use crate::logic::board::{Player, WIDTH};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    /// 0-indexed column.
    pub column: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.player.marker(), self.column + 1)
    }
}

/// One decoded token together with its byte offset in the history string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub offset: usize,
    pub ply: usize,
    pub mv: Move,
}

/// Splits a history into tokens. Only syntax and the wire column range are
/// checked here; turn order and board capacity are the game state's business.
pub struct Tokenizer<'a> {
    input: &'a str,
    offset: usize,
    ply: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(history: &'a str) -> Self {
        let trimmed = history.trim_start();
        Self {
            input: trimmed.trim_end(),
            offset: history.len() - trimmed.len(),
            ply: 0,
            failed: false,
        }
    }

    fn fail(&mut self, position: usize, reason: String) -> Option<Result<Token, GameError>> {
        self.failed = true;
        Some(Err(GameError::MalformedHistory { position, reason }))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, GameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let mut chars = self.input.chars();
        let marker = chars.next()?;
        let start = self.offset;

        let Some(player) = Player::from_marker(marker) else {
            return self.fail(start, format!("expected R or B, found {marker:?}"));
        };

        let rest = chars.as_str();
        let digits_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_len == 0 {
            let reason = rest.chars().next().map_or_else(
                || "missing column number".to_string(),
                |c| format!("expected column digit, found {c:?}"),
            );
            return self.fail(start + marker.len_utf8(), reason);
        }

        let (digits, tail) = rest.split_at(digits_len);
        let ply = self.ply;
        self.input = tail;
        self.offset = start + marker.len_utf8() + digits_len;
        self.ply += 1;

        // Overlong digit runs saturate; they are out of range either way.
        let wire = digits.parse::<usize>().unwrap_or(usize::MAX);
        if !(1..=WIDTH).contains(&wire) {
            self.failed = true;
            return Some(Err(GameError::InvalidColumn { column: wire, ply }));
        }

        Some(Ok(Token {
            offset: start,
            ply,
            mv: Move {
                player,
                column: wire - 1,
            },
        }))
    }
}

/// Decodes a history into typed moves without replaying it.
pub fn parse_history(history: &str) -> Result<Vec<Move>, GameError> {
    Tokenizer::new(history)
        .map(|token| token.map(|t| t.mv))
        .collect()
}

/// Encodes moves back into the wire format.
pub fn format_history(moves: &[Move]) -> String {
    moves.iter().map(ToString::to_string).collect()
}
