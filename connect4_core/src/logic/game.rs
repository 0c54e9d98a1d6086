use crate::error::GameError;
use crate::logic::board::{Board, Player};
use crate::logic::history::{format_history, Move, Token, Tokenizer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won(Player),
    Draw,
}

/// A position rebuilt from a validated move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub status: GameStatus,
    pub history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::Playing,
            history: Vec::new(),
        }
    }

    /// Parses and replays `history`, rejecting the first token that breaks
    /// turn order, overfills a column or follows a decided game.
    pub fn from_history(history: &str) -> Result<Self, GameError> {
        let mut state = Self::new();
        for token in Tokenizer::new(history) {
            state.push(token?)?;
        }
        log::trace!(
            "replayed {} moves, status {:?}\n{}",
            state.history.len(),
            state.status,
            state.board
        );
        Ok(state)
    }

    fn push(&mut self, token: Token) -> Result<(), GameError> {
        let Token { offset, ply, mv } = token;

        if matches!(self.status, GameStatus::Won(_)) {
            return Err(GameError::ContinuationAfterWin { ply });
        }

        let expected = self.board.to_move();
        if mv.player != expected {
            return Err(GameError::MalformedHistory {
                position: offset,
                reason: format!(
                    "expected {} to move, found {}",
                    expected.marker(),
                    mv.player.marker()
                ),
            });
        }

        self.board = self.board.apply(mv.column, mv.player)?;
        self.history.push(mv);
        self.status = if self.board.is_win(mv.player) {
            GameStatus::Won(mv.player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::Playing
        };
        Ok(())
    }

    pub const fn turn(&self) -> Player {
        self.board.to_move()
    }

    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::Playing)
    }

    pub fn history_string(&self) -> String {
        format_history(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_reference_history() {
        let state = GameState::from_history("B3R3B2R4").unwrap();
        assert_eq!(state.board.moves_played(), 4);
        assert_eq!(state.turn(), Player::Blue);
        assert_eq!(state.board.height(2), Some(2));
        assert_eq!(state.board.height(1), Some(1));
        assert_eq!(state.board.height(3), Some(1));
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.history_string(), "B3R3B2R4");
    }

    #[test]
    fn test_empty_history_is_initial_position() {
        let state = GameState::from_history("").unwrap();
        assert_eq!(state, GameState::new());
        assert_eq!(state.turn(), Player::FIRST);
    }

    #[test]
    fn test_first_move_must_be_blue() {
        let err = GameState::from_history("R1").unwrap_err();
        assert!(matches!(
            err,
            GameError::MalformedHistory { position: 0, .. }
        ));
    }

    #[test]
    fn test_alternation_enforced() {
        let err = GameState::from_history("B1B2").unwrap_err();
        assert!(matches!(
            err,
            GameError::MalformedHistory { position: 2, .. }
        ));
    }

    #[test]
    fn test_overfilled_column() {
        let err = GameState::from_history("B1R1B1R1B1R1B1").unwrap_err();
        assert_eq!(err, GameError::ColumnFull { column: 1, ply: 6 });
    }

    #[test]
    fn test_column_errors_use_history_numbering() {
        // Both layers report the column exactly as written in the history.
        let full = GameState::from_history("B3R3B3R3B3R3B3").unwrap_err();
        assert_eq!(full.to_string(), "column 3 is full (move 6)");

        let out_of_range = GameState::from_history("B3R0").unwrap_err();
        assert_eq!(out_of_range.to_string(), "column 0 is out of range (move 1)");
    }

    #[test]
    fn test_vertical_win_sets_status() {
        let state = GameState::from_history("B1R2B1R2B1R2B1").unwrap();
        assert_eq!(state.status, GameStatus::Won(Player::Blue));
        assert!(state.is_over());
        assert!(state.board.is_win(Player::Blue));
    }

    #[test]
    fn test_continuation_after_win() {
        let err = GameState::from_history("B1R2B1R2B1R2B1R2").unwrap_err();
        assert_eq!(err, GameError::ContinuationAfterWin { ply: 7 });
    }

    #[test]
    fn test_invalid_wire_column() {
        let err = GameState::from_history("B3R8").unwrap_err();
        assert_eq!(err, GameError::InvalidColumn { column: 8, ply: 1 });
    }

    #[test]
    fn test_full_board_draw() {
        let history = draw_history();
        let state = GameState::from_history(&history).unwrap();
        assert!(state.board.is_full());
        assert_eq!(state.status, GameStatus::Draw);
    }

    fn draw_history() -> String {
        // Fill order (wire columns) that ends in a full board with no line of four.
        const ORDER: &str = "121212343434565656212121434343656565777777";
        ORDER
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let marker = if i % 2 == 0 { 'B' } else { 'R' };
                format!("{marker}{c}")
            })
            .collect()
    }
}
