use crate::engine::move_list::ColumnList;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;
/// Bits reserved per column: the playable rows plus one sentinel row that is
/// never set, so shifted copies of a mask cannot run from one column into the next.
pub const COL_HEIGHT: usize = HEIGHT + 1;
pub const MAX_MOVES: usize = WIDTH * HEIGHT;

/// Center-first column order used for move generation.
pub const CENTER_FIRST: [usize; WIDTH] = [3, 2, 4, 1, 5, 0, 6];

pub type Bitboard = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Blue,
    Red,
}

impl Player {
    /// The side that opens every game.
    pub const FIRST: Self = Self::Blue;

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Blue => 0,
            Self::Red => 1,
        }
    }

    pub const fn marker(self) -> char {
        match self {
            Self::Blue => 'B',
            Self::Red => 'R',
        }
    }

    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'B' | 'b' => Some(Self::Blue),
            'R' | 'r' => Some(Self::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blue => f.write_str("Blue"),
            Self::Red => f.write_str("Red"),
        }
    }
}

/// Bit-packed 7x6 grid. Square `(col, row)` lives at bit `col * COL_HEIGHT + row`,
/// row 0 being the bottom of the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    masks: [Bitboard; 2],
    heights: [u8; WIDTH],
    moves_played: u8,
    to_move: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            masks: [0; 2],
            heights: [0; WIDTH],
            moves_played: 0,
            to_move: Player::FIRST,
        }
    }

    pub const fn square_index(col: usize, row: usize) -> usize {
        col * COL_HEIGHT + row
    }

    pub const fn bit(col: usize, row: usize) -> Bitboard {
        1 << Self::square_index(col, row)
    }

    pub const fn mask(&self, player: Player) -> Bitboard {
        match player {
            Player::Blue => self.masks[0],
            Player::Red => self.masks[1],
        }
    }

    pub const fn occupied(&self) -> Bitboard {
        self.masks[0] | self.masks[1]
    }

    pub const fn to_move(&self) -> Player {
        self.to_move
    }

    pub const fn moves_played(&self) -> usize {
        self.moves_played as usize
    }

    /// Number of stones in `col`, or `None` for an out-of-range column.
    pub fn height(&self, col: usize) -> Option<usize> {
        self.heights.get(col).map(|&h| usize::from(h))
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Player> {
        if col >= WIDTH || row >= HEIGHT {
            return None;
        }
        let bit = Self::bit(col, row);
        if self.mask(Player::Blue) & bit != 0 {
            Some(Player::Blue)
        } else if self.mask(Player::Red) & bit != 0 {
            Some(Player::Red)
        } else {
            None
        }
    }

    pub fn can_play(&self, col: usize) -> bool {
        self.height(col).is_some_and(|h| h < HEIGHT)
    }

    /// Returns a copy of the board with `player`'s stone dropped into `column`.
    /// The side to move becomes `player`'s opponent.
    ///
    /// `column` is 0-indexed; errors carry it 1-indexed, as it appears in a history.
    pub fn apply(&self, column: usize, player: Player) -> Result<Self, GameError> {
        let ply = self.moves_played();
        let wire = column.saturating_add(1);
        let height = self
            .height(column)
            .ok_or(GameError::InvalidColumn { column: wire, ply })?;
        if height >= HEIGHT {
            return Err(GameError::ColumnFull { column: wire, ply });
        }

        let mut next = *self;
        next.to_move = player;
        next.play(column);
        Ok(next)
    }

    /// Drops a stone for the side to move. The caller guarantees `col` is playable.
    pub(crate) fn play(&mut self, col: usize) {
        debug_assert!(self.can_play(col), "play on full or invalid column {col}");
        let Some(height) = self.heights.get_mut(col) else {
            return;
        };
        let bit = Self::bit(col, usize::from(*height));
        *height += 1;
        if let Some(mask) = self.masks.get_mut(self.to_move.index()) {
            *mask |= bit;
        }
        self.moves_played += 1;
        self.to_move = self.to_move.opponent();
    }

    pub fn is_win(&self, player: Player) -> bool {
        has_four(self.mask(player))
    }

    pub fn winner(&self) -> Option<Player> {
        // The last mover is the only side that can have just completed a line.
        let last = self.to_move.opponent();
        if self.is_win(last) {
            Some(last)
        } else if self.is_win(self.to_move) {
            Some(self.to_move)
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| usize::from(h) == HEIGHT)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Playable columns in center-first order.
    pub fn legal_columns(&self) -> ColumnList {
        let mut columns = ColumnList::new();
        for col in CENTER_FIRST {
            if self.can_play(col) {
                columns.push(col);
            }
        }
        columns
    }
}

/// Four-in-a-row test over a single mask: vertical, horizontal, then the two
/// diagonals.
pub const fn has_four(bits: Bitboard) -> bool {
    run_of_four(bits, 1)
        || run_of_four(bits, COL_HEIGHT)
        || run_of_four(bits, COL_HEIGHT - 1)
        || run_of_four(bits, COL_HEIGHT + 1)
}

/// Folds the mask onto itself twice: `m = b & (b >> s)` keeps pairs,
/// `m & (m >> 2s)` keeps runs of four.
const fn run_of_four(bits: Bitboard, step: usize) -> bool {
    let pairs = bits & (bits >> step);
    pairs & (pairs >> (2 * step)) != 0
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for col in 0..WIDTH {
                let c = self.get(col, row).map_or('.', Player::marker);
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        for col in 1..=WIDTH {
            if col > 1 {
                f.write_str(" ")?;
            }
            write!(f, "{col}")?;
        }
        Ok(())
    }
}
