use crate::logic::board::{Bitboard, Board, HEIGHT, WIDTH};
use std::sync::OnceLock;

/// Number of distinct four-cell lines on a 7x6 grid.
pub const LINE_COUNT: usize = 69;

/// Precomputed four-cell line masks and per-column masks, shared by every search.
pub struct LineTables {
    pub lines: [Bitboard; LINE_COUNT],
    pub columns: [Bitboard; WIDTH],
}

impl LineTables {
    fn new() -> Self {
        let mut lines = [0; LINE_COUNT];
        let mut count = 0;
        let mut push = |cells: [(usize, usize); 4]| {
            if let Some(slot) = lines.get_mut(count) {
                *slot = cells
                    .iter()
                    .fold(0, |mask, &(col, row)| mask | Board::bit(col, row));
                count += 1;
            }
        };

        // Horizontal
        for row in 0..HEIGHT {
            for col in 0..=WIDTH - 4 {
                push([(col, row), (col + 1, row), (col + 2, row), (col + 3, row)]);
            }
        }
        // Vertical
        for col in 0..WIDTH {
            for row in 0..=HEIGHT - 4 {
                push([(col, row), (col, row + 1), (col, row + 2), (col, row + 3)]);
            }
        }
        // Diagonal /
        for col in 0..=WIDTH - 4 {
            for row in 0..=HEIGHT - 4 {
                push([
                    (col, row),
                    (col + 1, row + 1),
                    (col + 2, row + 2),
                    (col + 3, row + 3),
                ]);
            }
        }
        // Diagonal \
        for col in 0..=WIDTH - 4 {
            for row in 3..HEIGHT {
                push([
                    (col, row),
                    (col + 1, row - 1),
                    (col + 2, row - 2),
                    (col + 3, row - 3),
                ]);
            }
        }
        debug_assert_eq!(count, LINE_COUNT);

        let mut columns = [0; WIDTH];
        for (col, mask) in columns.iter_mut().enumerate() {
            *mask = (0..HEIGHT).fold(0, |m, row| m | Board::bit(col, row));
        }

        Self { lines, columns }
    }

    pub fn get() -> &'static Self {
        static INSTANCE: OnceLock<LineTables> = OnceLock::new();
        INSTANCE.get_or_init(LineTables::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::has_four;

    #[test]
    fn test_every_line_is_a_win() {
        let tables = LineTables::get();
        for &line in &tables.lines {
            assert_eq!(line.count_ones(), 4);
            assert!(has_four(line), "line {line:#x} not detected as a win");
        }
    }

    #[test]
    fn test_lines_are_distinct() {
        let tables = LineTables::get();
        let mut sorted = tables.lines.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), LINE_COUNT);
    }

    #[test]
    fn test_column_masks_cover_playable_rows() {
        let tables = LineTables::get();
        let all = tables.columns.iter().fold(0, |m, c| m | c);
        assert_eq!(all.count_ones() as usize, WIDTH * HEIGHT);
        for (col, &mask) in tables.columns.iter().enumerate() {
            assert_eq!(mask & Board::bit(col, HEIGHT), 0);
        }
    }
}
