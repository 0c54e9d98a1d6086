use crate::logic::board::WIDTH;

// Open-line weights
pub const VAL_THREE_IN_LINE: i32 = 50;
pub const VAL_TWO_IN_LINE: i32 = 10;

// Per-stone bonus per step of centrality
pub const VAL_CENTER_BONUS: i32 = 1;

// Terminal score base, well above any heuristic total
pub const VAL_WIN: i32 = 1_000_000;

/// Distance-from-edge ranking of each column: the center column scores 3.
pub const CENTRALITY: [i32; WIDTH] = [0, 1, 2, 3, 2, 1, 0];
