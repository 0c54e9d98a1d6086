use crate::engine::config::EngineConfig;
use crate::engine::eval::ThreatEvaluator;
use crate::engine::{Evaluator, Level, SearchResult, SearchStats, Searcher};
use crate::error::GameError;
use crate::logic::board::Board;
use std::sync::Arc;
use std::time::Instant;

const INFINITY: i32 = i32::MAX / 2;

/// Fixed-depth negamax with alpha-beta pruning. No transposition table and no
/// iterative deepening: the same board and level always produce the same answer.
/// Construct one per request; only the config is shared.
pub struct AlphaBetaEngine<E = ThreatEvaluator> {
    config: Arc<EngineConfig>,
    evaluator: E,
    nodes_searched: u64,
}

impl AlphaBetaEngine {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: ThreatEvaluator::new(config.clone()),
            config,
            nodes_searched: 0,
        }
    }
}

impl<E: Evaluator> AlphaBetaEngine<E> {
    pub fn with_evaluator(config: Arc<EngineConfig>, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            nodes_searched: 0,
        }
    }

    /// Score for the side to move when its opponent has just completed a line
    /// with `depth` plies still unsearched. Earlier losses (more depth left)
    /// score lower, so the winner prefers the fastest win and the loser the slowest loss.
    fn loss_score(&self, depth: u8) -> i32 {
        -(self.config.win_score + i32::from(depth))
    }

    fn negamax(&mut self, board: &Board, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.nodes_searched += 1;

        if board.is_win(board.to_move().opponent()) {
            return self.loss_score(depth);
        }
        if board.is_full() {
            return 0;
        }
        if depth == 0 {
            return self.evaluator.evaluate(board);
        }

        let mut best_score = -INFINITY;
        for column in board.legal_columns() {
            let mut child = *board;
            child.play(column);

            let score = -self.negamax(&child, depth - 1, -beta, -alpha);
            if score > best_score {
                best_score = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }
        best_score
    }
}

impl<E: Evaluator> Searcher for AlphaBetaEngine<E> {
    fn search(&mut self, board: &Board, level: Level) -> Result<SearchResult, GameError> {
        if board.is_terminal() {
            log::warn!(
                "search requested on a finished game after {} moves",
                board.moves_played()
            );
            return Err(GameError::NoLegalMove);
        }

        self.nodes_searched = 0;
        let start = Instant::now();
        let depth = level.depth();

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best: Option<(usize, i32)> = None;

        // Strict improvement only: ties keep the earlier, more central column.
        for column in board.legal_columns() {
            let mut child = *board;
            child.play(column);

            let score = -self.negamax(&child, depth - 1, -beta, -alpha);
            log::trace!("root column {column}: score {score}");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
            if score > alpha {
                alpha = score;
            }
        }

        let (column, score) = best.ok_or(GameError::NoLegalMove)?;
        #[allow(clippy::cast_possible_truncation)]
        let time_ms = start.elapsed().as_millis() as u64;
        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            time_ms,
        };
        log::debug!(
            "depth {depth}: column {column} score {score} ({} nodes, {time_ms} ms)",
            stats.nodes
        );

        Ok(SearchResult {
            column,
            score,
            stats,
        })
    }
}
