use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::Board;
use crate::logic::eval_constants::CENTRALITY;
use crate::logic::lookup::LineTables;
use std::sync::Arc;

/// Open-line and centrality heuristic, scored for the side to move.
pub struct ThreatEvaluator {
    config: Arc<EngineConfig>,
}

impl ThreatEvaluator {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    fn line_value(&self, stones: u32) -> i32 {
        match stones {
            3 => self.config.three_in_line,
            2 => self.config.two_in_line,
            _ => 0,
        }
    }
}

impl Evaluator for ThreatEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        let side = board.to_move();
        let mine = board.mask(side);
        let theirs = board.mask(side.opponent());
        let tables = LineTables::get();

        let mut score = 0;

        // 1. Open lines: a line holding stones of both colours is dead.
        for &line in &tables.lines {
            let own = (mine & line).count_ones();
            let opp = (theirs & line).count_ones();
            if opp == 0 {
                score += self.line_value(own);
            } else if own == 0 {
                score -= self.line_value(opp);
            }
        }

        // 2. Centrality
        for (&column, &weight) in tables.columns.iter().zip(CENTRALITY.iter()) {
            let own = (mine & column).count_ones() as i32;
            let opp = (theirs & column).count_ones() as i32;
            score += self.config.center_bonus * weight * (own - opp);
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::game::GameState;

    fn evaluate(history: &str) -> i32 {
        let state = GameState::from_history(history).unwrap();
        ThreatEvaluator::new(Arc::new(EngineConfig::default())).evaluate(&state.board)
    }

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(evaluate(""), 0);
    }

    #[test]
    fn test_center_preference() {
        // Red to move in both; Blue's centre stone hurts Red more than an edge stone.
        assert!(evaluate("B4") < evaluate("B1"));
        assert_eq!(evaluate("B1"), 0);
        assert_eq!(evaluate("B4"), -3);
    }

    #[test]
    fn test_perspective_flips_with_side_to_move() {
        assert_eq!(evaluate("B4R4"), 0);
        assert!(evaluate("B4R1") > 0);
        assert!(evaluate("B1R4") < 0);
    }

    #[test]
    fn test_three_outweighs_two() {
        // Blue to move with an open two vs an open three on the bottom row.
        let two = evaluate("B1R7B2R7");
        let three = evaluate("B1R7B2R7B3R6");
        assert!(three > two, "three ({three}) should beat two ({two})");
    }

    #[test]
    fn test_opponent_threat_is_penalised() {
        // Red to move facing Blue's open three on the bottom row.
        assert!(evaluate("B1R7B2R7B3") < -40);
    }

    #[test]
    fn test_blocked_line_scores_nothing() {
        let config = Arc::new(EngineConfig {
            center_bonus: 0,
            ..EngineConfig::default()
        });
        let evaluator = ThreatEvaluator::new(config);
        // Red's stone on the bottom row cuts Blue's pair off from every line.
        let state = GameState::from_history("B1R3B2R1").unwrap();
        let with_block = evaluator.evaluate(&state.board);
        let state = GameState::from_history("B1R1B2R7").unwrap();
        let without_block = evaluator.evaluate(&state.board);
        assert_eq!(with_block, 0);
        assert_eq!(without_block, EngineConfig::default().two_in_line);
        assert!(with_block < without_block);
    }
}
