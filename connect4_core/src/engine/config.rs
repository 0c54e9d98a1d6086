use crate::error::ConfigError;
use crate::logic::board::HEIGHT;
use crate::logic::eval_constants::{
    CENTRALITY, VAL_CENTER_BONUS, VAL_THREE_IN_LINE, VAL_TWO_IN_LINE, VAL_WIN,
};
use crate::logic::lookup::LINE_COUNT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Evaluation Parameters
    pub three_in_line: i32,
    pub two_in_line: i32,
    pub center_bonus: i32,

    // Search Parameters
    pub win_score: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            three_in_line: VAL_THREE_IN_LINE,
            two_in_line: VAL_TWO_IN_LINE,
            center_bonus: VAL_CENTER_BONUS,
            win_score: VAL_WIN,
        }
    }
}

impl EngineConfig {
    /// Parses a JSON object; absent keys keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Largest magnitude the static evaluation can reach with these weights.
    pub fn max_heuristic(&self) -> i64 {
        let per_line = i64::from(self.three_in_line.abs().max(self.two_in_line.abs()));
        let centrality: i64 = CENTRALITY.iter().map(|&c| i64::from(c)).sum();
        let center = i64::from(self.center_bonus.abs()) * centrality * HEIGHT as i64;
        per_line * LINE_COUNT as i64 + center
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_score <= 0 {
            return Err(ConfigError::Validation("win_score must be > 0".into()));
        }
        if self.win_score > i32::MAX / 4 {
            return Err(ConfigError::Validation(
                "win_score must leave headroom below i32::MAX / 4".into(),
            ));
        }
        if self.three_in_line < 0 || self.two_in_line < 0 || self.center_bonus < 0 {
            return Err(ConfigError::Validation(
                "heuristic weights must be >= 0".into(),
            ));
        }
        if self.max_heuristic() >= i64::from(self.win_score) {
            return Err(ConfigError::Validation(
                "heuristic weights can reach win_score".into(),
            ));
        }
        Ok(())
    }
}
