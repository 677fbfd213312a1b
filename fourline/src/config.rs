use serde::{Deserialize, Serialize};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;
pub const DEFAULT_MAX_PLY: usize = 4;

/// Heuristic weights used by the static evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Bonus for the side that owns a four in a row.
    pub win: i32,
    /// Per three-cell window.
    pub three: i32,
    /// Per two-cell window.
    pub two: i32,
    /// Returned outright when the opponent of the scoring side has four in a row.
    pub opponent_win: i32,
    /// Score the second side's threes with the first side's count. This is how
    /// the heuristic has always played; turn it off for a symmetric evaluator.
    pub second_reuses_first_threes: bool,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            win: 11,
            three: 3,
            two: 1,
            opponent_win: -200,
            second_reuses_first_threes: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_ply: usize,
    pub weights: Weights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_ply: DEFAULT_MAX_PLY,
            weights: Weights::default(),
        }
    }
}
