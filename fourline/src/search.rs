//! Depth-limited alpha-beta minimax.
//!
//! Max and min plies follow `board.turn()`, not depth parity. Columns are
//! tried left to right with no move ordering, and a child only replaces the
//! remembered move when it strictly improves the bound, so ties go to the
//! left-most column. Scores are fail-hard: a node returns its alpha (max) or
//! beta (min) even when no child beat the inherited bound. Bounds are kept in
//! `i64` so the root window lies strictly outside any evaluator score, and the
//! first open column always beats it.
use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};
use crate::config::{SearchConfig, Weights};
use crate::eval::evaluate_with;
use crate::patterns::find_four_in_a_row;
use crate::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub column: usize,
    /// Row the disc lands on.
    pub row: usize,
    pub score: i32,
    /// Positions visited, root included.
    pub nodes: u64,
}

/// Column the search picks for `maximizing` at `max_ply` half-moves with the
/// default weights, or `None` when the position has no move to make.
pub fn choose_move(
    board: &Board,
    maximizing: Side,
    max_ply: usize,
) -> Result<Option<usize>, GameError> {
    let config = SearchConfig {
        max_ply,
        ..SearchConfig::default()
    };
    Ok(search(board, maximizing, &config)?.map(|outcome| outcome.column))
}

pub fn search(
    board: &Board,
    maximizing: Side,
    config: &SearchConfig,
) -> Result<Option<SearchOutcome>, GameError> {
    if config.max_ply < 1 {
        return Err(GameError::InvalidPly(config.max_ply));
    }
    let mut searcher = AlphaBeta {
        maximizing,
        max_ply: config.max_ply,
        weights: &config.weights,
        nodes: 0,
    };
    let root = searcher.alpha_beta(board, i64::MIN, i64::MAX, 0);
    // With the root window open, a recorded move carries an exact child score.
    let score = root.score.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    Ok(root.best.map(|(column, row)| SearchOutcome {
        column,
        row,
        score,
        nodes: searcher.nodes,
    }))
}

struct Node {
    score: i64,
    /// Column and row of the move that set the bound.
    best: Option<(usize, usize)>,
}

struct AlphaBeta<'a> {
    maximizing: Side,
    max_ply: usize,
    weights: &'a Weights,
    nodes: u64,
}

impl AlphaBeta<'_> {
    fn alpha_beta(&mut self, board: &Board, mut alpha: i64, mut beta: i64, ply: usize) -> Node {
        self.nodes += 1;
        if ply == self.max_ply || find_four_in_a_row(board).is_some() || board.is_full() {
            return Node {
                score: i64::from(evaluate_with(board, self.maximizing, self.weights)),
                best: None,
            };
        }

        let maximize = board.turn() == self.maximizing;
        let mut best = None;
        for column in board.open_columns() {
            let mut child = *board;
            let Ok(row) = child.drop(column) else {
                continue;
            };
            child.switch_turn();
            let score = self.alpha_beta(&child, alpha, beta, ply + 1).score;
            if maximize {
                if score > alpha {
                    alpha = score;
                    best = Some((column, row));
                }
            } else if score < beta {
                beta = score;
                best = Some((column, row));
            }
            if alpha >= beta {
                break;
            }
        }

        Node {
            score: if maximize { alpha } else { beta },
            best,
        }
    }
}
