//! Disc-drop (four in a row) engine with an alpha-beta opponent.
//! Boards are small `Copy` values: the search explores by cloning, never by
//! mutate-then-undo. Callers either drive a [`Board`] directly or feed a move
//! history string (e.g. `R3B3R2B4`) through [`best_move`]. The computer plays
//! for the side whose turn is next after that history. The engine never logs.
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod board;
pub mod config;
pub mod eval;
pub mod notation;
pub mod patterns;
pub mod search;

pub use board::{Board, Cell, Coord, Side};
pub use config::{SearchConfig, Weights, COLS, DEFAULT_MAX_PLY, ROWS, WIN_LENGTH};
pub use eval::{evaluate, evaluate_with};
pub use notation::{parse_history, Placement};
pub use patterns::{count_three_in_a_row, count_two_in_a_row, find_four_in_a_row, WinLine};
pub use search::{choose_move, search, SearchOutcome};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move string at position {position}: {reason}")]
    ParseMove { position: usize, reason: String },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
    #[error("column {column} is out of bounds")]
    ColumnOutOfBounds { column: usize },
    #[error("max ply must be at least 1, got {0}")]
    InvalidPly(usize),
    #[error("no legal moves remain")]
    NoMoves,
}

impl GameError {
    /// True for the errors raised by a rejected disc drop.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            GameError::ColumnFull { .. } | GameError::ColumnOutOfBounds { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Move history; the engine plays for the side to move after it.
    pub position: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub column: usize,
    pub row: usize,
    pub score: i32,
}

pub fn best_move(request: &MoveRequest, config: &SearchConfig) -> Result<MoveResponse, GameError> {
    let moves = parse_history(&request.position)?;
    let board = Board::from_history(&moves)?;
    let outcome = search(&board, board.turn(), config)?.ok_or(GameError::NoMoves)?;
    Ok(MoveResponse {
        column: outcome.column,
        row: outcome.row,
        score: outcome.score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_ply: usize) -> SearchConfig {
        SearchConfig {
            max_ply,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn takes_immediate_win_horizontal() {
        // Red holds columns 3,4,5 on the bottom row and is to move; 2 and 6 both win,
        // the left-most one is kept.
        let res = best_move(
            &MoveRequest {
                position: "R3B0R4B0R5B1".to_string(),
            },
            &config(1),
        )
        .unwrap();
        assert_eq!(res.column, 2);
        assert_eq!(res.row, ROWS - 1);
        assert_eq!(res.score, 11);
    }

    #[test]
    fn blocks_vertical_four_incoming() {
        // Black stacks three in column 0; red must cap it.
        let res = best_move(
            &MoveRequest {
                position: "B0R1B0R1B0".to_string(),
            },
            &config(2),
        )
        .unwrap();
        assert_eq!(res.column, 0);
        assert_eq!(res.row, 2);
    }

    #[test]
    fn plays_for_the_side_to_move() {
        // Same discs, different side to move: red wins on the left of its
        // bottom row, black on top of its column.
        let red = best_move(
            &MoveRequest {
                position: "R1B6R2B6R3B6".to_string(),
            },
            &config(1),
        )
        .unwrap();
        assert_eq!(red.column, 0);

        let black = best_move(
            &MoveRequest {
                position: "B6R1B6R2B6R3".to_string(),
            },
            &config(1),
        )
        .unwrap();
        assert_eq!(black.column, 6);
        assert_eq!(black.row, 2);
    }

    #[test]
    fn rejects_bad_depth() {
        let config = SearchConfig {
            max_ply: 0,
            ..SearchConfig::default()
        };
        let res = best_move(
            &MoveRequest {
                position: String::new(),
            },
            &config,
        );
        assert_eq!(res, Err(GameError::InvalidPly(0)));
    }

    #[test]
    fn reports_parse_errors() {
        let res = best_move(
            &MoveRequest {
                position: "R9".to_string(),
            },
            &SearchConfig::default(),
        );
        assert!(matches!(res, Err(GameError::ParseMove { position: 1, .. })));
    }

    #[test]
    fn invalid_move_kind() {
        assert!(GameError::ColumnFull { column: 2 }.is_invalid_move());
        assert!(GameError::ColumnOutOfBounds { column: 9 }.is_invalid_move());
        assert!(!GameError::InvalidPly(0).is_invalid_move());
    }
}
