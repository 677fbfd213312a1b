//! Line detection over fixed-length windows.
//!
//! Every straight segment of [`WIN_LENGTH`] cells is enumerated once, in a
//! fixed scan order: horizontal rows from the bottom up, then vertical, then
//! the rising diagonal, then the falling one. Within a direction anchors run
//! from the bottom row upwards. The counting helpers tally windows, not
//! maximal runs, so overlapping windows each contribute.
use once_cell::sync::Lazy;

use crate::board::{Board, Coord, Side};
use crate::config::{COLS, ROWS, WIN_LENGTH};

/// The cells of a four in a row, starting at its scan anchor.
pub type WinLine = [Coord; WIN_LENGTH];

static WINDOWS: Lazy<Vec<WinLine>> = Lazy::new(generate_windows);

pub fn find_four_in_a_row(board: &Board) -> Option<(Side, WinLine)> {
    WINDOWS.iter().find_map(|window| {
        let side = board.at(window[0]).side()?;
        leading_run(board, window, side, WIN_LENGTH).then_some((side, *window))
    })
}

pub fn count_three_in_a_row(board: &Board, side: Side) -> usize {
    count_leading(board, side, 3)
}

pub fn count_two_in_a_row(board: &Board, side: Side) -> usize {
    count_leading(board, side, 2)
}

/// Number of windows whose first `len` cells all belong to `side`.
fn count_leading(board: &Board, side: Side, len: usize) -> usize {
    WINDOWS
        .iter()
        .filter(|window| leading_run(board, window, side, len))
        .count()
}

fn leading_run(board: &Board, window: &WinLine, side: Side, len: usize) -> bool {
    window[..len]
        .iter()
        .all(|&at| board.at(at).side() == Some(side))
}

fn generate_windows() -> Vec<WinLine> {
    let reach = WIN_LENGTH - 1;
    let mut windows = Vec::new();
    // Horizontal
    for row in (0..ROWS).rev() {
        for col in 0..COLS - reach {
            windows.push(std::array::from_fn(|i| Coord::new(row, col + i)));
        }
    }
    // Vertical
    for row in (reach..ROWS).rev() {
        for col in 0..COLS {
            windows.push(std::array::from_fn(|i| Coord::new(row - i, col)));
        }
    }
    // Diagonal /
    for row in (reach..ROWS).rev() {
        for col in 0..COLS - reach {
            windows.push(std::array::from_fn(|i| Coord::new(row - i, col + i)));
        }
    }
    // Diagonal \
    for row in (reach..ROWS).rev() {
        for col in (reach..COLS).rev() {
            windows.push(std::array::from_fn(|i| Coord::new(row - i, col - i)));
        }
    }
    windows
}
