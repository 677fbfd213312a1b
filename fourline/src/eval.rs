use crate::board::{Board, Side};
use crate::config::Weights;
use crate::patterns::{count_three_in_a_row, count_two_in_a_row, find_four_in_a_row};

/// Static score of `board` from `perspective`'s point of view, default weights.
/// Arithmetic saturates, so extreme weights clamp instead of wrapping.
pub fn evaluate(board: &Board, perspective: Side) -> i32 {
    evaluate_with(board, perspective, &Weights::default())
}

pub fn evaluate_with(board: &Board, perspective: Side, weights: &Weights) -> i32 {
    let winner = find_four_in_a_row(board).map(|(side, _)| side);
    let opponent = perspective.opponent();
    if winner == Some(opponent) {
        return weights.opponent_win;
    }

    let threes = |side: Side| {
        let counted = match side {
            Side::Second if weights.second_reuses_first_threes => Side::First,
            _ => side,
        };
        count_three_in_a_row(board, counted) as i32
    };
    let raw = |side: Side| {
        let bonus = if winner == Some(side) { weights.win } else { 0 };
        let twos = count_two_in_a_row(board, side) as i32;
        bonus
            .saturating_add(weights.three.saturating_mul(threes(side)))
            .saturating_add(weights.two.saturating_mul(twos))
    };

    raw(perspective).saturating_sub(raw(opponent))
}
