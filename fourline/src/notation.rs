//! Move history strings such as `R3B3R2B4`: a side letter (`R` red, the
//! first side; `B` black, the second) followed by a single column digit.
use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::config::COLS;
use crate::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub side: Side,
    pub column: usize,
}

pub fn parse_history(history: &str) -> Result<Vec<Placement>, GameError> {
    let chars: Vec<char> = history.trim().chars().collect();
    let mut moves = Vec::with_capacity(chars.len() / 2);
    let mut idx = 0;
    while idx < chars.len() {
        let letter = chars[idx];
        let side = match letter {
            'R' | 'r' => Side::First,
            'B' | 'b' => Side::Second,
            _ => {
                return Err(GameError::ParseMove {
                    position: idx,
                    reason: format!("expected R or B, found {letter}"),
                })
            }
        };
        idx += 1;
        let Some(&digit) = chars.get(idx) else {
            return Err(GameError::ParseMove {
                position: idx,
                reason: "missing column number".to_string(),
            });
        };
        let column = match digit.to_digit(10) {
            Some(d) if (d as usize) < COLS => d as usize,
            Some(_) => {
                return Err(GameError::ParseMove {
                    position: idx,
                    reason: format!("column must be 0-{}", COLS - 1),
                })
            }
            None => {
                return Err(GameError::ParseMove {
                    position: idx,
                    reason: format!("expected column digit, found {digit}"),
                })
            }
        };
        moves.push(Placement { side, column });
        idx += 1;
    }
    Ok(moves)
}
