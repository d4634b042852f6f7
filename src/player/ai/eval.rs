//! # Evaluation Module
//!
//! Static evaluation strategies for a board snapshot. Every strategy scores
//! from the acting player's perspective and stays within `[-100, 100]`.
//!
//! ## Strategies
//! 1. **Material**: normalized difference of owned cells.
//! 2. **Mobility**: share of legal moves, signed by which side has more,
//!    scaled by a fixed weight.

use super::evaluator::{Evaluator, MAX_SCORE};
use super::movegen::MoveGenerator;
use crate::core::{Board, Cell, Color};

/// Default scaling applied to the mobility differential.
pub const MOBILITY_WEIGHT: f32 = 0.8;

/// Coin differential: `100 * (m - e) / (m + e)`, zero on an empty board.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, me: Color, enemy: Color, _movegen: &MoveGenerator) -> f32 {
        let mine = board.count(Cell::from(me)) as f32;
        let theirs = board.count(Cell::from(enemy)) as f32;
        if mine + theirs == 0.0 {
            return 0.0;
        }
        MAX_SCORE * (mine - theirs) / (mine + theirs)
    }

    fn name(&self) -> &str {
        "material"
    }
}

/// Mobility differential.
///
/// Zero when both sides have the same number of legal moves. Otherwise the
/// magnitude is `100 * mv / (mv + ev)`, negated when `me` has fewer moves.
#[derive(Debug, Clone, Copy)]
pub struct MobilityEvaluator {
    pub weight: f32,
}

impl MobilityEvaluator {
    pub fn new(weight: f32) -> Self {
        Self { weight }
    }
}

impl Default for MobilityEvaluator {
    fn default() -> Self {
        Self::new(MOBILITY_WEIGHT)
    }
}

impl Evaluator for MobilityEvaluator {
    fn evaluate(&self, board: &Board, me: Color, enemy: Color, movegen: &MoveGenerator) -> f32 {
        let mv = movegen.mobility(board, me);
        let ev = movegen.mobility(board, enemy);
        if mv == ev {
            return 0.0;
        }
        let share = MAX_SCORE * mv as f32 / (mv + ev) as f32;
        let signed = if mv < ev { -share } else { share };
        self.weight * signed
    }

    fn name(&self) -> &str {
        "mobility"
    }

    fn min_value(&self) -> f32 {
        -MAX_SCORE * self.weight.abs()
    }

    fn max_value(&self) -> f32 {
        MAX_SCORE * self.weight.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board_from_strings;
    use crate::logic::{Othello, PlaceAnywhere};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn material_is_full_when_enemy_has_nothing() {
        let movegen = MoveGenerator::new(Othello);
        let board = board_from_strings(&["B B B B"; 4]).unwrap();
        let value = MaterialEvaluator.evaluate(&board, Color::Black, Color::White, &movegen);
        assert_eq!(value, 100.0);
        let value = MaterialEvaluator.evaluate(&board, Color::White, Color::Black, &movegen);
        assert_eq!(value, -100.0);
    }

    #[test]
    fn material_is_zero_on_empty_board() {
        let movegen = MoveGenerator::new(Othello);
        let board = board_from_strings(&[". # .", ". . .", "# . ."]).unwrap();
        let value = MaterialEvaluator.evaluate(&board, Color::Black, Color::White, &movegen);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn material_stays_bounded() {
        let movegen = MoveGenerator::new(Othello);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..300 {
            let size = rng.gen_range(4..=6);
            let mut board = Board::new(size);
            for row in 0..size {
                for col in 0..size {
                    let cell = match rng.gen_range(0..4) {
                        0 => Cell::Empty,
                        1 => Cell::Hole,
                        2 => Cell::Black,
                        _ => Cell::White,
                    };
                    board.set(row, col, cell);
                }
            }
            let value = MaterialEvaluator.evaluate(&board, Color::White, Color::Black, &movegen);
            assert!((-100.0..=100.0).contains(&value), "{} out of range", value);
        }
    }

    #[test]
    fn mobility_is_zero_when_balanced() {
        let movegen = MoveGenerator::new(Othello);
        let opening = board_from_strings(&[". . . .", ". W B .", ". B W .", ". . . ."]).unwrap();
        assert_eq!(movegen.mobility(&opening, Color::Black), 4);
        assert_eq!(movegen.mobility(&opening, Color::White), 4);
        let value =
            MobilityEvaluator::default().evaluate(&opening, Color::Black, Color::White, &movegen);
        assert_eq!(value, 0.0);

        // every empty cell is legal for both sides under these rules
        let movegen = MoveGenerator::new(PlaceAnywhere);
        let board = board_from_strings(&["B . #", ". W .", "# . ."]).unwrap();
        let value =
            MobilityEvaluator::new(1.0).evaluate(&board, Color::White, Color::Black, &movegen);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn mobility_sign_follows_the_side_with_more_moves() {
        let movegen = MoveGenerator::new(Othello);
        // Black can play (0, 2); White has nothing.
        let board = board_from_strings(&["B W . .", ". . . .", ". . . .", ". . . ."]).unwrap();
        let evaluator = MobilityEvaluator::new(1.0);
        assert_eq!(evaluator.evaluate(&board, Color::Black, Color::White, &movegen), 100.0);
        // zero own moves means a zero share
        assert_eq!(evaluator.evaluate(&board, Color::White, Color::Black, &movegen), 0.0);

        let weighted = MobilityEvaluator::default();
        let value = weighted.evaluate(&board, Color::Black, Color::White, &movegen);
        assert!((value - 80.0).abs() < 1e-4);
        assert!(value <= weighted.max_value());
    }
}
