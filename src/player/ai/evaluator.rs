//! Evaluator trait for board evaluation
//!
//! Defines a common interface for different evaluation strategies.

use super::movegen::MoveGenerator;
use crate::core::{Board, Color};

/// Largest magnitude any built-in heuristic can produce.
pub const MAX_SCORE: f32 = 100.0;

/// Trait for evaluating board positions
pub trait Evaluator: Send + Sync {
    /// Evaluate the board from `me`'s perspective
    ///
    /// Returns:
    ///   - Positive score: `me` advantage
    ///   - Negative score: `enemy` advantage
    ///   - Zero: Equal position
    fn evaluate(&self, board: &Board, me: Color, enemy: Color, movegen: &MoveGenerator) -> f32;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;

    /// Lowest value `evaluate` can return.
    fn min_value(&self) -> f32 {
        -MAX_SCORE
    }

    /// Highest value `evaluate` can return.
    fn max_value(&self) -> f32 {
        MAX_SCORE
    }
}
