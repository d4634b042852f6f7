//! Decision core for a two-player placement game on a square grid with holes.
//!
//! The host owns the rules (see [`logic::Rules`]) and calls
//! [`PlayerController::decide`] once per turn; the agent answers with the
//! action whose depth-limited minimax value is highest.

pub mod core;
pub mod logic;
pub mod player;


pub use crate::core::{Action, Board, Cell, Color};
pub use logic::{Othello, Rules};
pub use player::ai::{AgentConfig, MinimaxAgent};
pub use player::{AgentError, PlayerController, RemainingTimes};
