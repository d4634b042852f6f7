use crate::core::{Action, Color};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    /// The agent must pass; the host decides what that means.
    #[error("{0} has no legal move")]
    NoLegalMove(Color),
    #[error("action {0} is off the board or on a hole")]
    InvalidAction(Action),
}
