pub mod ai;
pub mod controller;
pub mod error;

pub use ai::MinimaxAgent;
pub use controller::{PlayerController, RemainingTimes};
pub use error::AgentError;
