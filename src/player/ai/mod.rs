pub mod alpha_beta;
pub mod config;
pub mod eval;
pub mod evaluator;
pub mod minimax;
pub mod movegen;

pub use alpha_beta::{GameTreeSearch, SearchStats, TurnClock};
pub use config::{AgentConfig, EvaluationConfig, Heuristic, SearchConfig};
pub use eval::{MaterialEvaluator, MobilityEvaluator};
pub use evaluator::Evaluator;
pub use minimax::{MinimaxAgent, RootChoice};
pub use movegen::MoveGenerator;
