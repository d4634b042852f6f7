pub mod action;
pub mod board;
pub mod setup;
pub mod types;

pub use action::Action;
pub use board::{Board, BoardError};
pub use setup::board_from_strings;
pub use types::{Cell, Color};
