use serde::{Deserialize, Serialize};
use std::fmt;

/// A placement on the grid (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
