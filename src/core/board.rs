use super::action::Action;
use super::types::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
}

/// Square game grid, stored row-major.
///
/// `Clone` is the deep copy used to explore hypothetical futures; a clone
/// shares nothing with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRows", into = "BoardRows")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// JSON shape of a board: a list of rows.
#[derive(Serialize, Deserialize)]
struct BoardRows {
    rows: Vec<Vec<Cell>>,
}

impl TryFrom<BoardRows> for Board {
    type Error = BoardError;

    fn try_from(value: BoardRows) -> Result<Self, Self::Error> {
        Board::from_rows(value.rows)
    }
}

impl From<Board> for BoardRows {
    fn from(board: Board) -> Self {
        BoardRows {
            rows: board.cells.chunks(board.size).map(<[Cell]>::to_vec).collect(),
        }
    }
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: line.len(),
                    size,
                });
            }
            cells.extend(line);
        }
        Ok(Board { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.size + col] = cell;
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Non-hole coordinates in row-major order.
    pub fn playable(&self) -> impl Iterator<Item = Action> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != Cell::Hole)
            .map(move |(i, _)| Action::new(i / self.size, i % self.size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
