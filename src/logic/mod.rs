use crate::core::{Board, Cell, Color};

/// ホスト側のルール (合法判定と着手の適用)
///
/// The search only talks to the game through this trait, so it can be run
/// against any board mechanics, including test fakes.
pub trait Rules: Send + Sync {
    /// Pure predicate, no side effects.
    fn is_legal(&self, board: &Board, row: usize, col: usize, color: Color) -> bool;

    /// Places `color` at (row, col) in place, including every rule-defined side effect.
    fn apply_move(&self, board: &mut Board, row: usize, col: usize, color: Color);
}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Standard flipping rules: a placement must bracket at least one straight
/// line of opponent stones. Holes and empty cells break a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Othello;

impl Othello {
    /// Cells that would flip if `color` were placed at (row, col).
    pub fn flips(board: &Board, row: usize, col: usize, color: Color) -> Vec<(usize, usize)> {
        let mut flipped = Vec::new();
        if !board.contains(row, col) || board.get(row, col) != Cell::Empty {
            return flipped;
        }
        for (dr, dc) in DIRECTIONS {
            let line = bracketed_line(board, row, col, dr, dc, color);
            flipped.extend(line);
        }
        flipped
    }
}

fn step(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    board.contains(r, c).then_some((r, c))
}

/// 一方向に挟めるなら、挟まれた石の座標を返す
fn bracketed_line(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    color: Color,
) -> Vec<(usize, usize)> {
    let enemy = Cell::from(color.opponent());
    let own = Cell::from(color);
    let mut line = Vec::new();
    let mut cursor = step(board, row, col, dr, dc);
    while let Some((r, c)) = cursor {
        match board.get(r, c) {
            cell if cell == enemy => line.push((r, c)),
            cell if cell == own => return line,
            _ => break,
        }
        cursor = step(board, r, c, dr, dc);
    }
    Vec::new()
}

impl Rules for Othello {
    fn is_legal(&self, board: &Board, row: usize, col: usize, color: Color) -> bool {
        if !board.contains(row, col) || board.get(row, col) != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| !bracketed_line(board, row, col, dr, dc, color).is_empty())
    }

    fn apply_move(&self, board: &mut Board, row: usize, col: usize, color: Color) {
        let flipped = Othello::flips(board, row, col, color);
        board.set(row, col, Cell::from(color));
        for (r, c) in flipped {
            board.set(r, c, Cell::from(color));
        }
    }
}

/// Any empty cell is legal and nothing flips.
#[cfg(test)]
pub(crate) struct PlaceAnywhere;

#[cfg(test)]
impl Rules for PlaceAnywhere {
    fn is_legal(&self, board: &Board, row: usize, col: usize, _color: Color) -> bool {
        board.get(row, col) == Cell::Empty
    }

    fn apply_move(&self, board: &mut Board, row: usize, col: usize, color: Color) {
        board.set(row, col, Cell::from(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board_from_strings;

    fn opening() -> Board {
        board_from_strings(&[". . . .", ". W B .", ". B W .", ". . . ."]).unwrap()
    }

    #[test]
    fn opening_has_four_symmetric_moves() {
        let board = opening();
        let legal: Vec<(usize, usize)> = board
            .playable()
            .filter(|a| Othello.is_legal(&board, a.row, a.col, Color::Black))
            .map(|a| (a.row, a.col))
            .collect();
        assert_eq!(legal, vec![(0, 1), (1, 0), (2, 3), (3, 2)]);
    }

    #[test]
    fn apply_flips_bracketed_stones() {
        let mut board = opening();
        Othello.apply_move(&mut board, 0, 1, Color::Black);
        assert_eq!(board.get(0, 1), Cell::Black);
        assert_eq!(board.get(1, 1), Cell::Black);
        assert_eq!(board.count(Cell::Black), 4);
        assert_eq!(board.count(Cell::White), 1);
    }

    #[test]
    fn holes_break_lines() {
        let board = board_from_strings(&["B # W .", ". . . .", ". . . .", ". . . ."]).unwrap();
        assert!(!Othello.is_legal(&board, 0, 3, Color::Black));
        assert!(Othello::flips(&board, 0, 3, Color::Black).is_empty());

        let board = board_from_strings(&["B W . .", ". . . .", ". . . .", ". . . ."]).unwrap();
        assert!(Othello.is_legal(&board, 0, 2, Color::Black));
    }

    #[test]
    fn occupied_and_hole_cells_are_never_legal() {
        let board = board_from_strings(&["# W B", ". . .", ". . ."]).unwrap();
        assert!(!Othello.is_legal(&board, 0, 0, Color::Black));
        assert!(!Othello.is_legal(&board, 0, 1, Color::Black));
        assert!(!Othello.is_legal(&board, 5, 5, Color::Black));
    }
}
