use crate::core::{Action, Board, Color};
use crate::logic::Rules;

/// Enumerates legal placements through the injected host rules.
pub struct MoveGenerator {
    rules: Box<dyn Rules>,
}

impl MoveGenerator {
    pub fn new(rules: impl Rules + 'static) -> Self {
        Self {
            rules: Box::new(rules),
        }
    }

    /// 合法手を行優先順で列挙する
    ///
    /// Holes are never visited. The order decides ties upstream: among equal
    /// scores the first enumerated action wins. An empty result means `color`
    /// has to pass here.
    pub fn enumerate(&self, board: &Board, color: Color) -> Vec<Action> {
        board
            .playable()
            .filter(|a| self.rules.is_legal(board, a.row, a.col, color))
            .collect()
    }

    /// Number of legal placements for `color`.
    pub fn mobility(&self, board: &Board, color: Color) -> usize {
        board
            .playable()
            .filter(|a| self.rules.is_legal(board, a.row, a.col, color))
            .count()
    }

    pub fn has_move(&self, board: &Board, color: Color) -> bool {
        board
            .playable()
            .any(|a| self.rules.is_legal(board, a.row, a.col, color))
    }

    pub fn apply(&self, board: &mut Board, action: Action, color: Color) {
        self.rules.apply_move(board, action.row, action.col, color);
    }

    /// Deep copy of `board` with `action` played; `board` is left untouched.
    pub fn child(&self, board: &Board, action: Action, color: Color) -> Board {
        let mut next = board.clone();
        self.apply(&mut next, action, color);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{board_from_strings, Cell};
    use crate::logic::{Othello, PlaceAnywhere};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_board(rng: &mut StdRng) -> Board {
        let size = rng.gen_range(4..=6);
        let mut board = Board::new(size);
        for row in 0..size {
            for col in 0..size {
                let cell = match rng.gen_range(0..10) {
                    0 | 1 => Cell::Hole,
                    2 | 3 | 4 => Cell::Black,
                    5 | 6 | 7 => Cell::White,
                    _ => Cell::Empty,
                };
                board.set(row, col, cell);
            }
        }
        board
    }

    #[test]
    fn never_enumerates_holes() {
        let mut rng = StdRng::seed_from_u64(7);
        let generators = [MoveGenerator::new(Othello), MoveGenerator::new(PlaceAnywhere)];
        for _ in 0..200 {
            let board = random_board(&mut rng);
            for movegen in &generators {
                for color in [Color::Black, Color::White] {
                    for action in movegen.enumerate(&board, color) {
                        assert_ne!(board.get(action.row, action.col), Cell::Hole);
                    }
                }
            }
        }
    }

    #[test]
    fn enumeration_is_row_major() {
        let movegen = MoveGenerator::new(PlaceAnywhere);
        let board = board_from_strings(&["B . #", ". # .", ". W ."]).unwrap();
        let actions = movegen.enumerate(&board, Color::Black);
        assert_eq!(
            actions,
            vec![
                Action::new(0, 1),
                Action::new(1, 0),
                Action::new(1, 2),
                Action::new(2, 0),
                Action::new(2, 2),
            ]
        );
        assert_eq!(movegen.mobility(&board, Color::Black), 5);
    }

    #[test]
    fn full_board_has_no_moves() {
        let movegen = MoveGenerator::new(Othello);
        let board = board_from_strings(&["B W", "W B"]).unwrap();
        assert!(movegen.enumerate(&board, Color::Black).is_empty());
        assert!(!movegen.has_move(&board, Color::White));
    }

    #[test]
    fn child_leaves_parent_untouched() {
        let movegen = MoveGenerator::new(Othello);
        let parent = board_from_strings(&[". . . .", ". W B .", ". B W .", ". . . ."]).unwrap();
        let child = movegen.child(&parent, Action::new(0, 1), Color::Black);
        assert_eq!(parent.get(1, 1), Cell::White);
        assert_eq!(child.get(1, 1), Cell::Black);
    }
}
