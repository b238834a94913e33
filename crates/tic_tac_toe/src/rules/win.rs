//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// The eight canonical lines in priority order.
///
/// Rows top-to-bottom, then columns left-to-right, then the primary
/// diagonal before the anti-diagonal. The first complete line wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// The three positions of a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Returns the positions of the line, in line order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the board indices of the line, in line order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks if `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the first complete line,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, WinningLine([a, b, c])))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX______".parse().unwrap();
        let (player, line) = check_winner(&board).unwrap();
        assert_eq!(player, Player::X);
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "_O_ XO_ XO_".parse().unwrap();
        let (player, line) = check_winner(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.indices(), [1, 4, 7]);
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O__ _O_ __O".parse().unwrap();
        let (player, line) = check_winner(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.indices(), [0, 4, 8]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "__X _X_ X__".parse().unwrap();
        let (_, line) = check_winner(&board).unwrap();
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_rows_take_priority_over_columns() {
        // Top row and left column both complete.
        let board: Board = "XXX X__ X__".parse().unwrap();
        let (_, line) = check_winner(&board).unwrap();
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_primary_diagonal_before_anti_diagonal() {
        let board: Board = "X_X _X_ X_X".parse().unwrap();
        let (_, line) = check_winner(&board).unwrap();
        assert_eq!(line.indices(), [0, 4, 8]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_______".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_line_contains() {
        let board: Board = "__X _X_ X__".parse().unwrap();
        let (_, line) = check_winner(&board).unwrap();
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
    }
}
