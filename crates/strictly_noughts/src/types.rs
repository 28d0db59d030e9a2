//! Core domain types for the noughts board.

use crate::error::GameError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed on the board.
///
/// The human always plays crosses and the bot always plays noughts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// The human player's mark (X).
    #[display("Player")]
    Player,
    /// The bot's mark (O).
    #[display("Bot")]
    Bot,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Player => Mark::Bot,
            Mark::Bot => Mark::Player,
        }
    }

    /// Symbol drawn for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Bot => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns true if the square holds `mark`.
    pub fn is(self, mark: Mark) -> bool {
        self == Square::Occupied(mark)
    }
}

/// 3x3 board, the single source of truth for cell contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places `mark` on an empty square.
    ///
    /// A marked square never changes until the board is cleared.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), GameError> {
        if !self.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares.iter().filter(|s| s.is(mark)).count()
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => '.',
                    Square::Occupied(mark) => mark.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::Player).unwrap();
        assert_eq!(
            board.place(Position::Center, Mark::Bot),
            Err(GameError::CellOccupied(Position::Center))
        );
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::Player));
    }

    #[test]
    fn test_clear_empties_board() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Player).unwrap();
        board.place(Position::BottomRight, Mark::Bot).unwrap();
        board.clear();
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Player).unwrap();
        board.place(Position::Center, Mark::Bot).unwrap();
        assert_eq!(board.display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
