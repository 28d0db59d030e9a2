//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 lines that win the round.
///
/// Declaration order is the scan order used everywhere: columns left to
/// right, rows top to bottom, then the two diagonals. Only the first
/// complete line in this order is ever reported.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum WinPattern {
    /// Cells 0, 3, 6.
    #[display("left column")]
    LeftColumn,
    /// Cells 1, 4, 7.
    #[display("middle column")]
    MiddleColumn,
    /// Cells 2, 5, 8.
    #[display("right column")]
    RightColumn,
    /// Cells 0, 1, 2.
    #[display("top row")]
    TopRow,
    /// Cells 3, 4, 5.
    #[display("middle row")]
    MiddleRow,
    /// Cells 6, 7, 8.
    #[display("bottom row")]
    BottomRow,
    /// Cells 0, 4, 8.
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells 6, 4, 2.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl WinPattern {
    /// All patterns in scan order.
    pub const ALL: [WinPattern; 8] = [
        WinPattern::LeftColumn,
        WinPattern::MiddleColumn,
        WinPattern::RightColumn,
        WinPattern::TopRow,
        WinPattern::MiddleRow,
        WinPattern::BottomRow,
        WinPattern::MainDiagonal,
        WinPattern::AntiDiagonal,
    ];

    /// Index of the pattern in scan order (0-7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pattern at `index` in scan order.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The three cells of the line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            WinPattern::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinPattern::MiddleColumn => [TopCenter, Center, BottomCenter],
            WinPattern::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinPattern::TopRow => [TopLeft, TopCenter, TopRight],
            WinPattern::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinPattern::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinPattern::MainDiagonal => [TopLeft, Center, BottomRight],
            WinPattern::AntiDiagonal => [BottomLeft, Center, TopRight],
        }
    }

    /// True if all three cells hold `mark`.
    pub fn is_complete(self, board: &Board, mark: Mark) -> bool {
        self.cells().iter().all(|&pos| board.get(pos).is(mark))
    }

    /// The empty cell that would complete this line for `mark`.
    ///
    /// Returns `Some` only when `mark` holds exactly two cells and the
    /// third is empty.
    pub fn completing_cell(self, board: &Board, mark: Mark) -> Option<Position> {
        let cells = self.cells();
        let held = cells.iter().filter(|&&pos| board.get(pos).is(mark)).count();
        if held != 2 {
            return None;
        }
        cells.into_iter().find(|&pos| board.is_empty(pos))
    }
}

/// Returns the first pattern (in scan order) fully held by `mark`.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> Option<WinPattern> {
    WinPattern::ALL
        .into_iter()
        .find(|pattern| pattern.is_complete(board, mark))
}
