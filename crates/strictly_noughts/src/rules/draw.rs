//! Draw detection logic.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// True when no square is left to play.
///
/// Only meaningful once [`check_win`](super::check_win) has found nothing
/// for either mark; callers check the win first.
pub fn check_draw(board: &Board) -> bool {
    is_full(board)
}
