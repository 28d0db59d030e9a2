//! Errors raised by the direct game API.
//!
//! The input path swallows these; they exist so callers driving the
//! game programmatically can tell why a move was refused.

use crate::position::Position;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The round has concluded and is waiting to be reset.
    #[display("Round is over")]
    RoundOver,
}

impl std::error::Error for GameError {}
