//! Inputs consumed and notifications produced by the game.
//!
//! The game never renders, plays audio or runs timers itself. It reports
//! what happened as [`Notification`]s and a presentation layer reacts.

use crate::game::Outcome;
use crate::position::{Direction, Position};
use crate::rules::WinPattern;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Input event from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A direction key was pressed.
    Direction(Direction),
    /// The confirm key was pressed on the cursor cell.
    Confirm,
    /// The reset timer elapsed.
    TimerFired,
}

/// Sound effect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Sound {
    /// Cursor moved.
    Move,
    /// Bot answered a move.
    Select,
    /// Round concluded.
    Conclude,
}

/// Something the presentation layer should reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    /// A mark was placed.
    CellMarked(Position, Mark),
    /// A completed line should be highlighted.
    PatternHighlighted(WinPattern),
    /// The cursor moved.
    CursorMoved(Position),
    /// The round reached a terminal outcome.
    RoundConcluded(Outcome),
    /// Every cell and highlight was cleared.
    BoardCleared,
    /// A score counter changed.
    ScoreChanged(Mark, u32),
    /// Play a sound effect.
    PlaySound(Sound),
    /// Start (or restart) the reset countdown.
    StartResetTimer,
    /// Stop the reset countdown.
    StopResetTimer,
}
