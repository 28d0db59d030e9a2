//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`](crate::Board). The game state machine
//! and the bot both evaluate positions through these.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_full};
pub use win::{check_win, WinPattern};
