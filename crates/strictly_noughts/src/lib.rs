//! Strictly Noughts - noughts and crosses against a heuristic bot
//!
//! Pure game logic with no rendering, audio or timers. A front end feeds
//! [`Input`]s into a [`Game`] and reacts to the [`Notification`]s it
//! returns.
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{Game, Outcome};
//!
//! let mut game = Game::with_seed(42);
//! let result = game.apply_player_move(4).expect("center is free");
//! assert_eq!(result.outcome, Outcome::Ongoing);
//! assert!(result.bot_move.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bot;
mod error;
mod events;
mod game;
mod position;
pub mod rules;
mod types;

pub use bot::{find_completion, select_move, BotIntent, BotMove};
pub use error::GameError;
pub use events::{Input, Notification, Sound};
pub use game::{Game, MoveResult, Outcome, Score};
pub use position::{Direction, Position};
pub use rules::{check_draw, check_win, WinPattern};
pub use types::{Board, Mark, Square};
