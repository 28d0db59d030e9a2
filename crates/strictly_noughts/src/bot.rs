//! Heuristic bot opponent.
//!
//! The bot looks one move ahead: it finishes its own line if it can,
//! otherwise blocks the player's line, otherwise plays a random empty
//! square. Lines are always scanned in [`WinPattern::ALL`] order.

use crate::position::Position;
use crate::rules::WinPattern;
use crate::types::{Board, Mark};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the bot picked its square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum BotIntent {
    /// Completes one of the bot's own lines.
    #[display("complete {}", _0)]
    Complete(WinPattern),
    /// Blocks a line the player is one square from winning.
    #[display("block {}", _0)]
    Block(WinPattern),
    /// No line to complete or block.
    #[display("random")]
    Random,
}

/// A move chosen by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotMove {
    /// Square the bot plays.
    pub position: Position,
    /// Rule that selected it.
    pub intent: BotIntent,
}

impl std::fmt::Display for BotMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.position.label(), self.intent)
    }
}

/// First line `mark` can complete this turn, with the square that completes it.
pub fn find_completion(board: &Board, mark: Mark) -> Option<(WinPattern, Position)> {
    WinPattern::ALL
        .into_iter()
        .find_map(|pattern| pattern.completing_cell(board, mark).map(|pos| (pattern, pos)))
}

/// Picks the bot's reply without touching the board.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<BotMove> {
    let chosen = if let Some((pattern, position)) = find_completion(board, Mark::Bot) {
        BotMove {
            position,
            intent: BotIntent::Complete(pattern),
        }
    } else if let Some((pattern, position)) = find_completion(board, Mark::Player) {
        BotMove {
            position,
            intent: BotIntent::Block(pattern),
        }
    } else {
        let position = *board.empty_positions().choose(rng)?;
        BotMove {
            position,
            intent: BotIntent::Random,
        }
    };

    debug!(bot_move = %chosen, "Bot selected move");
    Some(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::check_win;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn place_all(board: &mut Board, mark: Mark, cells: &[Position]) {
        for &pos in cells {
            board.place(pos, mark).unwrap();
        }
    }

    #[test]
    fn test_completes_own_line_over_blocking() {
        let mut board = Board::new();
        // Bot threatens the left column, player threatens the bottom row.
        place_all(&mut board, Mark::Bot, &[Position::TopLeft, Position::MiddleLeft]);
        place_all(&mut board, Mark::Player, &[Position::BottomCenter, Position::BottomRight]);

        let mut rng = StdRng::seed_from_u64(7);
        let chosen = select_move(&board, &mut rng).unwrap();

        assert_eq!(chosen.position, Position::BottomLeft);
        assert_eq!(chosen.intent, BotIntent::Complete(WinPattern::LeftColumn));

        board.place(chosen.position, Mark::Bot).unwrap();
        assert_eq!(check_win(&board, Mark::Bot), Some(WinPattern::LeftColumn));
    }

    #[test]
    fn test_blocks_player_threat() {
        let mut board = Board::new();
        place_all(&mut board, Mark::Player, &[Position::TopLeft, Position::TopCenter]);
        board.place(Position::Center, Mark::Bot).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let chosen = select_move(&board, &mut rng).unwrap();

        assert_eq!(chosen.position, Position::TopRight);
        assert_eq!(chosen.intent, BotIntent::Block(WinPattern::TopRow));
    }

    #[test]
    fn test_first_threat_in_scan_order_is_blocked() {
        let mut board = Board::new();
        // Player threatens the middle column (index 1) and the bottom row (index 5).
        place_all(
            &mut board,
            Mark::Player,
            &[Position::TopCenter, Position::Center, Position::BottomLeft],
        );

        let mut rng = StdRng::seed_from_u64(1);
        let chosen = select_move(&board, &mut rng).unwrap();

        assert_eq!(chosen.intent, BotIntent::Block(WinPattern::MiddleColumn));
        assert_eq!(chosen.position, Position::BottomCenter);
    }

    #[test]
    fn test_random_fallback_lands_on_empty_square() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Player).unwrap();

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen = select_move(&board, &mut rng).unwrap();
            assert_eq!(chosen.intent, BotIntent::Random);
            assert!(board.is_empty(chosen.position));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::Player } else { Mark::Bot };
            board.place(pos, mark).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select_move(&board, &mut rng), None);
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let mut board = Board::new();
        place_all(&mut board, Mark::Player, &[Position::TopLeft, Position::TopCenter]);
        board.place(Position::TopRight, Mark::Bot).unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        let chosen = select_move(&board, &mut rng).unwrap();
        assert_eq!(chosen.intent, BotIntent::Random);
    }
}
