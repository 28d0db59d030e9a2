//! Round lifecycle tests through the public game API.

mod common;

use common::{board, ZeroRng};
use rand::rngs::StdRng;
use rand::SeedableRng;
use strictly_noughts::{
    BotIntent, Direction, Game, GameError, Input, Mark, Notification, Outcome, Position, Sound,
    WinPattern,
};

fn seeded(layout: &str) -> Game {
    Game::from_board(board(layout), StdRng::seed_from_u64(17))
}

#[test]
fn test_player_completes_top_row() {
    let mut game = seeded("XX_OO____");

    let result = game.apply_player_move(2).expect("Valid move");

    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(result.pattern, Some(WinPattern::TopRow));
    assert_eq!(result.pattern.map(WinPattern::index), Some(3));
    assert_eq!(result.bot_move, None);
    assert_eq!(game.score().player, 1);
    assert_eq!(game.score().bot, 0);
    assert!(game.is_paused());
}

#[test]
fn test_bot_takes_win_over_block() {
    // Bot can finish the left column, player threatens the bottom row.
    let mut game = seeded("O__O___XX");

    let result = game.apply_player_move(1).expect("Valid move");

    let reply = result.bot_move.expect("Bot should reply");
    assert_eq!(reply.intent, BotIntent::Complete(WinPattern::LeftColumn));
    assert_eq!(reply.position, Position::BottomLeft);
    assert_eq!(result.outcome, Outcome::BotWin);
    assert_eq!(result.pattern, Some(WinPattern::LeftColumn));
    assert_eq!(game.score().bot, 1);
}

#[test]
fn test_bot_blocks_top_row() {
    let mut game = seeded("XX__O____");

    let result = game.apply_player_move(8).expect("Valid move");

    let reply = result.bot_move.expect("Bot should reply");
    assert_eq!(reply.intent, BotIntent::Block(WinPattern::TopRow));
    assert_eq!(reply.position, Position::TopRight);
    assert_eq!(result.outcome, Outcome::Ongoing);
}

#[test]
fn test_first_reply_is_random_and_ongoing() {
    let mut game = Game::with_seed(99);

    let first = game.apply_player_move(0).expect("Valid move");

    let reply = first.bot_move.expect("Bot should reply");
    assert_eq!(reply.intent, BotIntent::Random);
    assert!(game.board().get(reply.position).is(Mark::Bot));
    assert_ne!(reply.position, Position::TopLeft);
    assert_eq!(first.outcome, Outcome::Ongoing);
}

#[test]
fn test_bot_blocks_threatened_diagonal_after_corner_and_center() {
    // Bot's first reply sits off the main diagonal.
    let mut game = seeded("X______O_");

    let second = game.apply_player_move(4).expect("Valid move");

    let blocked = second.bot_move.expect("Bot should reply");
    assert_eq!(blocked.intent, BotIntent::Block(WinPattern::MainDiagonal));
    assert_eq!(blocked.position, Position::BottomRight);
    assert!(game.board().get(blocked.position).is(Mark::Bot));
    assert_eq!(second.outcome, Outcome::Ongoing);
}

#[test]
fn test_bot_block_fills_board_for_draw() {
    let mut game = seeded("XOXXOO__X");

    let result = game.apply_player_move(7).expect("Valid move");

    let reply = result.bot_move.expect("Bot should reply");
    assert_eq!(reply.intent, BotIntent::Block(WinPattern::LeftColumn));
    assert_eq!(reply.position, Position::BottomLeft);
    assert_eq!(result.outcome, Outcome::Draw);
    assert_eq!(result.pattern, None);
    assert_eq!(game.score(), Default::default());
}

#[test]
fn test_player_fills_board_for_draw() {
    let mut game = seeded("XOXXOOOX_");

    let result = game.apply_player_move(8).expect("Valid move");

    assert_eq!(result.outcome, Outcome::Draw);
    assert_eq!(result.bot_move, None);
}

#[test]
fn test_moves_refused_while_paused() {
    let mut game = seeded("XX_OO____");
    game.apply_player_move(2).unwrap();

    assert_eq!(game.apply_player_move(8), Err(GameError::RoundOver));
    assert!(game.handle(Input::Confirm).is_empty());
    assert!(game.handle(Input::Direction(Direction::Down)).is_empty());
    assert_eq!(game.cursor(), Position::TopLeft);
}

#[test]
fn test_cursor_while_paused_when_enabled() {
    let mut game = seeded("XX_OO____").with_cursor_while_paused(true);
    game.apply_player_move(2).unwrap();

    assert_eq!(
        game.handle(Input::Direction(Direction::Down)),
        vec![
            Notification::CursorMoved(Position::MiddleLeft),
            Notification::PlaySound(Sound::Move),
        ]
    );
}

#[test]
fn test_player_win_notifications_and_reset() {
    let mut game = seeded("XX_OO____");
    game.handle(Input::Direction(Direction::Right));
    game.handle(Input::Direction(Direction::Right));

    let notes = game.handle(Input::Confirm);
    assert_eq!(
        notes,
        vec![
            Notification::CellMarked(Position::TopRight, Mark::Player),
            Notification::PatternHighlighted(WinPattern::TopRow),
            Notification::ScoreChanged(Mark::Player, 1),
            Notification::RoundConcluded(Outcome::PlayerWin),
            Notification::PlaySound(Sound::Conclude),
            Notification::StartResetTimer,
        ]
    );

    let notes = game.handle(Input::TimerFired);
    assert_eq!(notes, vec![Notification::StopResetTimer, Notification::BoardCleared]);
    assert_eq!(game.outcome(), Outcome::Ongoing);
    assert_eq!(game.pattern(), None);
    assert_eq!(game.board().empty_positions().len(), 9);
    assert_eq!(game.score().player, 1);
    assert_eq!(game.cursor(), Position::TopRight);
}

#[test]
fn test_bot_win_notifications() {
    let mut game = seeded("O__O___XX");
    game.handle(Input::Direction(Direction::Right));

    let notes = game.handle(Input::Confirm);
    assert_eq!(
        notes,
        vec![
            Notification::CellMarked(Position::TopCenter, Mark::Player),
            Notification::CellMarked(Position::BottomLeft, Mark::Bot),
            Notification::PatternHighlighted(WinPattern::LeftColumn),
            Notification::ScoreChanged(Mark::Bot, 1),
            Notification::RoundConcluded(Outcome::BotWin),
            Notification::PlaySound(Sound::Conclude),
            Notification::StartResetTimer,
            Notification::PlaySound(Sound::Select),
        ]
    );
}

#[test]
fn test_ongoing_reply_notifications() {
    let mut game = seeded("XX__O____");
    for _ in 0..8 {
        game.handle(Input::Direction(Direction::Right));
    }

    let notes = game.handle(Input::Confirm);
    assert_eq!(
        notes,
        vec![
            Notification::CellMarked(Position::BottomRight, Mark::Player),
            Notification::CellMarked(Position::TopRight, Mark::Bot),
            Notification::PlaySound(Sound::Select),
        ]
    );
}

#[test]
fn test_draw_notifications_have_no_score() {
    let mut game = seeded("XOXXOOOX_");
    for _ in 0..8 {
        game.handle(Input::Direction(Direction::Right));
    }

    let notes = game.handle(Input::Confirm);
    assert_eq!(
        notes,
        vec![
            Notification::CellMarked(Position::BottomRight, Mark::Player),
            Notification::RoundConcluded(Outcome::Draw),
            Notification::PlaySound(Sound::Conclude),
            Notification::StartResetTimer,
        ]
    );
}

#[test]
fn test_reset_replays_like_fresh_game() {
    let moves = [4, 0, 8, 2, 6, 1, 3, 5, 7];

    let mut played = Game::with_rng(ZeroRng);
    for index in moves {
        if played.is_paused() {
            break;
        }
        let _ = played.apply_player_move(index);
    }
    assert!(played.is_paused(), "scripted round should conclude");
    played.reset_round();

    let mut fresh = Game::with_rng(ZeroRng);
    for index in moves {
        assert_eq!(played.apply_player_move(index), fresh.apply_player_move(index));
        assert_eq!(played.board(), fresh.board());
        assert_eq!(played.outcome(), fresh.outcome());
    }
}
