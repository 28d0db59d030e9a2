//! Headless matches between a random player and the bot.

use crate::presenter::Presenter;
use derive_getters::Getters;
use rand::Rng;
use rand::seq::IndexedRandom;
use strictly_noughts::{Direction, Game, Input, Notification, Outcome, Position};
use tracing::{debug, info, instrument};

/// Round results collected from notifications.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Tally {
    player_wins: u32,
    bot_wins: u32,
    draws: u32,
}

impl Tally {
    /// Total rounds seen.
    pub fn rounds(&self) -> u32 {
        self.player_wins + self.bot_wins + self.draws
    }
}

impl Presenter for Tally {
    fn present(&mut self, notification: &Notification) {
        if let Notification::RoundConcluded(outcome) = notification {
            match outcome {
                Outcome::PlayerWin => self.player_wins += 1,
                Outcome::BotWin => self.bot_wins += 1,
                Outcome::Draw => self.draws += 1,
                Outcome::Ongoing => {}
            }
        }
    }
}

/// Next cursor step from `from` toward `to`.
fn step_toward(from: Position, to: Position) -> Option<Direction> {
    let (from, to) = (from.to_index(), to.to_index());
    if to / 3 < from / 3 {
        Some(Direction::Up)
    } else if to / 3 > from / 3 {
        Some(Direction::Down)
    } else if to < from {
        Some(Direction::Left)
    } else if to > from {
        Some(Direction::Right)
    } else {
        None
    }
}

/// Plays `rounds` rounds, steering the cursor like a keyboard user would.
///
/// The reset timer is simulated by firing it as soon as a round ends.
#[instrument(skip(game, player_rng))]
pub fn run<R: Rng>(game: &mut Game, player_rng: &mut R, rounds: u32) -> Tally {
    let mut tally = Tally::default();

    while tally.rounds() < rounds {
        if game.is_paused() {
            for note in game.handle(Input::TimerFired) {
                tally.present(&note);
            }
            continue;
        }

        let Some(&target) = game.board().empty_positions().choose(player_rng) else {
            break;
        };
        while let Some(direction) = step_toward(game.cursor(), target) {
            game.handle(Input::Direction(direction));
        }
        debug!(%target, "Random player confirms");
        for note in game.handle(Input::Confirm) {
            tally.present(&note);
        }
    }

    info!(?tally, "Autoplay finished");
    tally
}
