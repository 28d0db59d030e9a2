//! Routes game notifications to the screen, the bell and the reset timer.

use crate::presenter::{Bell, Presenter};
use crate::screen::BoardScreen;
use crate::timer::ResetTimer;
use derive_getters::Getters;
use std::io::Write;
use strictly_noughts::{Game, Input, Notification};
use tracing::instrument;

/// One interactive session: the game plus its presentation collaborators.
#[derive(Debug, Getters)]
pub struct Controller<W: Write> {
    game: Game,
    screen: BoardScreen,
    bell: Bell<W>,
    timer: ResetTimer,
}

impl<W: Write> Controller<W> {
    /// Creates a controller around a fresh game.
    pub fn new(game: Game, bell: Bell<W>, timer: ResetTimer) -> Self {
        let screen = BoardScreen::new(game.cursor());
        Self {
            game,
            screen,
            bell,
            timer,
        }
    }

    /// Feeds one input to the game and dispatches the resulting notifications.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, input: Input) {
        for notification in self.game.handle(input) {
            match notification {
                Notification::StartResetTimer => self.timer.start(),
                Notification::StopResetTimer => self.timer.stop(),
                Notification::PlaySound(_) => self.bell.present(&notification),
                _ => self.screen.present(&notification),
            }
        }
    }
}
