//! Reactive presentation seam.
//!
//! Presenters never query the game. They rebuild what they show from the
//! stream of [`Notification`]s alone.

use std::io::Write;
use strictly_noughts::{Notification, Sound};
use tracing::{trace, warn};

/// Something that reflects game notifications to the user.
pub trait Presenter {
    /// Reacts to one notification. Irrelevant notifications are ignored.
    fn present(&mut self, notification: &Notification);
}

/// Audio sink that rings the terminal bell.
#[derive(Debug)]
pub struct Bell<W: Write> {
    enabled: bool,
    out: W,
}

impl<W: Write> Bell<W> {
    /// Creates a bell writing to `out`.
    pub fn new(enabled: bool, out: W) -> Self {
        Self { enabled, out }
    }

    /// Consumes the bell, returning its writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn ring(&mut self, sound: Sound) {
        trace!(%sound, "Sound");
        // The bell is reserved for bot replies and round ends.
        if sound == Sound::Move {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to ring bell");
        }
    }
}

impl<W: Write> Presenter for Bell<W> {
    fn present(&mut self, notification: &Notification) {
        if let Notification::PlaySound(sound) = notification
            && self.enabled
        {
            self.ring(*sound);
        }
    }
}
