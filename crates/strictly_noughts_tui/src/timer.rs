//! Single-shot countdown that clears a finished board.

use std::time::Duration;
use strictly_noughts::Input;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Sends [`Input::TimerFired`] once `delay` after the last [`ResetTimer::start`].
///
/// Starting while a countdown is pending restarts it.
#[derive(Debug)]
pub struct ResetTimer {
    delay: Duration,
    tx: UnboundedSender<Input>,
    pending: Option<JoinHandle<()>>,
}

impl ResetTimer {
    /// Creates an idle timer that reports on `tx`.
    pub fn new(delay: Duration, tx: UnboundedSender<Input>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Starts or restarts the countdown. Must be called inside a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn start(&mut self) {
        self.stop();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Input::TimerFired).is_err() {
                debug!("Reset timer fired after receiver closed");
            }
        }));
    }

    /// Cancels a pending countdown, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a countdown is pending.
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
