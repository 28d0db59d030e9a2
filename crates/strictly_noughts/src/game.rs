//! Round state machine.
//!
//! [`Game`] owns the board, score, cursor and the bot's random source.
//! Every operation runs to completion, including the bot's reply, before
//! the next input is accepted.

use crate::bot::{self, BotMove};
use crate::error::GameError;
use crate::events::{Input, Notification, Sound};
use crate::position::{Direction, Position};
use crate::rules::{check_draw, check_win, WinPattern};
use crate::types::{Board, Mark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// State of the current round.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Outcome {
    /// Moves are still being played.
    #[default]
    #[display("Ongoing")]
    Ongoing,
    /// The player completed a line.
    #[display("You win!")]
    PlayerWin,
    /// The bot completed a line.
    #[display("You lose!")]
    BotWin,
    /// Board filled with no line.
    #[display("Draw!")]
    Draw,
}

impl Outcome {
    /// True once the round has concluded.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::PlayerWin => Some(Mark::Player),
            Outcome::BotWin => Some(Mark::Bot),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => Outcome::PlayerWin,
            Mark::Bot => Outcome::BotWin,
        }
    }
}

/// Win counters, kept across rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by the player.
    pub player: u32,
    /// Rounds won by the bot.
    pub bot: u32,
}

impl Score {
    /// Counter for `mark`.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Player => self.player,
            Mark::Bot => self.bot,
        }
    }

    fn increment(&mut self, mark: Mark) -> u32 {
        let counter = match mark {
            Mark::Player => &mut self.player,
            Mark::Bot => &mut self.bot,
        };
        *counter += 1;
        *counter
    }
}

/// Result of a player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Square the player marked.
    pub position: Position,
    /// Round state after the move and any reply.
    pub outcome: Outcome,
    /// Line that won the round, if it was won.
    pub pattern: Option<WinPattern>,
    /// The bot's reply, if it moved.
    pub bot_move: Option<BotMove>,
}

/// A single board played against the bot.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    board: Board,
    outcome: Outcome,
    pattern: Option<WinPattern>,
    score: Score,
    cursor: Position,
    cursor_while_paused: bool,
    rng: R,
}

impl Game<StdRng> {
    /// Creates a game seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a game with a deterministic bot.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Game<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    /// Creates a game drawing the bot's random moves from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: Board::new(),
            outcome: Outcome::Ongoing,
            pattern: None,
            score: Score::default(),
            cursor: Position::default(),
            cursor_while_paused: false,
            rng,
        }
    }

    /// Resumes play from an arbitrary position with the player to move.
    ///
    /// The board is taken as-is; a round is only concluded by the next move.
    pub fn from_board(board: Board, rng: R) -> Self {
        Self {
            board,
            ..Self::with_rng(rng)
        }
    }

    /// Lets the cursor move while a concluded round waits to be reset.
    pub fn with_cursor_while_paused(mut self, allow: bool) -> Self {
        self.cursor_while_paused = allow;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the round outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Line that won the current round, if any.
    pub fn pattern(&self) -> Option<WinPattern> {
        self.pattern
    }

    /// Returns the score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True between a concluded round and its reset.
    pub fn is_paused(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Marks `index` for the player and, unless that ends the round, lets
    /// the bot reply.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn apply_player_move(&mut self, index: usize) -> Result<MoveResult, GameError> {
        if self.is_paused() {
            return Err(GameError::RoundOver);
        }
        let position = Position::try_from_index(index)?;
        self.board.place(position, Mark::Player)?;

        let mut bot_move = None;
        if !self.evaluate(Mark::Player) {
            bot_move = self.bot_turn()?;
        }

        Ok(MoveResult {
            position,
            outcome: self.outcome,
            pattern: self.pattern,
            bot_move,
        })
    }

    /// Selects and plays the bot's reply.
    fn bot_turn(&mut self) -> Result<Option<BotMove>, GameError> {
        let Some(chosen) = bot::select_move(&self.board, &mut self.rng) else {
            return Ok(None);
        };
        self.board.place(chosen.position, Mark::Bot)?;
        self.evaluate(Mark::Bot);
        Ok(Some(chosen))
    }

    /// Checks whether `mark`'s last move ended the round. Win before draw.
    fn evaluate(&mut self, mark: Mark) -> bool {
        if let Some(pattern) = check_win(&self.board, mark) {
            self.outcome = Outcome::won_by(mark);
            self.pattern = Some(pattern);
            let score = self.score.increment(mark);
            info!(winner = %mark, %pattern, score, "Round won");
            true
        } else if check_draw(&self.board) {
            self.outcome = Outcome::Draw;
            info!("Round drawn");
            true
        } else {
            false
        }
    }

    /// Clears the board for a new round. Score and cursor are kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board.clear();
        self.outcome = Outcome::Ongoing;
        self.pattern = None;
        debug!("Round reset");
    }

    /// Moves the cursor one step, returning false at the grid edge.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        match self.cursor.step(direction) {
            Some(next) => {
                self.cursor = next;
                true
            }
            None => false,
        }
    }

    /// Handles one input event and reports what the presentation should show.
    ///
    /// Refused input is ignored and yields no notifications.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Vec<Notification> {
        match input {
            Input::Direction(direction) => {
                if self.is_paused() && !self.cursor_while_paused {
                    debug!("Cursor input ignored while paused");
                    return Vec::new();
                }
                if !self.move_cursor(direction) {
                    return Vec::new();
                }
                vec![
                    Notification::CursorMoved(self.cursor),
                    Notification::PlaySound(Sound::Move),
                ]
            }
            Input::Confirm => match self.apply_player_move(self.cursor.to_index()) {
                Ok(result) => self.move_notifications(&result),
                Err(e) => {
                    debug!(error = %e, cursor = %self.cursor, "Move ignored");
                    Vec::new()
                }
            },
            Input::TimerFired => {
                if !self.is_paused() {
                    debug!("Timer fired outside a concluded round");
                    return Vec::new();
                }
                self.reset_round();
                vec![Notification::StopResetTimer, Notification::BoardCleared]
            }
        }
    }

    fn move_notifications(&self, result: &MoveResult) -> Vec<Notification> {
        let mut out = vec![Notification::CellMarked(result.position, Mark::Player)];
        match result.bot_move {
            None => {
                if result.outcome.is_terminal() {
                    self.push_conclusion(&mut out, result);
                }
            }
            Some(reply) => {
                out.push(Notification::CellMarked(reply.position, Mark::Bot));
                if result.outcome.is_terminal() {
                    self.push_conclusion(&mut out, result);
                }
                out.push(Notification::PlaySound(Sound::Select));
            }
        }
        out
    }

    fn push_conclusion(&self, out: &mut Vec<Notification>, result: &MoveResult) {
        if let Some(pattern) = result.pattern {
            out.push(Notification::PatternHighlighted(pattern));
        }
        if let Some(winner) = result.outcome.winner() {
            out.push(Notification::ScoreChanged(winner, self.score.get(winner)));
        }
        out.push(Notification::RoundConcluded(result.outcome));
        out.push(Notification::PlaySound(Sound::Conclude));
        out.push(Notification::StartResetTimer);
    }
}
