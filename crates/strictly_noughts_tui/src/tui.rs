//! Interactive terminal game loop.

use crate::config::NoughtsConfig;
use crate::controller::Controller;
use crate::input::{map_key, KeyAction};
use crate::presenter::Bell;
use crate::timer::ResetTimer;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use strictly_noughts::{Game, Input};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

/// Runs the terminal game until the user quits.
#[instrument(skip(config))]
pub async fn run(config: NoughtsConfig) -> Result<()> {
    info!("Starting Strictly Noughts TUI");

    let game = match config.seed() {
        Some(seed) => Game::with_seed(*seed),
        None => Game::new(),
    }
    .with_cursor_while_paused(*config.cursor_while_paused());

    let (timer_tx, timer_rx) = mpsc::unbounded_channel();
    let timer = ResetTimer::new(config.reset_delay(), timer_tx);
    let bell = Bell::new(*config.sound(), io::stdout());
    let mut controller = Controller::new(game, bell, timer);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut controller, timer_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    let score = controller.game().score();
    info!(player = score.player, bot = score.bot, "Session ended");
    println!("Final score - you: {}, bot: {}", score.player, score.bot);

    res
}

async fn run_loop<B, W>(
    terminal: &mut Terminal<B>,
    controller: &mut Controller<W>,
    mut timer_rx: UnboundedReceiver<Input>,
) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    W: Write,
{
    loop {
        terminal.draw(|f| controller.screen().render(f))?;

        while let Ok(input) = timer_rx.try_recv() {
            controller.dispatch(input);
        }

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match map_key(key.code) {
                KeyAction::Game(input) => controller.dispatch(input),
                KeyAction::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                KeyAction::Ignore => {}
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
}
