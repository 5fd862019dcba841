use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::game::{GameConfig, GameLoop};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven play in the terminal.
///
/// Ticks, key events and Ctrl-C are multiplexed on one task, so direction
/// requests land in the game's inbox strictly between ticks.
pub struct HumanMode {
    game: GameLoop,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let game = match seed {
            Some(seed) => GameLoop::with_seed(config, seed)?,
            None => GameLoop::new(config)?,
        };

        Ok(Self {
            game,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        // restore the terminal even when the loop failed
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let config = self.game.config();
        info!(
            width = config.grid_width,
            height = config.grid_height,
            tick_ms = config.tick_interval_ms,
            "starting game"
        );

        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(config.tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.draw(terminal)?;

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                self.draw(terminal)?;
                            }
                        }
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    if self.game.is_running() {
                        self.update_game();
                        self.draw(terminal)?;
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();
        terminal
            .draw(|frame| {
                self.renderer
                    .render(frame, self.game.state(), &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Returns true when the screen needs redrawing right away
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match self.input_handler.handle_key_event(key) {
                    KeyAction::Turn(direction) => {
                        self.game.request_direction(direction);
                        false
                    }
                    KeyAction::Restart => self.reset_game(),
                    KeyAction::Quit => {
                        self.should_quit = true;
                        false
                    }
                    KeyAction::None => false,
                }
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn update_game(&mut self) {
        let outcome = self.game.tick();

        if outcome.ended_game() {
            self.metrics.on_game_over(self.game.state().score);
        }
    }

    /// Returns true if a new run started
    fn reset_game(&mut self) -> bool {
        if !self.game.restart() {
            return false;
        }
        self.metrics.on_game_start();
        true
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
