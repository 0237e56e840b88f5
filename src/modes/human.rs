use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep};
use tracing::info;

use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Terminal session: feeds keys to the engine and ticks it on the interval
/// the engine asks for.
pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let engine = GameEngine::new(config).context("Failed to start game engine")?;

        Ok(Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(arena = self.engine.arena_size(), "session started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(ticks = self.metrics.ticks, "session ended");
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // First tick waits the engine's initial interval; each tick re-arms it
        let tick_timer = sleep(self.engine.tick_interval());
        tokio::pin!(tick_timer);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick; never scheduled again once halted
                _ = &mut tick_timer, if !self.engine.is_halted() => {
                    let next = self.update_game()?;
                    tick_timer.as_mut().reset(Instant::now() + next);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
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

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(code) => self.engine.submit_key(code),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    /// Run one engine tick and return the delay before the next one
    fn update_game(&mut self) -> Result<Duration> {
        let result = self.engine.tick().context("Game engine failed")?;
        self.metrics.on_tick();

        if let Some(kind) = result.collision {
            self.metrics.on_halt();
            info!(collision = ?kind, time = %self.metrics.format_time(), "game over");
        }

        Ok(result.next_interval)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, GameStatus, Position, keys};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default()).unwrap();
        assert!(!mode.engine.is_halted());
        assert_eq!(mode.engine.snake_len(), 3);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(HumanMode::new(GameConfig::new(3)).is_err());
    }

    #[test]
    fn test_key_presses_reach_engine() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();

        mode.handle_event(press(KeyCode::Char('s')));
        mode.handle_event(press(KeyCode::Char('x')));
        mode.handle_event(press(KeyCode::Tab));
        assert_eq!(mode.engine.pending_inputs(), 2);

        mode.update_game().unwrap();
        assert_eq!(mode.engine.head(), Position::new(4, 5));
        assert_eq!(mode.metrics.ticks, 1);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();

        let release = KeyEvent {
            code: KeyCode::Char('w'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        mode.handle_event(Event::Key(release));
        assert_eq!(mode.engine.pending_inputs(), 0);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        mode.handle_event(press(KeyCode::Esc));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_halt_stops_clock() {
        let mut mode = HumanMode::new(GameConfig::small()).unwrap();
        mode.engine.submit_key(keys::W);

        let mut next = Duration::ZERO;
        while !mode.engine.is_halted() {
            next = mode.update_game().unwrap();
        }

        assert_eq!(mode.engine.status(), GameStatus::Halted(CollisionType::Wall));
        assert!(mode.metrics.stopped);
        assert!(next <= Duration::from_millis(200));
    }
}
