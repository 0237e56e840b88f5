use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CellStatus, CollisionType, GameEngine, Position};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, engine: &GameEngine, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(engine, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match engine.status().collision() {
            None => frame.render_widget(self.render_grid(engine), game_area),
            Some(kind) => frame.render_widget(self.render_game_over(kind, metrics), game_area),
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, engine: &GameEngine) -> Paragraph<'_> {
        let shades: HashMap<Position, u8> = engine.segment_shades().iter().copied().collect();
        let head = engine.head();
        let size = engine.arena_size();

        let mut lines = Vec::with_capacity(size);
        let mut spans = Vec::with_capacity(size);

        for (pos, status) in engine.cells() {
            let cell = match status {
                CellStatus::Wall => Span::styled("██", Style::default().fg(Color::Gray)),
                CellStatus::Food => Span::styled(
                    "● ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                CellStatus::Snake => {
                    let shade = shades.get(&pos).copied().unwrap_or(u8::MAX);
                    let style = Style::default().fg(Color::Rgb(0, shade, 0));
                    if pos == head {
                        Span::styled("■ ", style.add_modifier(Modifier::BOLD))
                    } else {
                        Span::styled("□ ", style)
                    }
                }
                CellStatus::Empty => Span::styled("  ", Style::default()),
            };
            spans.push(cell);

            if pos.col as usize == size - 1 {
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, engine: &GameEngine, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Tick: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}ms", engine.tick_interval().as_millis()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, kind: CollisionType, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(Span::styled(kind.message(), Style::default().fg(Color::Yellow))),
            Line::from(vec![
                Span::styled("Survived ", Style::default().fg(Color::Gray)),
                Span::styled(
                    metrics.format_time(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_running_game() {
        let engine = GameEngine::with_seed(GameConfig::small(), 4).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();

        terminal
            .draw(|frame| Renderer::new().render(frame, &engine, &GameMetrics::new()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Snake"));
        assert!(text.contains("■"));
        assert!(text.contains("200ms"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_renders_game_over() {
        let mut engine = GameEngine::with_seed(
            GameConfig {
                initial_food: 0,
                ..GameConfig::small()
            },
            4,
        )
        .unwrap();
        while !engine.tick().unwrap().halted() {}

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, &engine, &GameMetrics::new()))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("You hit a wall!"));
    }
}
