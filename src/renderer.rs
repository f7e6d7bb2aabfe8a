use crate::entities::{Alien, Bullet, GameState, Rect as SimRect, Ship};
use crate::settings::Settings;
use crate::stats::GameStats;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Read-only snapshot of everything the renderer needs for one frame.
pub struct RenderView<'a> {
    pub state: GameState,
    pub ship: &'a Ship,
    pub bullets: &'a [Bullet],
    pub aliens: &'a [Alien],
    pub stats: &'a GameStats,
    pub settings: &'a Settings,
    pub area: Rect,
}

/// Draws the simulation onto the terminal.
///
/// The simulation runs in its own pixel-like space; this scales entity
/// rects down to terminal cells each frame, so the core never needs to
/// know the terminal size.
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_playfield(frame, view);
        self.render_scoreboard(frame, view);

        match view.state {
            GameState::Playing => {}
            GameState::LifeLostPause => self.render_ship_down(frame, view),
            GameState::Inactive => self.render_play_prompt(frame, view),
        }
    }

    /// Map a simulation rect to a terminal cell rect, clamped to the area.
    fn to_cells(&self, view: &RenderView, rect: &SimRect) -> Option<Rect> {
        let area = view.area;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let sx = area.width as f32 / view.settings.screen_width as f32;
        let sy = area.height as f32 / view.settings.screen_height as f32;

        let x = (rect.x as f32 * sx) as i32;
        let y = (rect.y as f32 * sy) as i32;
        if x < 0 || y < 0 || x >= area.width as i32 || y >= area.height as i32 {
            return None;
        }

        let width = ((rect.width as f32 * sx) as u16).max(1);
        let height = ((rect.height as f32 * sy) as u16).max(1);
        Some(Rect {
            x: area.x + x as u16,
            y: area.y + y as u16,
            width: width.min(area.width - x as u16),
            height: height.min(area.height - y as u16),
        })
    }

    fn render_playfield(&self, frame: &mut Frame, view: &RenderView) {
        // Ship
        if let Some(cell_rect) = self.to_cells(view, &view.ship.rect) {
            let ship_text: Vec<Line> = (0..cell_rect.height)
                .map(|row| {
                    let glyph = if row == cell_rect.height / 2 { "=>" } else { "|" };
                    Line::from(glyph).style(
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect();
            frame.render_widget(Paragraph::new(ship_text), cell_rect);
        }

        // Bullets
        for bullet in view.bullets {
            if let Some(cell_rect) = self.to_cells(view, &bullet.rect) {
                frame.render_widget(
                    Paragraph::new("-").style(Style::default().fg(Color::Yellow)),
                    cell_rect,
                );
            }
        }

        // Aliens
        for alien in view.aliens {
            if let Some(cell_rect) = self.to_cells(view, &alien.rect) {
                frame.render_widget(
                    Paragraph::new("<o>")
                        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                    cell_rect,
                );
            }
        }
    }

    /// Stats band across the top margin of the screen.
    fn render_scoreboard(&self, frame: &mut Frame, view: &RenderView) {
        let stats_line = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.stats.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  High: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.stats.high_score),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Level: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.stats.level),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ships: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.stats.ships_left),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_area = Rect {
            x: view.area.x + 1,
            y: view.area.y,
            width: view.area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(stats_line), stats_area);
    }

    fn render_ship_down(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        if area.width < 30 || area.height < 5 {
            return;
        }

        let text = vec![Line::from("SHIP DOWN").centered().bold().red()];
        let message_area = Rect {
            x: area.x + area.width / 2 - 10,
            y: area.y + area.height / 2,
            width: 20,
            height: 1,
        };
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), message_area);
    }

    fn render_play_prompt(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        if area.width < 34 || area.height < 8 {
            return;
        }

        let prompt_text = vec![
            Line::from(""),
            Line::from("SIDEWAYS SHOOTER").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press Enter to play").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        let prompt_area = Rect {
            x: area.x + area.width / 2 - 15,
            y: area.y + area.height / 2 - 4,
            width: 30,
            height: 7,
        };

        frame.render_widget(
            Paragraph::new(prompt_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            prompt_area,
        );
    }
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}
