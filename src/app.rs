use color_eyre::Result;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;

use crate::game::{Game, GameCommand};
use crate::input::InputManager;
use crate::renderer::{GameRenderer, RenderView};
use crate::settings::Settings;
use crate::stats::HighScoreStore;

/// Where the high score lives between sessions.
const HIGH_SCORE_PATH: &str = "high_score.txt";

/// The session: owns the simulation and the terminal-facing collaborators,
/// and drives one tick per frame.
pub struct App {
    running: bool,
    game: Game<ThreadRng>,
    input_manager: InputManager,
    renderer: GameRenderer,
    store: HighScoreStore,
}

impl App {
    pub fn new() -> Self {
        let store = HighScoreStore::new(HIGH_SCORE_PATH);
        let high_score = store.load();
        let game = Game::new(Settings::new(), high_score, rand::rng());

        Self {
            running: true,
            game,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            store,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            terminal.draw(|frame| {
                let view = RenderView {
                    state: self.game.state,
                    ship: &self.game.ship,
                    bullets: &self.game.bullets,
                    aliens: &self.game.aliens,
                    stats: &self.game.stats,
                    settings: &self.game.settings,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            let commands = self.input_manager.poll_commands(self.game.state)?;
            for command in commands {
                match command {
                    GameCommand::Quit => self.quit(),
                    other => self.game.apply(other),
                }
            }

            self.game.tick();

            // Small sleep to hold the tick rate near 60 Hz
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }

    /// Persist the high score and stop the loop. Honored at any tick
    /// boundary, including mid-pause.
    fn quit(&mut self) {
        self.game.stats.check_high_score();
        self.store.save(self.game.stats.high_score);
        self.running = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
