// Library exports for testing
pub use entities::{Alien, Bullet, GameState, Rect, Ship};
pub use fleet::{JitterSource, build_fleet};
pub use game::{Game, GameCommand, LIFE_LOST_PAUSE_TICKS};
pub use settings::Settings;
pub use stats::{GameStats, HighScoreStore};

pub mod app;
pub mod entities;
pub mod fleet;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod stats;
