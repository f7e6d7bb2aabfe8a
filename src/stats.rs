use std::fs;
use std::path::PathBuf;

use crate::settings::Settings;

/// Statistics for the current session.
///
/// Everything except `high_score` resets when a new game starts.
#[derive(Debug, Clone)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Best score seen across games, loaded at startup and saved on quit.
    pub high_score: u32,
}

impl GameStats {
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        Self {
            ships_left: settings.ship_limit,
            score: 0,
            level: 1,
            high_score,
        }
    }

    /// Reset the statistics that change during a game.
    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Fold the current score into the high score if it beats it.
    pub fn check_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

/// File-backed high score persistence.
///
/// A missing or corrupt file reads as 0 and a failed write is ignored;
/// persistence problems are never allowed to interfere with gameplay.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| contents.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn save(&self, high_score: u32) {
        let _ = fs::write(&self.path, format!("{high_score}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_reset_preserves_high_score() {
        let settings = Settings::new();
        let mut stats = GameStats::new(&settings, 900);
        stats.score = 400;
        stats.level = 3;
        stats.ships_left = 0;

        stats.reset(&settings);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.ships_left, settings.ship_limit);
        assert_eq!(stats.high_score, 900);
    }

    #[test]
    fn test_check_high_score_only_raises() {
        let settings = Settings::new();
        let mut stats = GameStats::new(&settings, 500);

        stats.score = 300;
        stats.check_high_score();
        assert_eq!(stats.high_score, 500);

        stats.score = 750;
        stats.check_high_score();
        assert_eq!(stats.high_score, 750);
    }

    #[test]
    fn test_store_missing_file_reads_zero() {
        let store = HighScoreStore::new("/nonexistent/dir/high_score.txt");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_store_round_trip() {
        let path = std::env::temp_dir().join("sideways_shooter_store_round_trip.txt");
        let store = HighScoreStore::new(&path);

        store.save(1234);
        assert_eq!(store.load(), 1234);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_store_corrupt_file_reads_zero() {
        let path = std::env::temp_dir().join("sideways_shooter_store_corrupt.txt");
        fs::write(&path, "not a number").unwrap();

        let store = HighScoreStore::new(&path);
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(&path);
    }
}
