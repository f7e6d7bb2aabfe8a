/// Game configuration.
///
/// The static fields are fixed for the lifetime of the process. The dynamic
/// subset (speeds, fleet direction, alien point value) is re-initialized at
/// the start of every game and scaled up at every level transition.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Simulation-space screen size. The renderer scales these coordinates
    /// to whatever terminal area it is given.
    pub screen_width: i32,
    pub screen_height: i32,
    /// Band across the top reserved for the scoreboard. Aliens reverse off
    /// this line, not off the physical top of the screen.
    pub top_margin: i32,

    // Ship settings
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_limit: u32,

    // Bullet settings
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullets_allowed: usize,

    // Alien and fleet settings
    pub alien_width: i32,
    pub alien_height: i32,
    /// Horizontal step toward the ship applied to every alien when the
    /// fleet reverses direction.
    pub fleet_lurch_speed: i32,
    /// Inclusive range of random horizontal offset applied to each spawn slot.
    pub spawn_jitter_x: (i32, i32),
    /// Inclusive range of random vertical offset applied to each spawn slot.
    /// The original tuning collapses this to a constant; it stays a range.
    pub spawn_jitter_y: (i32, i32),
    /// Minimum spawn distance from the top margin line.
    pub safety_margin_top: i32,
    /// Minimum spawn distance from the bottom of the screen.
    pub safety_margin_bottom: i32,

    // How quickly the game speeds up, and how quickly points scale with it
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Dynamic settings, reset per game and scaled per level
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// 1 means the fleet is moving down, -1 up.
    pub fleet_direction: i32,
    pub alien_points: u32,
}

impl Settings {
    pub fn new() -> Self {
        let mut settings = Self {
            screen_width: 1280,
            screen_height: 720,
            top_margin: 75,
            ship_width: 60,
            ship_height: 48,
            ship_limit: 2,
            bullet_width: 15,
            bullet_height: 3,
            bullets_allowed: 3,
            alien_width: 60,
            alien_height: 58,
            fleet_lurch_speed: 10,
            spawn_jitter_x: (0, 100),
            spawn_jitter_y: (50, 50),
            safety_margin_top: 50,
            safety_margin_bottom: 50,
            speedup_scale: 1.5,
            score_scale: 1.5,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            fleet_direction: 1,
            alien_points: 0,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    /// Reset the settings that change throughout a game back to baseline.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = 1.5;
        self.bullet_speed = 2.5;
        self.alien_speed = 10.0;
        self.fleet_direction = 1;
        self.alien_points = 50;
    }

    /// Scale the dynamic settings up for the next level. Point values
    /// truncate to whole integers.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_settings_reset_to_baseline() {
        let mut settings = Settings::new();
        settings.increase_speed();
        settings.fleet_direction = -1;

        settings.initialize_dynamic_settings();
        assert_eq!(settings.ship_speed, 1.5);
        assert_eq!(settings.bullet_speed, 2.5);
        assert_eq!(settings.alien_speed, 10.0);
        assert_eq!(settings.fleet_direction, 1);
        assert_eq!(settings.alien_points, 50);
    }

    #[test]
    fn test_increase_speed_scales_dynamic_subset() {
        let mut settings = Settings::new();
        settings.increase_speed();

        assert_eq!(settings.ship_speed, 1.5 * 1.5);
        assert_eq!(settings.bullet_speed, 2.5 * 1.5);
        assert_eq!(settings.alien_speed, 10.0 * 1.5);
        assert_eq!(settings.alien_points, 75);
    }

    #[test]
    fn test_alien_points_truncate_on_scaling() {
        let mut settings = Settings::new();
        // 50 -> 75 -> 112 (112.5 truncated)
        settings.increase_speed();
        settings.increase_speed();
        assert_eq!(settings.alien_points, 112);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_level_scaling_matches_closed_form(levels in 0usize..8) {
                let mut settings = Settings::new();
                let base_speed = settings.alien_speed;
                let mut expected_points = settings.alien_points;

                for _ in 0..levels {
                    expected_points = (expected_points as f32 * settings.score_scale) as u32;
                    settings.increase_speed();
                }

                let expected_speed = base_speed * settings.speedup_scale.powi(levels as i32);
                prop_assert!((settings.alien_speed - expected_speed).abs() < 1e-3);
                prop_assert_eq!(settings.alien_points, expected_points);
            }
        }
    }
}
