use rand::Rng;

use crate::entities::Alien;
use crate::settings::Settings;

/// Source of the random placement jitter applied to fleet spawn slots.
///
/// Injected so that fleet generation is a pure function of the source: tests
/// seed a `StdRng` (or script values by hand) and get reproducible waves.
pub trait JitterSource {
    /// Draw a value uniformly from the inclusive range `[low, high]`.
    fn next_in_range(&mut self, low: i32, high: i32) -> i32;
}

impl<R: Rng> JitterSource for R {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        self.random_range(low..=high)
    }
}

/// Build a new wave of aliens.
///
/// Columns start near the right edge and step left by two alien widths until
/// the next column would crowd the left edge; rows run from the top margin
/// down in steps of two alien heights. Each slot gets jittered and may be
/// rejected outright, so waves vary in density.
pub fn build_fleet<R: JitterSource>(settings: &Settings, rng: &mut R) -> Vec<Alien> {
    let mut aliens = Vec::new();
    let alien_width = settings.alien_width;
    let alien_height = settings.alien_height;

    let mut current_x = settings.screen_width - 2 * alien_width;
    while current_x > 2 * alien_width {
        let mut current_y = settings.top_margin;
        while current_y < settings.screen_height - 2 * alien_height {
            if let Some(alien) = spawn_alien(settings, current_x, current_y, rng) {
                aliens.push(alien);
            }
            current_y += 2 * alien_height;
        }
        current_x -= 2 * alien_width;
    }

    aliens
}

/// Jitter one spawn slot and create the alien, or reject the slot.
///
/// Both jitter values are always drawn, in x-then-y order, so a rejected
/// slot consumes the same amount of randomness as an accepted one. A slot is
/// rejected when the jittered alien would sit inside a safety margin of the
/// top band or the bottom of the screen; rejected slots are skipped, never
/// retried.
fn spawn_alien<R: JitterSource>(
    settings: &Settings,
    x_position: i32,
    y_position: i32,
    rng: &mut R,
) -> Option<Alien> {
    let (x_low, x_high) = settings.spawn_jitter_x;
    let (y_low, y_high) = settings.spawn_jitter_y;
    let random_x = rng.next_in_range(x_low, x_high);
    let random_y = rng.next_in_range(y_low, y_high);

    let spawn_y = y_position + random_y;
    let too_high = spawn_y <= settings.top_margin + settings.safety_margin_top;
    let too_low =
        spawn_y + settings.alien_height >= settings.screen_height - settings.safety_margin_bottom;
    if too_high || too_low {
        return None;
    }

    Some(Alien::new(settings, x_position + random_x, spawn_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays a fixed script of jitter values.
    struct ScriptedJitter {
        values: Vec<i32>,
        next: usize,
    }

    impl ScriptedJitter {
        fn new(values: Vec<i32>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl JitterSource for ScriptedJitter {
        fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value.clamp(low, high)
        }
    }

    /// Geometry from the worked example: screen 800x600, top margin 75,
    /// 50x50 aliens, safety margins 50/50.
    fn example_settings() -> Settings {
        let mut settings = Settings::new();
        settings.screen_width = 800;
        settings.screen_height = 600;
        settings.top_margin = 75;
        settings.alien_width = 50;
        settings.alien_height = 50;
        settings.safety_margin_top = 50;
        settings.safety_margin_bottom = 50;
        settings
    }

    #[test]
    fn test_fleet_is_deterministic_under_a_seed() {
        let settings = example_settings();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let fleet_a = build_fleet(&settings, &mut rng_a);
        let fleet_b = build_fleet(&settings, &mut rng_b);

        assert!(!fleet_a.is_empty());
        assert_eq!(fleet_a.len(), fleet_b.len());
        for (a, b) in fleet_a.iter().zip(&fleet_b) {
            assert_eq!(a.rect, b.rect);
        }
    }

    #[test]
    fn test_spawns_respect_safety_margins() {
        let settings = example_settings();
        let mut rng = StdRng::seed_from_u64(7);

        let fleet = build_fleet(&settings, &mut rng);
        for alien in &fleet {
            // Rejection rule: y <= 125 or y + 50 >= 550 must not survive.
            assert!(alien.rect.top() > settings.top_margin + settings.safety_margin_top);
            assert!(
                alien.rect.bottom() < settings.screen_height - settings.safety_margin_bottom
            );
        }
    }

    #[test]
    fn test_columns_stay_clear_of_left_edge() {
        let settings = example_settings();
        let mut rng = StdRng::seed_from_u64(3);

        let fleet = build_fleet(&settings, &mut rng);
        for alien in &fleet {
            assert!(alien.rect.x > 2 * settings.alien_width);
        }
    }

    #[test]
    fn test_rejected_slot_is_skipped_not_retried() {
        let mut settings = example_settings();
        // Force every slot's vertical jitter to land in the top safety band.
        settings.spawn_jitter_x = (0, 0);
        settings.spawn_jitter_y = (-600, -600);

        let mut rng = ScriptedJitter::new(vec![-600]);
        let fleet = build_fleet(&settings, &mut rng);
        assert!(fleet.is_empty());
    }

    #[test]
    fn test_degenerate_y_jitter_is_constant() {
        let settings = example_settings();
        // Default spawn_jitter_y is [50, 50]: every accepted alien sits
        // exactly 50 below its slot's base row.
        let mut rng = StdRng::seed_from_u64(11);
        let fleet = build_fleet(&settings, &mut rng);

        let row_step = 2 * settings.alien_height;
        for alien in &fleet {
            assert_eq!((alien.rect.y - settings.top_margin - 50) % row_step, 0);
        }
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_safety_invariant_holds_for_any_seed(seed in 0u64..1000) {
                let settings = example_settings();
                let mut rng = StdRng::seed_from_u64(seed);
                let fleet = build_fleet(&settings, &mut rng);

                for alien in &fleet {
                    prop_assert!(
                        alien.rect.top() > settings.top_margin + settings.safety_margin_top
                    );
                    prop_assert!(
                        alien.rect.bottom()
                            < settings.screen_height - settings.safety_margin_bottom
                    );
                }
            }
        }
    }
}
