use super::rect::Rect;
use super::ship::Ship;
use crate::settings::Settings;

/// A bullet fired from the ship, travelling rightward toward the fleet.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
    /// Exact horizontal position; `rect.x` is this truncated.
    pub x: f32,
}

impl Bullet {
    /// Create a bullet at the ship's mid-right point.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let rect = Rect::new(
            ship.rect.right(),
            ship.rect.center_y() - settings.bullet_height / 2,
            settings.bullet_width,
            settings.bullet_height,
        );
        Self {
            rect,
            x: rect.x as f32,
        }
    }

    /// Move the bullet rightward across the screen.
    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.bullet_speed;
        self.rect.x = self.x as i32;
    }

    /// True once the bullet has fully left the right edge of the screen.
    pub fn is_offscreen(&self, settings: &Settings) -> bool {
        self.rect.left() >= settings.screen_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_spawns_at_ship_midright() {
        let settings = Settings::new();
        let ship = Ship::new(&settings);
        let bullet = Bullet::new(&settings, &ship);

        assert_eq!(bullet.rect.left(), ship.rect.right());
        assert_eq!(bullet.rect.center_y(), ship.rect.center_y());
        assert_eq!(bullet.rect.width, settings.bullet_width);
        assert_eq!(bullet.rect.height, settings.bullet_height);
    }

    #[test]
    fn test_bullet_moves_right() {
        let settings = Settings::new();
        let ship = Ship::new(&settings);
        let mut bullet = Bullet::new(&settings, &ship);
        let start_x = bullet.x;

        bullet.update(&settings);
        assert_eq!(bullet.x, start_x + settings.bullet_speed);
        assert_eq!(bullet.rect.x, bullet.x as i32);
    }

    #[test]
    fn test_bullet_has_no_vertical_motion() {
        let settings = Settings::new();
        let ship = Ship::new(&settings);
        let mut bullet = Bullet::new(&settings, &ship);
        let start_y = bullet.rect.y;

        for _ in 0..100 {
            bullet.update(&settings);
        }
        assert_eq!(bullet.rect.y, start_y);
    }

    #[test]
    fn test_bullet_offscreen_past_right_edge() {
        let settings = Settings::new();
        let ship = Ship::new(&settings);
        let mut bullet = Bullet::new(&settings, &ship);
        assert!(!bullet.is_offscreen(&settings));

        bullet.x = settings.screen_width as f32;
        bullet.rect.x = bullet.x as i32;
        assert!(bullet.is_offscreen(&settings));
    }
}
