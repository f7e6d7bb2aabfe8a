use super::rect::Rect;
use crate::settings::Settings;

/// The player's ship, pinned to the left edge of the screen.
///
/// One instance lives for the whole session; life loss and new games
/// re-center it rather than recreating it.
#[derive(Debug, Clone)]
pub struct Ship {
    pub rect: Rect,
    /// Exact vertical position; `rect.y` is this truncated.
    pub y: f32,
    pub moving_up: bool,
    pub moving_down: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            rect: Rect::new(0, 0, settings.ship_width, settings.ship_height),
            y: 0.0,
            moving_up: false,
            moving_down: false,
        };
        ship.center(settings);
        ship
    }

    /// Move the ship according to its movement flags, clamped so the rect
    /// never leaves the screen vertically.
    pub fn update(&mut self, settings: &Settings) {
        if self.moving_up && self.rect.top() > 0 {
            self.y -= settings.ship_speed;
        }
        if self.moving_down && self.rect.bottom() < settings.screen_height {
            self.y += settings.ship_speed;
        }
        self.rect.y = self.y as i32;
    }

    /// Put the ship back at the vertical midpoint of the screen.
    pub fn center(&mut self, settings: &Settings) {
        self.y = (settings.screen_height / 2 - settings.ship_height / 2) as f32;
        self.rect.y = self.y as i32;
    }
}
