use super::rect::Rect;
use crate::settings::Settings;

/// A single alien in the fleet.
///
/// Aliens sweep vertically as a fleet; their x only changes when the whole
/// fleet lurches toward the ship on a direction reversal.
#[derive(Debug, Clone)]
pub struct Alien {
    pub rect: Rect,
    /// Exact vertical position; `rect.y` is this truncated.
    pub y: f32,
}

impl Alien {
    pub fn new(settings: &Settings, x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
            y: y as f32,
        }
    }

    /// Move the alien along the fleet's current vertical direction.
    pub fn update(&mut self, settings: &Settings) {
        self.y += settings.alien_speed * settings.fleet_direction as f32;
        self.rect.y = self.y as i32;
    }

    /// True if the alien touches the scoreboard margin or the bottom of the
    /// screen, meaning the fleet must reverse.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.rect.top() <= settings.top_margin || self.rect.bottom() >= settings.screen_height
    }
}
