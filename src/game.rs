use crate::entities::{Alien, Bullet, GameState, Ship};
use crate::fleet::{self, JitterSource};
use crate::settings::Settings;
use crate::stats::GameStats;

/// How long gameplay stays frozen after a non-terminal life loss
/// (60 ticks is one second at the 60 Hz tick rate).
pub const LIFE_LOST_PAUSE_TICKS: u32 = 60;

/// Input intents the session consumes, one batch per tick in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveUpStart,
    MoveUpStop,
    MoveDownStart,
    MoveDownStop,
    Fire,
    StartGame,
    Quit,
}

/// The complete game simulation: fleet, ship, bullets, score, and the
/// state machine driving them.
///
/// The simulation is presentation-free; the app layer feeds it commands,
/// ticks it, and renders whatever it exposes. The jitter source is injected
/// so a seeded rng reproduces whole games.
pub struct Game<R: JitterSource> {
    pub settings: Settings,
    pub stats: GameStats,
    pub state: GameState,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    /// Remaining ticks of the life-lost freeze.
    pub pause_ticks: u32,
    rng: R,
}

impl<R: JitterSource> Game<R> {
    pub fn new(settings: Settings, high_score: u32, mut rng: R) -> Self {
        let stats = GameStats::new(&settings, high_score);
        let ship = Ship::new(&settings);
        // Show a wave behind the play prompt before the first game starts.
        let aliens = fleet::build_fleet(&settings, &mut rng);

        Self {
            settings,
            stats,
            state: GameState::Inactive,
            ship,
            bullets: Vec::new(),
            aliens,
            pause_ticks: 0,
            rng,
        }
    }

    /// Apply one input intent. Quit is handled by the session owner; here it
    /// is a no-op.
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::MoveUpStart => self.ship.moving_up = true,
            GameCommand::MoveUpStop => self.ship.moving_up = false,
            GameCommand::MoveDownStart => self.ship.moving_down = true,
            GameCommand::MoveDownStop => self.ship.moving_down = false,
            GameCommand::Fire => self.fire_bullet(),
            GameCommand::StartGame => self.start_game(),
            GameCommand::Quit => {}
        }
    }

    /// Advance the simulation one tick.
    pub fn tick(&mut self) {
        match self.state {
            GameState::Inactive => {}
            GameState::LifeLostPause => {
                self.pause_ticks = self.pause_ticks.saturating_sub(1);
                if self.pause_ticks == 0 {
                    self.state = GameState::Playing;
                }
            }
            GameState::Playing => {
                self.ship.update(&self.settings);
                self.update_bullets();
                self.update_aliens();
            }
        }
    }

    /// Start a new game from the inactive state.
    fn start_game(&mut self) {
        if self.state != GameState::Inactive {
            return;
        }

        self.settings.initialize_dynamic_settings();
        self.stats.reset(&self.settings);

        self.bullets.clear();
        self.aliens = fleet::build_fleet(&self.settings, &mut self.rng);
        self.ship.center(&self.settings);
        self.ship.moving_up = false;
        self.ship.moving_down = false;

        self.state = GameState::Playing;
    }

    /// Fire a bullet if play is active and the cap allows; otherwise a no-op.
    fn fire_bullet(&mut self) {
        if self.state == GameState::Playing && self.bullets.len() < self.settings.bullets_allowed {
            self.bullets.push(Bullet::new(&self.settings, &self.ship));
        }
    }

    /// Move bullets, drop the ones that left the screen, and resolve hits.
    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        let settings = &self.settings;
        self.bullets.retain(|b| !b.is_offscreen(settings));

        self.check_bullet_alien_collisions();
    }

    /// Resolve bullet-alien overlaps and the wave-clear transition.
    ///
    /// A bullet that overlaps anything is spent, and every alien it overlaps
    /// this tick is destroyed and credited.
    fn check_bullet_alien_collisions(&mut self) {
        let mut bullets_to_remove = Vec::new();
        let mut aliens_to_remove = Vec::new();
        let mut destroyed = 0u32;

        for (b_idx, bullet) in self.bullets.iter().enumerate() {
            let mut hit_any = false;
            for (a_idx, alien) in self.aliens.iter().enumerate() {
                if bullet.rect.intersects(&alien.rect) && !aliens_to_remove.contains(&a_idx) {
                    aliens_to_remove.push(a_idx);
                    destroyed += 1;
                    hit_any = true;
                }
            }
            if hit_any {
                bullets_to_remove.push(b_idx);
            }
        }

        if destroyed > 0 {
            self.stats.score += self.settings.alien_points * destroyed;
            self.stats.check_high_score();
        }

        // Remove in reverse order to avoid index issues
        bullets_to_remove.sort_unstable();
        for idx in bullets_to_remove.into_iter().rev() {
            self.bullets.remove(idx);
        }
        aliens_to_remove.sort_unstable();
        for idx in aliens_to_remove.into_iter().rev() {
            self.aliens.remove(idx);
        }

        if self.aliens.is_empty() {
            // Whole fleet destroyed: next wave, next level, faster game.
            self.bullets.clear();
            self.aliens = fleet::build_fleet(&self.settings, &mut self.rng);
            self.settings.increase_speed();
            self.stats.level += 1;
        }
    }

    /// Reverse the fleet if needed, move it, then look for the two
    /// life-loss conditions.
    fn update_aliens(&mut self) {
        self.check_fleet_edges();
        for alien in &mut self.aliens {
            alien.update(&self.settings);
        }

        if self
            .aliens
            .iter()
            .any(|alien| alien.rect.intersects(&self.ship.rect))
        {
            self.ship_hit();
        }

        // An alien reaching the left edge costs a life, same as a collision.
        if self.aliens.iter().any(|alien| alien.rect.left() <= 0) {
            self.ship_hit();
        }
    }

    /// One reversal decision per tick: the first edge-touching alien lurches
    /// the whole fleet and flips its direction.
    fn check_fleet_edges(&mut self) {
        let settings = &self.settings;
        if self.aliens.iter().any(|alien| alien.check_edges(settings)) {
            for alien in &mut self.aliens {
                alien.rect.x -= self.settings.fleet_lurch_speed;
            }
            self.settings.fleet_direction *= -1;
        }
    }

    /// Shared handler for ship-alien collisions and aliens escaping left.
    fn ship_hit(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        if self.stats.ships_left > 0 {
            self.bullets.clear();
            self.aliens = fleet::build_fleet(&self.settings, &mut self.rng);
            self.ship.center(&self.settings);

            self.state = GameState::LifeLostPause;
            self.pause_ticks = LIFE_LOST_PAUSE_TICKS;
        } else {
            self.state = GameState::Inactive;
        }
    }
}
