mod alien;
mod bullet;
mod game_state;
mod rect;
mod ship;

// Re-export all public types
pub use alien::Alien;
pub use bullet::Bullet;
pub use game_state::GameState;
pub use rect::Rect;
pub use ship::Ship;
