/// Gameplay states for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game in progress; initial state, and re-entered when the last
    /// ship is lost. The fleet stays on screen behind the play prompt.
    Inactive,
    /// Ship and fleet update every tick.
    Playing,
    /// Short freeze after a non-terminal life loss before play resumes.
    LifeLostPause,
}
