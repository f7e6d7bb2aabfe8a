use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GameState;
use crate::game::GameCommand;

/// Translates raw terminal key events into game commands.
///
/// Movement is press/release driven: a press emits a `*Start` command and
/// the matching release emits `*Stop`, so the core's movement flags mirror
/// the physical key state.
pub struct InputManager {
    commands: Vec<GameCommand>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Poll all pending events and return this tick's commands in
    /// delivery order.
    pub fn poll_commands(&mut self, game_state: GameState) -> color_eyre::Result<Vec<GameCommand>> {
        self.commands.clear();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event, game_state);
                }
                Event::Mouse(_) => {
                    // Mouse events currently ignored
                }
                Event::Resize(_, _) => {
                    // Resize is picked up from the frame area during render
                }
                _ => {}
            }
        }

        Ok(std::mem::take(&mut self.commands))
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: GameState) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, game_state),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: GameState) {
        // Quit works in any state
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.commands.push(GameCommand::Quit);
            return;
        }

        // Keyboard stand-in for the play button while no game is running
        if game_state == GameState::Inactive
            && matches!(
                key_event.code,
                KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P')
            )
        {
            self.commands.push(GameCommand::StartGame);
            return;
        }

        match key_event.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                self.commands.push(GameCommand::MoveUpStart);
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.commands.push(GameCommand::MoveDownStart);
            }
            KeyCode::Char(' ') => {
                self.commands.push(GameCommand::Fire);
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                self.commands.push(GameCommand::MoveUpStop);
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.commands.push(GameCommand::MoveDownStop);
            }
            _ => {}
        }
    }
}
