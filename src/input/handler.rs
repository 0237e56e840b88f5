use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::keys;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Raw code to hand to the engine
    Steer(keys::Code),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            // Arrow keys report the same codes as WASD
            KeyCode::Up => KeyAction::Steer(keys::W),
            KeyCode::Down => KeyAction::Steer(keys::S),
            KeyCode::Left => KeyAction::Steer(keys::A),
            KeyCode::Right => KeyAction::Steer(keys::D),

            // Any other letter is forwarded; the engine ignores unbound codes
            KeyCode::Char(c) => keys::for_letter(c).map_or(KeyAction::None, KeyAction::Steer),

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
