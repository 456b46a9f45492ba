//! Keyboard polling for the interactive animation.

use std::collections::HashSet;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use vrot_euler::{ControlKey, InputSource};

/// Map a terminal key press to an animation control.
pub fn control_for(key: &KeyEvent) -> Option<ControlKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::F(1) | KeyCode::Char(' ') => Some(ControlKey::TogglePause),
        KeyCode::Esc | KeyCode::Char('q') => Some(ControlKey::Stop),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ControlKey::Stop)
        }
        _ => None,
    }
}

/// Drains pending crossterm events without blocking.
#[derive(Debug, Default)]
pub struct KeyboardInput {
    pressed: HashSet<ControlKey>,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for KeyboardInput {
    fn refresh(&mut self) -> io::Result<()> {
        self.pressed.clear();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(control) = control_for(&key) {
                    self.pressed.insert(control);
                }
            }
        }
        Ok(())
    }

    fn is_pressed(&self, key: ControlKey) -> bool {
        self.pressed.contains(&key)
    }
}

/// Block until the user asks to leave a static view.
pub fn wait_for_exit() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if control_for(&key) == Some(ControlKey::Stop) || key.code == KeyCode::Enter {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_toggle_keys() {
        assert_eq!(control_for(&key(KeyCode::F(1))), Some(ControlKey::TogglePause));
        assert_eq!(control_for(&key(KeyCode::Char(' '))), Some(ControlKey::TogglePause));
    }

    #[test]
    fn test_stop_keys() {
        assert_eq!(control_for(&key(KeyCode::Esc)), Some(ControlKey::Stop));
        assert_eq!(control_for(&key(KeyCode::Char('q'))), Some(ControlKey::Stop));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(control_for(&ctrl_c), Some(ControlKey::Stop));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(control_for(&key(KeyCode::Char('c'))), None);
        assert_eq!(control_for(&key(KeyCode::F(2))), None);
        assert_eq!(control_for(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::F(1),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(control_for(&release), None);
    }
}
