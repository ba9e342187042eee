use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Quit,
    Restart,
}

pub trait InputSource {
    /// Every event received since the last call, oldest first. Never blocks.
    fn drain_events(&mut self) -> anyhow::Result<Vec<InputEvent>>;
}

pub fn map_key(ev: &KeyEvent) -> Option<InputEvent> {
    if is_ctrl_c(ev) {
        return Some(InputEvent::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(InputEvent::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(InputEvent::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(InputEvent::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(InputEvent::Turn(Right)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(map_key(&key(KeyCode::Up)), Some(InputEvent::Turn(Up)));
        assert_eq!(map_key(&key(KeyCode::Down)), Some(InputEvent::Turn(Down)));
        assert_eq!(map_key(&key(KeyCode::Left)), Some(InputEvent::Turn(Left)));
        assert_eq!(map_key(&key(KeyCode::Right)), Some(InputEvent::Turn(Right)));
        assert_eq!(map_key(&key(KeyCode::Char('w'))), Some(InputEvent::Turn(Up)));
        assert_eq!(map_key(&key(KeyCode::Char('a'))), Some(InputEvent::Turn(Left)));
        assert_eq!(map_key(&key(KeyCode::Char('s'))), Some(InputEvent::Turn(Down)));
        assert_eq!(map_key(&key(KeyCode::Char('D'))), Some(InputEvent::Turn(Right)));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(InputEvent::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('Q'))), Some(InputEvent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn restart_key() {
        assert_eq!(map_key(&key(KeyCode::Char('r'))), Some(InputEvent::Restart));
        assert_eq!(map_key(&key(KeyCode::Char('R'))), Some(InputEvent::Restart));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('c'))), None);
        assert_eq!(map_key(&key(KeyCode::Enter)), None);
    }
}
