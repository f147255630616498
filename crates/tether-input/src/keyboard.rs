use tether_core::alloc::HashSet;

use crate::{InputEvent, KeyCode};

/// Keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn held(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.held.iter().copied()
    }

    pub fn update(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key, .. } => {
                self.held.insert(key);
            }
            InputEvent::KeyUp { key } => {
                self.held.remove(&key);
            }
            _ => {}
        }
    }

    /// Forget every held key, e.g. after focus loss.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keyboard = KeyboardState::new();
        keyboard.update(&InputEvent::KeyDown {
            key: KeyCode::Up,
            repeat: false,
        });
        keyboard.update(&InputEvent::KeyDown {
            key: KeyCode::Left,
            repeat: false,
        });
        assert!(keyboard.is_pressed(KeyCode::Up));
        assert!(keyboard.is_pressed(KeyCode::Left));
        assert!(!keyboard.is_pressed(KeyCode::Down));

        keyboard.update(&InputEvent::KeyUp { key: KeyCode::Up });
        assert!(!keyboard.is_pressed(KeyCode::Up));
        assert_eq!(keyboard.held().collect::<Vec<_>>(), vec![KeyCode::Left]);
    }

    #[test]
    fn test_repeat_keeps_key_held() {
        let mut keyboard = KeyboardState::new();
        for repeat in [false, true, true] {
            keyboard.update(&InputEvent::KeyDown {
                key: KeyCode::Space,
                repeat,
            });
        }
        assert_eq!(keyboard.held().count(), 1);

        keyboard.clear();
        assert!(!keyboard.is_pressed(KeyCode::Space));
    }

    #[test]
    fn test_digit() {
        assert_eq!(KeyCode::digit(9), Some(KeyCode::Num9));
        assert_eq!(KeyCode::digit(10), None);
    }
}
