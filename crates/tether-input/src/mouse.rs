use tether_core::geometry::Pos;

use crate::InputEvent;

/// Pointer position and button state, fed one event at a time.
///
/// `pressed` is true while any mouse button is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseState {
    position: Pos,
    previous: Pos,
    pressed: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Position before the most recent motion event.
    ///
    /// Every motion event shifts the current position into the previous one,
    /// so this differs from a platform-global cursor query, which keeps no
    /// history. Button events leave it untouched.
    pub fn previous_x(&self) -> i32 {
        self.previous.x
    }

    pub fn previous_y(&self) -> i32 {
        self.previous.y
    }

    pub fn position(&self) -> Pos {
        self.position
    }

    pub fn previous_position(&self) -> Pos {
        self.previous
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn update(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::MouseMotion { x, y } => {
                self.previous = self.position;
                self.position = Pos::new(x, y);
            }
            InputEvent::MouseButtonDown { .. } => self.pressed = true,
            InputEvent::MouseButtonUp { .. } => self.pressed = false,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyCode, MouseButton};

    #[test]
    fn test_motion_tracks_previous() {
        let mut mouse = MouseState::new();
        mouse.update(&InputEvent::MouseMotion { x: 10, y: 20 });
        mouse.update(&InputEvent::MouseMotion { x: 15, y: 25 });

        assert_eq!((mouse.x(), mouse.y()), (15, 25));
        assert_eq!((mouse.previous_x(), mouse.previous_y()), (10, 20));
        assert_eq!(mouse.position(), Pos::new(15, 25));
    }

    #[test]
    fn test_button_events_keep_previous() {
        let mut mouse = MouseState::new();
        mouse.update(&InputEvent::MouseMotion { x: 3, y: 4 });
        mouse.update(&InputEvent::MouseMotion { x: 7, y: 8 });
        mouse.update(&InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            x: 9,
            y: 9,
        });

        assert_eq!(mouse.previous_position(), Pos::new(3, 4));
        assert_eq!(mouse.position(), Pos::new(7, 8));
    }

    #[test]
    fn test_buttons_toggle_pressed() {
        let mut mouse = MouseState::new();
        mouse.update(&InputEvent::MouseMotion { x: 30, y: 20 });
        mouse.update(&InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            x: 99,
            y: 99,
        });
        assert!(mouse.pressed());
        // Buttons do not move the pointer.
        assert_eq!(mouse.position(), Pos::new(30, 20));

        mouse.update(&InputEvent::MouseButtonUp {
            button: MouseButton::Left,
            x: 30,
            y: 20,
        });
        assert!(!mouse.pressed());
    }

    #[test]
    fn test_other_events_are_ignored() {
        let mut mouse = MouseState::new();
        mouse.update(&InputEvent::MouseMotion { x: 1, y: 2 });
        let before = mouse;

        mouse.update(&InputEvent::Quit);
        mouse.update(&InputEvent::Other);
        mouse.update(&InputEvent::KeyDown {
            key: KeyCode::Space,
            repeat: false,
        });
        assert_eq!(mouse, before);
    }
}
