use tether_core::geometry::Rect;
use tether_input::MouseState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Pointer inside, button up.
    Hovering,
    /// Pressed while hovering; stays pressed until the button is released,
    /// wherever the pointer goes.
    Pressed,
}

/// Hover, press and click tracking against a placement rectangle.
///
/// `clicked` is edge-triggered: it is true for the single update that sees
/// the release ending a press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    state: InteractionState,
    clicked: bool,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. Points on the rectangle's border are outside.
    pub fn update(&mut self, rect: Rect, mouse: &MouseState) -> InteractionState {
        use InteractionState::*;

        self.clicked = false;
        let inside = rect.contains_strict(mouse.position());
        let pressed = mouse.pressed();

        let next = match (self.state, inside, pressed) {
            // Entering with the button already down is not a press.
            (Idle, true, false) => Hovering,
            (Idle, _, _) => Idle,
            (Hovering, true, true) => Pressed,
            (Hovering, true, false) => Hovering,
            (Hovering, false, _) => Idle,
            (Pressed, _, true) => Pressed,
            (Pressed, _, false) => {
                self.clicked = true;
                Idle
            }
        };

        if next != self.state {
            tracing::trace!(from = ?self.state, to = ?next, "interaction changed");
        }
        self.state = next;
        next
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_hovering(&self) -> bool {
        self.state == InteractionState::Hovering
    }

    pub fn is_clicking(&self) -> bool {
        self.state == InteractionState::Pressed
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    /// Back to idle, dropping any press in progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_input::{InputEvent, MouseButton};

    const RECT: Rect = Rect::new(10, 10, 50, 20);

    fn mouse_at(x: i32, y: i32, pressed: bool) -> MouseState {
        let mut mouse = MouseState::new();
        mouse.update(&InputEvent::MouseMotion { x, y });
        let button = MouseButton::Left;
        mouse.update(&if pressed {
            InputEvent::MouseButtonDown { button, x, y }
        } else {
            InputEvent::MouseButtonUp { button, x, y }
        });
        mouse
    }

    #[test]
    fn test_press_release_cycle_clicks_once() {
        let mut interaction = Interaction::new();

        assert_eq!(
            interaction.update(RECT, &mouse_at(30, 20, false)),
            InteractionState::Hovering
        );
        assert!(interaction.is_hovering());

        assert_eq!(
            interaction.update(RECT, &mouse_at(30, 20, true)),
            InteractionState::Pressed
        );
        assert!(interaction.is_clicking());
        assert!(!interaction.is_clicked());

        assert_eq!(
            interaction.update(RECT, &mouse_at(30, 20, false)),
            InteractionState::Idle
        );
        assert!(interaction.is_clicked());

        interaction.update(RECT, &mouse_at(30, 20, false));
        assert!(!interaction.is_clicked());
        assert!(interaction.is_hovering());
    }

    #[test]
    fn test_press_is_sticky_outside() {
        let mut interaction = Interaction::new();
        interaction.update(RECT, &mouse_at(30, 20, false));
        interaction.update(RECT, &mouse_at(30, 20, true));

        assert_eq!(
            interaction.update(RECT, &mouse_at(200, 200, true)),
            InteractionState::Pressed
        );

        // Releasing outside still ends the press with a click.
        assert_eq!(
            interaction.update(RECT, &mouse_at(200, 200, false)),
            InteractionState::Idle
        );
        assert!(interaction.is_clicked());
    }

    #[test]
    fn test_entering_pressed_is_not_a_press() {
        let mut interaction = Interaction::new();
        assert_eq!(
            interaction.update(RECT, &mouse_at(30, 20, true)),
            InteractionState::Idle
        );
        assert_eq!(
            interaction.update(RECT, &mouse_at(31, 20, true)),
            InteractionState::Idle
        );
    }

    #[test]
    fn test_border_is_outside() {
        let mut interaction = Interaction::new();
        assert_eq!(
            interaction.update(RECT, &mouse_at(10, 20, false)),
            InteractionState::Idle
        );
        assert_eq!(
            interaction.update(RECT, &mouse_at(60, 20, false)),
            InteractionState::Idle
        );
    }

    #[test]
    fn test_leaving_while_hovering() {
        let mut interaction = Interaction::new();
        interaction.update(RECT, &mouse_at(30, 20, false));
        assert_eq!(
            interaction.update(RECT, &mouse_at(0, 0, false)),
            InteractionState::Idle
        );
        assert!(!interaction.is_clicked());
    }

    #[test]
    fn test_reset() {
        let mut interaction = Interaction::new();
        interaction.update(RECT, &mouse_at(30, 20, false));
        interaction.update(RECT, &mouse_at(30, 20, true));
        interaction.reset();
        assert_eq!(interaction.state(), InteractionState::Idle);
    }
}
