/// A platform input event, reduced to what the state objects track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the application.
    Quit,
    /// Pointer moved to `(x, y)` in window coordinates.
    MouseMotion { x: i32, y: i32 },
    MouseButtonDown { button: MouseButton, x: i32, y: i32 },
    MouseButtonUp { button: MouseButton, x: i32, y: i32 },
    /// `repeat` is set for auto-repeat presses of a held key.
    KeyDown { key: KeyCode, repeat: bool },
    KeyUp { key: KeyCode },
    /// Anything the state objects ignore.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// Physical key position, named after the US layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Space,
    Return,
    Escape,
    Backspace,
    Tab,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    /// Any other key, by platform scancode.
    Other(u32),
}

impl KeyCode {
    /// The digit key for `n`, if `n` is a single digit.
    pub fn digit(n: u8) -> Option<Self> {
        Some(match n {
            0 => KeyCode::Num0,
            1 => KeyCode::Num1,
            2 => KeyCode::Num2,
            3 => KeyCode::Num3,
            4 => KeyCode::Num4,
            5 => KeyCode::Num5,
            6 => KeyCode::Num6,
            7 => KeyCode::Num7,
            8 => KeyCode::Num8,
            9 => KeyCode::Num9,
            _ => return None,
        })
    }
}
