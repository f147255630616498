//! Translation of SDL2 events into [`InputEvent`]s.

use std::mem::MaybeUninit;

use sdl2::sys;
use sdl2::sys::SDL_Scancode as Sc;

use crate::{InputEvent, KeyCode, MouseButton};

impl InputEvent {
    pub fn from_sdl(event: &sys::SDL_Event) -> Self {
        // SAFETY: `type_` is the common prefix of every variant, and each
        // arm reads only the variant its event type selects.
        unsafe {
            let kind = event.type_;
            if kind == sys::SDL_EventType::SDL_QUIT as u32 {
                InputEvent::Quit
            } else if kind == sys::SDL_EventType::SDL_MOUSEMOTION as u32 {
                InputEvent::MouseMotion {
                    x: event.motion.x,
                    y: event.motion.y,
                }
            } else if kind == sys::SDL_EventType::SDL_MOUSEBUTTONDOWN as u32 {
                InputEvent::MouseButtonDown {
                    button: mouse_button(event.button.button),
                    x: event.button.x,
                    y: event.button.y,
                }
            } else if kind == sys::SDL_EventType::SDL_MOUSEBUTTONUP as u32 {
                InputEvent::MouseButtonUp {
                    button: mouse_button(event.button.button),
                    x: event.button.x,
                    y: event.button.y,
                }
            } else if kind == sys::SDL_EventType::SDL_KEYDOWN as u32 {
                InputEvent::KeyDown {
                    key: key_code(event.key.keysym.scancode),
                    repeat: event.key.repeat != 0,
                }
            } else if kind == sys::SDL_EventType::SDL_KEYUP as u32 {
                InputEvent::KeyUp {
                    key: key_code(event.key.keysym.scancode),
                }
            } else {
                tracing::trace!(kind, "ignoring SDL event");
                InputEvent::Other
            }
        }
    }
}

/// Take the next pending event, if any.
pub fn poll_event() -> Option<InputEvent> {
    let mut event = MaybeUninit::<sys::SDL_Event>::uninit();
    // SAFETY: SDL_PollEvent fills the event when it returns 1.
    unsafe {
        if sys::SDL_PollEvent(event.as_mut_ptr()) == 0 {
            return None;
        }
        Some(InputEvent::from_sdl(&event.assume_init()))
    }
}

/// Drain every pending event.
pub fn poll_events() -> impl Iterator<Item = InputEvent> {
    std::iter::from_fn(poll_event)
}

fn mouse_button(button: u8) -> MouseButton {
    match u32::from(button) {
        sys::SDL_BUTTON_LEFT => MouseButton::Left,
        sys::SDL_BUTTON_MIDDLE => MouseButton::Middle,
        sys::SDL_BUTTON_RIGHT => MouseButton::Right,
        _ => MouseButton::Other(button),
    }
}

fn key_code(scancode: Sc) -> KeyCode {
    match scancode {
        Sc::SDL_SCANCODE_UP => KeyCode::Up,
        Sc::SDL_SCANCODE_DOWN => KeyCode::Down,
        Sc::SDL_SCANCODE_LEFT => KeyCode::Left,
        Sc::SDL_SCANCODE_RIGHT => KeyCode::Right,
        Sc::SDL_SCANCODE_SPACE => KeyCode::Space,
        Sc::SDL_SCANCODE_RETURN => KeyCode::Return,
        Sc::SDL_SCANCODE_ESCAPE => KeyCode::Escape,
        Sc::SDL_SCANCODE_BACKSPACE => KeyCode::Backspace,
        Sc::SDL_SCANCODE_TAB => KeyCode::Tab,
        Sc::SDL_SCANCODE_0 => KeyCode::Num0,
        Sc::SDL_SCANCODE_1 => KeyCode::Num1,
        Sc::SDL_SCANCODE_2 => KeyCode::Num2,
        Sc::SDL_SCANCODE_3 => KeyCode::Num3,
        Sc::SDL_SCANCODE_4 => KeyCode::Num4,
        Sc::SDL_SCANCODE_5 => KeyCode::Num5,
        Sc::SDL_SCANCODE_6 => KeyCode::Num6,
        Sc::SDL_SCANCODE_7 => KeyCode::Num7,
        Sc::SDL_SCANCODE_8 => KeyCode::Num8,
        Sc::SDL_SCANCODE_9 => KeyCode::Num9,
        other => KeyCode::Other(other as u32),
    }
}
