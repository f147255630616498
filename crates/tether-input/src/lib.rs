//! Tether Input
//!
//! Platform events arrive as [`InputEvent`]s and are folded into explicit
//! state objects that components read during their update:
//!
//! - [`MouseState`]: pointer position, previous position and button state
//! - [`KeyboardState`]: the set of held keys
//! - [`InputState`]: both of the above plus the quit request

mod event;
mod keyboard;
mod mouse;
#[cfg(feature = "sdl2")]
pub mod sdl;
mod state;

pub use event::{InputEvent, KeyCode, MouseButton};
pub use keyboard::KeyboardState;
pub use mouse::MouseState;
pub use state::InputState;
