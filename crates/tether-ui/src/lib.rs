//! Tether UI
//!
//! Two retained components driven by an explicit [`MouseState`]:
//!
//! - [`TextureComponent`]: a texture placed in a rectangle, tracking hover and
//!   click
//! - [`Button`]: three visuals sharing one rectangle, switched by the same
//!   hover and press tracking
//!
//! Both call `update(&mouse)` once per frame, then `render(&renderer)`.
//!
//! [`MouseState`]: tether_input::MouseState

mod button;
mod component;
mod interaction;

pub use button::{Button, Visual};
pub use component::TextureComponent;
pub use interaction::{Interaction, InteractionState};
