//! Tether Render
//!
//! Typed handles over the platform's 2D renderer:
//!
//! - [`Texture`]: a texture handle plus the clip rectangle it shows
//! - [`Renderer`], [`Window`], [`Surface`], [`Font`]: handle aliases with
//!   accessors from [`RendererExt`] and [`ExtentExt`]
//! - [`load_texture`], [`load_font`], [`render_text`]: loaders over a
//!   [`Platform`]
//!
//! The native types plug in through the traits in [`resource`]. The `sdl2`
//! feature provides them for SDL2.

mod color;
mod error;
mod handles;
mod loader;
pub mod resource;
#[cfg(feature = "sdl2")]
pub mod sdl;
mod sprite;
mod texture;

pub use color::{BlendMode, Color, Flip, Orientation};
pub use error::{RenderError, RenderResult};
pub use handles::{ExtentExt, Font, Renderer, RendererExt, Surface, Window};
pub use loader::{Platform, load_font, load_surface, load_texture, render_text};
pub use sprite::SpriteAnimation;
pub use texture::Texture;
