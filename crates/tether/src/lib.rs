//! Tether - RAII handles and small widgets over a C multimedia platform
//!
//! Tether wraps the pointers a platform like SDL2 hands out so they are freed
//! exactly once, and builds a few game-loop helpers on top:
//!
//! - **Handles**: [`Managed`] with unique or reference-counted ownership
//! - **Textures**: typed texture handles carrying a clip rectangle
//! - **Input**: explicit mouse and keyboard state fed from platform events
//! - **UI**: clickable texture components and three-state buttons
//! - **Audio**: sound effect and music handles with playback helpers
//! - **Time**: pausable timers, a frame counter and a frame limiter
//!
//! # Quick Start
//!
//! ```ignore
//! use tether::prelude::*;
//! use tether::render::sdl::SdlPlatform;
//!
//! let platform = SdlPlatform::init()?;
//! let window = platform.create_window(&config.window)?;
//! let renderer = platform.create_renderer(&window, true)?;
//! let sheet: Texture<_, Shared> =
//!     load_texture(&platform, &renderer, "button.png", Some(Color::CYAN))?;
//! let mut button = Button::from_sheet(&sheet, clips, Pos::new(270, 220));
//!
//! while !input.quit_requested() {
//!     input.extend(tether::input::sdl::poll_events());
//!     button.update(&input.mouse);
//!     renderer.clear();
//!     button.render(&renderer);
//!     renderer.present();
//!     limiter.throttle();
//! }
//! ```
//!
//! # Backends
//!
//! The platform is reached through traits in [`render::resource`] and
//! [`render::Platform`]. The `sdl2` feature enables the SDL2 implementation;
//! without it the crates build against any type implementing those traits,
//! such as the recording mock in `tether-test-utils`.

pub mod time;

// Re-export core types
pub use tether_core as core;
pub use tether_core::config::{Config, FrameRate, ProfilingMode, WindowConfig};
pub use tether_core::geometry::{Pos, Rect, Size};

pub use tether_handle as handle;
pub use tether_handle::{Managed, NativeResource, Shared, Unique};

pub use tether_render as render;

#[cfg(feature = "input")]
pub use tether_input as input;

#[cfg(feature = "ui")]
pub use tether_ui as ui;

#[cfg(feature = "audio")]
pub use tether_audio as audio;

pub use time::{Clock, FrameCounter, FrameLimiter, ManualClock, SystemClock, Timer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::time::{Clock, FrameCounter, FrameLimiter, SystemClock, Timer};

    // Core types
    pub use tether_core::config::{Config, FrameRate};
    pub use tether_core::geometry::{Pos, Rect, Size};

    // Handles
    pub use tether_handle::{Managed, NativeResource, Ownership, Shared, Unique};

    // Render types
    pub use tether_render::{
        BlendMode, Color, ExtentExt, Flip, Orientation, Platform, RendererExt, SpriteAnimation,
        Texture, load_font, load_surface, load_texture, render_text,
    };

    #[cfg(feature = "input")]
    pub use tether_input::{InputEvent, InputState, KeyCode, MouseButton, MouseState};

    #[cfg(feature = "ui")]
    pub use tether_ui::{Button, InteractionState, TextureComponent, Visual};

    #[cfg(feature = "audio")]
    pub use tether_audio::{AudioPlatform, MusicState, Repeat, play_chunk, toggle_music};
}
