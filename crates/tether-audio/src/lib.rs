//! Tether Audio
//!
//! Handles for short sound effects ([`Chunk`]) and streamed music
//! ([`Music`]), plus loaders and playback helpers over an [`AudioPlatform`].
//! Mixing itself is left to the platform.

mod error;
mod platform;
#[cfg(feature = "sdl2")]
pub mod sdl;

pub use error::{AudioError, AudioResult};
pub use platform::{
    AudioPlatform, Chunk, ChunkResource, Music, MusicResource, MusicState, Repeat, halt_music,
    load_chunk, load_music, play_chunk, play_music, toggle_music,
};
