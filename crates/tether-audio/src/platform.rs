use std::path::Path;
use std::ptr::NonNull;

use tether_handle::{Managed, NativeResource, Ownership, Unique};

use crate::error::{AudioError, AudioResult};

/// A decoded sound effect, played on a mixer channel.
pub trait ChunkResource: NativeResource {}

/// A streamed music track. One plays at a time.
pub trait MusicResource: NativeResource {}

pub type Chunk<C, O = Unique> = Managed<C, O>;
pub type Music<M, O = Unique> = Managed<M, O>;

/// How many times a sound plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    Times(u16),
    Forever,
}

impl Repeat {
    /// Extra plays after the first, with `-1` for forever.
    pub fn loops(self) -> i32 {
        match self {
            Repeat::Once => 0,
            Repeat::Times(n) => i32::from(n.saturating_sub(1)),
            Repeat::Forever => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MusicState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Loading and playback functions of a native mixer.
///
/// Loading returns a raw pointer that is null on failure; the reason is then
/// available from [`last_error`](Self::last_error).
pub trait AudioPlatform {
    type Chunk: ChunkResource;
    type Music: MusicResource;

    fn load_chunk(&self, path: &Path) -> *mut Self::Chunk;
    fn load_music(&self, path: &Path) -> *mut Self::Music;

    /// Play on `channel`, or the first free channel for `None`. Returns the
    /// channel used.
    ///
    /// # Safety
    ///
    /// `chunk` must be live.
    unsafe fn play_chunk(
        &self,
        chunk: NonNull<Self::Chunk>,
        channel: Option<i32>,
        repeat: Repeat,
    ) -> Option<i32>;

    /// # Safety
    ///
    /// `music` must be live and stay live while it plays.
    unsafe fn play_music(&self, music: NonNull<Self::Music>, repeat: Repeat) -> bool;

    fn music_state(&self) -> MusicState;
    fn pause_music(&self);
    fn resume_music(&self);
    fn halt_music(&self);

    fn last_error(&self) -> String;
}

pub fn load_chunk<P: AudioPlatform>(
    platform: &P,
    path: impl AsRef<Path>,
) -> AudioResult<Chunk<P::Chunk>> {
    let path = path.as_ref();
    // SAFETY: the pointer was just created by the platform and has no owner.
    let chunk: Chunk<P::Chunk> = unsafe { Managed::from_raw(platform.load_chunk(path)) };
    if chunk.is_null() {
        let err = AudioError::ChunkLoad {
            path: path.to_path_buf(),
            message: platform.last_error(),
        };
        tracing::error!("{}", err);
        return Err(err);
    }

    tracing::debug!(path = %path.display(), "loaded sound effect");
    Ok(chunk)
}

pub fn load_music<P: AudioPlatform>(
    platform: &P,
    path: impl AsRef<Path>,
) -> AudioResult<Music<P::Music>> {
    let path = path.as_ref();
    // SAFETY: the pointer was just created by the platform and has no owner.
    let music: Music<P::Music> = unsafe { Managed::from_raw(platform.load_music(path)) };
    if music.is_null() {
        let err = AudioError::MusicLoad {
            path: path.to_path_buf(),
            message: platform.last_error(),
        };
        tracing::error!("{}", err);
        return Err(err);
    }

    tracing::debug!(path = %path.display(), "loaded music");
    Ok(music)
}

/// Play `chunk` on the first free channel and return that channel.
pub fn play_chunk<P: AudioPlatform, O: Ownership>(
    platform: &P,
    chunk: &Chunk<P::Chunk, O>,
    repeat: Repeat,
) -> AudioResult<i32> {
    let Some(ptr) = chunk.as_non_null() else {
        return Err(AudioError::EmptyHandle { kind: "chunk" });
    };
    // SAFETY: the caller's handle keeps `ptr` live.
    match unsafe { platform.play_chunk(ptr, None, repeat) } {
        Some(channel) => Ok(channel),
        None => {
            let err = AudioError::Playback {
                kind: "sound effect",
                message: platform.last_error(),
            };
            tracing::warn!("{}", err);
            Err(err)
        }
    }
}

pub fn play_music<P: AudioPlatform, O: Ownership>(
    platform: &P,
    music: &Music<P::Music, O>,
    repeat: Repeat,
) -> AudioResult<()> {
    let Some(ptr) = music.as_non_null() else {
        return Err(AudioError::EmptyHandle { kind: "music" });
    };
    // SAFETY: the caller's handle keeps `ptr` live.
    if unsafe { platform.play_music(ptr, repeat) } {
        Ok(())
    } else {
        let err = AudioError::Playback {
            kind: "music",
            message: platform.last_error(),
        };
        tracing::warn!("{}", err);
        Err(err)
    }
}

/// Start `music` looping if nothing plays, otherwise flip between paused and
/// playing. Returns the new state.
pub fn toggle_music<P: AudioPlatform, O: Ownership>(
    platform: &P,
    music: &Music<P::Music, O>,
) -> AudioResult<MusicState> {
    match platform.music_state() {
        MusicState::Stopped => play_music(platform, music, Repeat::Forever)?,
        MusicState::Paused => platform.resume_music(),
        MusicState::Playing => platform.pause_music(),
    }
    Ok(platform.music_state())
}

pub fn halt_music<P: AudioPlatform>(platform: &P) {
    platform.halt_music();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_loops() {
        assert_eq!(Repeat::Once.loops(), 0);
        assert_eq!(Repeat::Times(1).loops(), 0);
        assert_eq!(Repeat::Times(3).loops(), 2);
        assert_eq!(Repeat::Times(0).loops(), 0);
        assert_eq!(Repeat::Forever.loops(), -1);
    }
}
