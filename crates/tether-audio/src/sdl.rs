//! SDL2_mixer backend.

use std::ffi::{CStr, CString, c_int};
use std::path::Path;
use std::ptr::{self, NonNull};

use sdl2::sys;
use tether_handle::NativeResource;

use crate::error::{AudioError, AudioResult};
use crate::platform::{AudioPlatform, ChunkResource, MusicResource, MusicState, Repeat};

const FREQUENCY: c_int = 44_100;
const AUDIO_S16LSB: u16 = 0x8010;
const CHANNELS: c_int = 2;
const CHUNK_SIZE: c_int = 2048;

/// `Mix_Chunk`
#[repr(transparent)]
pub struct SdlChunk(sys::mixer::Mix_Chunk);

/// `Mix_Music`
#[repr(transparent)]
pub struct SdlMusic(sys::mixer::Mix_Music);

impl NativeResource for SdlChunk {
    const KIND: &'static str = "chunk";

    unsafe fn release(ptr: NonNull<Self>) {
        unsafe { sys::mixer::Mix_FreeChunk(ptr.as_ptr().cast()) }
    }
}

impl ChunkResource for SdlChunk {}

impl NativeResource for SdlMusic {
    const KIND: &'static str = "music";

    unsafe fn release(ptr: NonNull<Self>) {
        unsafe { sys::mixer::Mix_FreeMusic(ptr.as_ptr().cast()) }
    }
}

impl MusicResource for SdlMusic {}

fn last_error() -> String {
    // SAFETY: SDL_GetError always returns a valid NUL-terminated string.
    unsafe { CStr::from_ptr(sys::SDL_GetError()) }
        .to_string_lossy()
        .into_owned()
}

fn path_c_string(path: &Path) -> Option<CString> {
    CString::new(path.to_string_lossy().as_bytes()).ok()
}

/// The SDL audio subsystem with an open mixer device.
///
/// Every chunk and music handle must be dropped before this closes the mixer.
#[derive(Debug)]
pub struct SdlAudio {
    _not_send: std::marker::PhantomData<*mut ()>,
}

impl SdlAudio {
    /// Start the audio subsystem and open a 44.1 kHz stereo mixer.
    pub fn open() -> AudioResult<Self> {
        // SAFETY: plain initialization calls; each failure is checked.
        unsafe {
            if sys::SDL_InitSubSystem(sys::SDL_INIT_AUDIO) < 0 {
                return Err(init_error());
            }
            if sys::mixer::Mix_OpenAudio(FREQUENCY, AUDIO_S16LSB, CHANNELS, CHUNK_SIZE) < 0 {
                let err = init_error();
                sys::SDL_QuitSubSystem(sys::SDL_INIT_AUDIO);
                return Err(err);
            }
        }

        tracing::info!("SDL_mixer opened");
        Ok(Self {
            _not_send: std::marker::PhantomData,
        })
    }
}

impl Drop for SdlAudio {
    fn drop(&mut self) {
        // SAFETY: the mixer and subsystem were opened in `open`.
        unsafe {
            sys::mixer::Mix_HaltMusic();
            sys::mixer::Mix_CloseAudio();
            sys::SDL_QuitSubSystem(sys::SDL_INIT_AUDIO);
        }
    }
}

impl AudioPlatform for SdlAudio {
    type Chunk = SdlChunk;
    type Music = SdlMusic;

    fn load_chunk(&self, path: &Path) -> *mut SdlChunk {
        let Some(path) = path_c_string(path) else {
            return ptr::null_mut();
        };
        // SAFETY: both strings are NUL-terminated; the mixer frees the RWops.
        unsafe {
            let rw = sys::SDL_RWFromFile(path.as_ptr(), c"rb".as_ptr());
            if rw.is_null() {
                return ptr::null_mut();
            }
            sys::mixer::Mix_LoadWAV_RW(rw, 1).cast()
        }
    }

    fn load_music(&self, path: &Path) -> *mut SdlMusic {
        let Some(path) = path_c_string(path) else {
            return ptr::null_mut();
        };
        // SAFETY: `path` is NUL-terminated.
        unsafe { sys::mixer::Mix_LoadMUS(path.as_ptr()).cast() }
    }

    unsafe fn play_chunk(
        &self,
        chunk: NonNull<SdlChunk>,
        channel: Option<i32>,
        repeat: Repeat,
    ) -> Option<i32> {
        let channel = unsafe {
            sys::mixer::Mix_PlayChannelTimed(
                channel.unwrap_or(-1),
                chunk.as_ptr().cast(),
                repeat.loops(),
                -1,
            )
        };
        (channel >= 0).then_some(channel)
    }

    unsafe fn play_music(&self, music: NonNull<SdlMusic>, repeat: Repeat) -> bool {
        unsafe { sys::mixer::Mix_PlayMusic(music.as_ptr().cast(), repeat.loops()) == 0 }
    }

    fn music_state(&self) -> MusicState {
        // SAFETY: state queries with no preconditions.
        unsafe {
            if sys::mixer::Mix_PlayingMusic() == 0 {
                MusicState::Stopped
            } else if sys::mixer::Mix_PausedMusic() == 1 {
                MusicState::Paused
            } else {
                MusicState::Playing
            }
        }
    }

    fn pause_music(&self) {
        // SAFETY: no preconditions.
        unsafe { sys::mixer::Mix_PauseMusic() }
    }

    fn resume_music(&self) {
        // SAFETY: no preconditions.
        unsafe { sys::mixer::Mix_ResumeMusic() }
    }

    fn halt_music(&self) {
        // SAFETY: no preconditions.
        unsafe { sys::mixer::Mix_HaltMusic() };
    }

    fn last_error(&self) -> String {
        last_error()
    }
}

fn init_error() -> AudioError {
    let err = AudioError::Init {
        message: last_error(),
    };
    tracing::error!("{}", err);
    err
}
