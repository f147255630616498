use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The mixer could not be opened.
    Init { message: String },
    ChunkLoad { path: PathBuf, message: String },
    MusicLoad { path: PathBuf, message: String },
    /// The platform refused to start playback.
    Playback { kind: &'static str, message: String },
    /// An operation needed a live handle and got an empty one.
    EmptyHandle { kind: &'static str },
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Init { message } => {
                write!(f, "SDL_mixer could not initialize: {}", message)
            }
            AudioError::ChunkLoad { path, message } => {
                write!(
                    f,
                    "Failed to load sound effect {}: {}",
                    path.display(),
                    message
                )
            }
            AudioError::MusicLoad { path, message } => {
                write!(f, "Failed to load music {}: {}", path.display(), message)
            }
            AudioError::Playback { kind, message } => {
                write!(f, "Unable to play {}: {}", kind, message)
            }
            AudioError::EmptyHandle { kind } => write!(f, "Empty {} handle", kind),
        }
    }
}

impl std::error::Error for AudioError {}

pub type AudioResult<T> = Result<T, AudioError>;
