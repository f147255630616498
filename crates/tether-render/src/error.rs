use std::fmt;
use std::path::PathBuf;

/// Errors from loading or creating render resources.
///
/// Every variant carries the platform's last-error message at the time of the
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A platform subsystem failed to start.
    Init {
        subsystem: &'static str,
        message: String,
    },
    /// An image file could not be decoded into a surface.
    ImageLoad { path: PathBuf, message: String },
    /// The color key could not be applied to a loaded surface.
    ColorKey { path: PathBuf, message: String },
    /// A surface could not be uploaded to a texture.
    TextureCreation { origin: String, message: String },
    FontLoad { path: PathBuf, message: String },
    TextRender { text: String, message: String },
    /// An operation needed a live handle and got an empty one.
    EmptyHandle { kind: &'static str },
    /// The window or renderer could not be created.
    Creation { kind: &'static str, message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Init { subsystem, message } => {
                write!(f, "{} could not initialize: {}", subsystem, message)
            }
            RenderError::ImageLoad { path, message } => {
                write!(f, "Unable to load image {}: {}", path.display(), message)
            }
            RenderError::ColorKey { path, message } => {
                write!(
                    f,
                    "Unable to set color key on {}: {}",
                    path.display(),
                    message
                )
            }
            RenderError::TextureCreation { origin, message } => {
                write!(f, "Unable to create texture from {}: {}", origin, message)
            }
            RenderError::FontLoad { path, message } => {
                write!(f, "Failed to load font {}: {}", path.display(), message)
            }
            RenderError::TextRender { text, message } => {
                write!(f, "Unable to render text {:?}: {}", text, message)
            }
            RenderError::EmptyHandle { kind } => write!(f, "Empty {} handle", kind),
            RenderError::Creation { kind, message } => {
                write!(f, "Unable to create {}: {}", kind, message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

pub type RenderResult<T> = Result<T, RenderError>;
