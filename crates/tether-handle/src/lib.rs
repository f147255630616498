//! Ownership handles for native platform resources.
//!
//! Platform APIs hand out raw pointers (windows, renderers, textures, fonts,
//! audio buffers) that must be freed exactly once with a matching free
//! function. [`Managed`] wraps such a pointer and releases it on drop.
//!
//! Two ownership modes share one interface and are chosen at compile time:
//!
//! - [`Unique`]: one owner. [`Managed::take`] moves ownership out and leaves
//!   the source empty.
//! - [`Shared`]: reference counted. Cloning adds an owner; the pointer is
//!   released when the last owner goes away.
//!
//! Either mode can hand out a non-owning alias ([`Managed::alias`]) for code
//! that needs the pointer without becoming an owner.
//!
//! # Example
//!
//! ```ignore
//! let texture: Managed<SDL_Texture> = unsafe { Managed::from_raw(raw) };
//! if !texture.is_valid() {
//!     // creation failed upstream
//! }
//! unsafe { SDL_RenderCopy(renderer.as_ptr(), texture.as_ptr(), null(), null()) };
//! // released when `texture` drops
//! ```

mod managed;
mod ownership;
mod resource;

pub use managed::Managed;
pub use ownership::{Owner, Ownership, Shared, SharedOwner, Unique, UniqueOwner};
pub use resource::NativeResource;
