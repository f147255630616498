use std::fmt;

use tether_core::geometry::{Pos, Rect, Size};
use tether_core::profiling::profile_function;
use tether_handle::{Managed, Ownership, Shared, Unique};

use crate::resource::{CopyRequest, Extent, TextureResource};
use crate::{BlendMode, Color, Orientation};

/// A texture handle plus the clip rectangle selecting which part of the image
/// this handle shows.
///
/// Several textures can point at one sprite sheet with different clips. In
/// [`Shared`] mode they keep the sheet alive together; [`Texture::derive`]
/// makes a new reference with its own clip.
///
/// Clip bounds are trusted: a clip reaching outside the image is passed to the
/// platform as is.
pub struct Texture<T: TextureResource, O: Ownership = Unique> {
    handle: Managed<T, O>,
    clip: Rect,
}

impl<T: TextureResource, O: Ownership> Texture<T, O> {
    /// An empty texture with a zero clip.
    pub fn empty() -> Self {
        Self {
            handle: Managed::empty(),
            clip: Rect::default(),
        }
    }

    /// Wrap `handle`, clipping to the full image extent.
    pub fn new(handle: Managed<T, O>) -> Self {
        let clip = full_extent(&handle);
        Self { handle, clip }
    }

    pub fn with_clip(handle: Managed<T, O>, clip: Rect) -> Self {
        debug_assert_clip(clip);
        Self { handle, clip }
    }

    /// Take ownership of `raw`. `None` clips to the full image extent.
    ///
    /// # Safety
    ///
    /// Same contract as [`Managed::from_raw`].
    pub unsafe fn from_raw(raw: *mut T, clip: Option<Rect>) -> Self {
        // SAFETY: forwarded from the caller.
        let handle = unsafe { Managed::from_raw(raw) };
        match clip {
            Some(clip) => Self::with_clip(handle, clip),
            None => Self::new(handle),
        }
    }

    /// Release the current image and take ownership of `raw`, resetting the
    /// clip to the new image's extent.
    ///
    /// # Safety
    ///
    /// Same contract as [`Managed::acquire`].
    pub unsafe fn acquire(&mut self, raw: *mut T) -> &mut Self {
        // SAFETY: forwarded from the caller.
        unsafe { self.handle.acquire(raw) };
        self.clip = full_extent(&self.handle);
        self
    }

    /// A non-owning texture over the same image, with `clip` or this
    /// texture's clip.
    ///
    /// # Safety
    ///
    /// The alias must not be used after the owning texture releases the image.
    pub unsafe fn alias(&self, clip: Option<Rect>) -> Self {
        Self {
            // SAFETY: forwarded from the caller.
            handle: unsafe { self.handle.alias() },
            clip: clip.unwrap_or(self.clip),
        }
    }

    /// Move the image and clip out, leaving this texture empty.
    pub fn take(&mut self) -> Self {
        Self {
            handle: self.handle.take(),
            clip: std::mem::take(&mut self.clip),
        }
    }

    pub fn reset(&mut self) {
        self.handle.reset();
        self.clip = Rect::default();
    }

    pub fn handle(&self) -> &Managed<T, O> {
        &self.handle
    }

    pub fn into_handle(self) -> Managed<T, O> {
        self.handle
    }

    pub fn as_ptr(&self) -> *mut T {
        self.handle.as_ptr()
    }

    pub fn is_valid(&self) -> bool {
        self.handle.is_valid()
    }

    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Extent of the whole image as reported by the platform; zero when empty.
    pub fn base_size(&self) -> Size {
        full_extent(&self.handle).size()
    }

    pub fn clip(&self) -> Rect {
        self.clip
    }

    pub fn clip_position(&self) -> Pos {
        self.clip.pos()
    }

    pub fn clip_size(&self) -> Size {
        self.clip.size()
    }

    pub fn set_clip(&mut self, clip: Rect) -> &mut Self {
        debug_assert_clip(clip);
        self.clip = clip;
        self
    }

    pub fn set_clip_position(&mut self, pos: Pos) -> &mut Self {
        self.clip.set_pos(pos);
        self
    }

    pub fn set_clip_size(&mut self, size: Size) -> &mut Self {
        self.clip.set_size(size);
        debug_assert_clip(self.clip);
        self
    }

    /// Tint the image. Affects every texture sharing this image.
    pub fn set_color(&self, color: Color) -> &Self {
        if let Some(ptr) = self.handle.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { T::set_color_mod(ptr, color) };
        }
        self
    }

    pub fn set_blend_mode(&self, mode: BlendMode) -> &Self {
        if let Some(ptr) = self.handle.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { T::set_blend_mode(ptr, mode) };
        }
        self
    }

    pub fn set_alpha(&self, alpha: u8) -> &Self {
        if let Some(ptr) = self.handle.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { T::set_alpha_mod(ptr, alpha) };
        }
        self
    }

    /// Copy the clipped region into `dst` on `target`.
    pub fn draw<P: Ownership>(&self, target: &Managed<T::Canvas, P>, dst: Rect) {
        self.draw_ex(target, dst, &Orientation::IDENTITY);
    }

    /// Copy the clipped region at `pos`, unscaled.
    pub fn draw_at<P: Ownership>(&self, target: &Managed<T::Canvas, P>, pos: Pos) {
        self.draw(target, Rect::from_parts(pos, self.clip.size()));
    }

    /// Copy the clipped region into `dst`, rotated and flipped.
    pub fn draw_ex<P: Ownership>(
        &self,
        target: &Managed<T::Canvas, P>,
        dst: Rect,
        orientation: &Orientation,
    ) {
        profile_function!();

        let (Some(canvas), Some(texture)) = (target.as_non_null(), self.handle.as_non_null())
        else {
            tracing::trace!(
                target_valid = target.is_valid(),
                texture_valid = self.is_valid(),
                "skipping draw of empty handle"
            );
            return;
        };

        let request = CopyRequest {
            src: self.clip,
            dst,
            orientation: *orientation,
        };
        // SAFETY: both handles keep their pointers live for this call.
        unsafe { T::copy(canvas, texture, &request) };
    }
}

impl<T: TextureResource> Texture<T, Unique> {
    pub fn into_shared(self) -> Texture<T, Shared> {
        Texture {
            handle: self.handle.into_shared(),
            clip: self.clip,
        }
    }
}

impl<T: TextureResource> Texture<T, Shared> {
    /// Another owning reference to the same image, with `clip` or this
    /// texture's clip.
    pub fn derive(&self, clip: Option<Rect>) -> Self {
        if let Some(clip) = clip {
            debug_assert_clip(clip);
        }
        Self {
            handle: self.handle.clone(),
            clip: clip.unwrap_or(self.clip),
        }
    }

    pub fn ref_count(&self) -> usize {
        self.handle.ref_count()
    }
}

impl<T: TextureResource> Clone for Texture<T, Shared> {
    fn clone(&self) -> Self {
        self.derive(None)
    }
}

impl<T: TextureResource> From<Texture<T, Unique>> for Texture<T, Shared> {
    fn from(texture: Texture<T, Unique>) -> Self {
        texture.into_shared()
    }
}

impl<T: TextureResource, O: Ownership> From<Managed<T, O>> for Texture<T, O> {
    fn from(handle: Managed<T, O>) -> Self {
        Self::new(handle)
    }
}

impl<T: TextureResource, O: Ownership> Default for Texture<T, O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: TextureResource, O: Ownership> fmt::Debug for Texture<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("handle", &self.handle)
            .field("clip", &self.clip)
            .finish()
    }
}

fn full_extent<T: Extent, O: Ownership>(handle: &Managed<T, O>) -> Rect {
    match handle.as_non_null() {
        // SAFETY: the handle keeps `ptr` live.
        Some(ptr) => Rect::from_parts(Pos::default(), unsafe { T::query_size(ptr) }),
        None => Rect::default(),
    }
}

fn debug_assert_clip(clip: Rect) {
    debug_assert!(
        clip.width >= 0 && clip.height >= 0,
        "negative clip size: {:?}",
        clip
    );
}
