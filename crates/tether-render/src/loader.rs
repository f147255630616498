//! File and text loaders on top of a [`Platform`].
//!
//! Intermediate surfaces are held in [`Managed`] handles, so they are freed
//! exactly once whether the load succeeds or fails.

use std::path::Path;
use std::ptr::NonNull;

use tether_handle::{Managed, Ownership};

use crate::error::{RenderError, RenderResult};
use crate::handles::{Font, Surface};
use crate::resource::{CanvasResource, FontResource, SurfaceResource, TextureResource};
use crate::{Color, Texture};

/// Creation functions of a native platform.
///
/// Creation returns a raw pointer that is null on failure; the reason is then
/// available from [`last_error`](Self::last_error).
pub trait Platform {
    type Canvas: CanvasResource;
    type Texture: TextureResource<Canvas = Self::Canvas>;
    type Surface: SurfaceResource;
    type Font: FontResource;

    fn load_image(&self, path: &Path) -> *mut Self::Surface;

    /// Make every pixel of `key` transparent. Returns `false` on failure.
    ///
    /// # Safety
    ///
    /// `surface` must be live.
    unsafe fn set_color_key(&self, surface: NonNull<Self::Surface>, key: Color) -> bool;

    /// # Safety
    ///
    /// Both pointers must be live.
    unsafe fn create_texture_from_surface(
        &self,
        canvas: NonNull<Self::Canvas>,
        surface: NonNull<Self::Surface>,
    ) -> *mut Self::Texture;

    fn open_font(&self, path: &Path, point_size: u16) -> *mut Self::Font;

    /// # Safety
    ///
    /// `font` must be live.
    unsafe fn render_text(
        &self,
        font: NonNull<Self::Font>,
        text: &str,
        color: Color,
    ) -> *mut Self::Surface;

    /// Message describing the most recent failure.
    fn last_error(&self) -> String;
}

/// Load an image file into a surface.
pub fn load_surface<P: Platform>(
    platform: &P,
    path: impl AsRef<Path>,
) -> RenderResult<Surface<P::Surface>> {
    let path = path.as_ref();
    // SAFETY: the pointer was just created by the platform and has no owner.
    let surface: Surface<P::Surface> = unsafe { Managed::from_raw(platform.load_image(path)) };
    if surface.is_null() {
        let err = RenderError::ImageLoad {
            path: path.to_path_buf(),
            message: platform.last_error(),
        };
        tracing::error!("{}", err);
        return Err(err);
    }

    tracing::debug!(path = %path.display(), "loaded surface");
    Ok(surface)
}

/// Load an image file into a texture for `renderer`, optionally keying out
/// `color_key`. The texture is clipped to the full image.
pub fn load_texture<P, R, O>(
    platform: &P,
    renderer: &Managed<P::Canvas, R>,
    path: impl AsRef<Path>,
    color_key: Option<Color>,
) -> RenderResult<Texture<P::Texture, O>>
where
    P: Platform,
    R: Ownership,
    O: Ownership,
{
    let path = path.as_ref();
    let canvas = live(renderer, "renderer")?;
    let surface = load_surface(platform, path)?;
    let Some(surface_ptr) = surface.as_non_null() else {
        return Err(RenderError::EmptyHandle { kind: "surface" });
    };

    if let Some(key) = color_key {
        // SAFETY: `surface` keeps the pointer live.
        if !unsafe { platform.set_color_key(surface_ptr, key) } {
            let err = RenderError::ColorKey {
                path: path.to_path_buf(),
                message: platform.last_error(),
            };
            tracing::error!("{}", err);
            return Err(err);
        }
    }

    // SAFETY: both handles keep their pointers live; the new texture has no
    // owner yet.
    let texture = unsafe {
        Texture::from_raw(
            platform.create_texture_from_surface(canvas, surface_ptr),
            None,
        )
    };
    if texture.is_null() {
        let err = RenderError::TextureCreation {
            origin: path.display().to_string(),
            message: platform.last_error(),
        };
        tracing::error!("{}", err);
        return Err(err);
    }

    tracing::debug!(path = %path.display(), size = ?texture.base_size(), "loaded texture");
    Ok(texture)
}

/// Open a font file at `point_size`.
pub fn load_font<P: Platform>(
    platform: &P,
    path: impl AsRef<Path>,
    point_size: u16,
) -> RenderResult<Font<P::Font>> {
    let path = path.as_ref();
    // SAFETY: the pointer was just created by the platform and has no owner.
    let font: Font<P::Font> = unsafe { Managed::from_raw(platform.open_font(path, point_size)) };
    if font.is_null() {
        let err = RenderError::FontLoad {
            path: path.to_path_buf(),
            message: platform.last_error(),
        };
        tracing::error!("{}", err);
        return Err(err);
    }

    tracing::debug!(path = %path.display(), point_size, "loaded font");
    Ok(font)
}

/// Rasterize `text` with `font` into a texture for `renderer`.
pub fn render_text<P, R, F, O>(
    platform: &P,
    renderer: &Managed<P::Canvas, R>,
    font: &Managed<P::Font, F>,
    text: &str,
    color: Color,
) -> RenderResult<Texture<P::Texture, O>>
where
    P: Platform,
    R: Ownership,
    F: Ownership,
    O: Ownership,
{
    let canvas = live(renderer, "renderer")?;
    let font = live(font, "font")?;

    // SAFETY: `font` is held live by the caller's handle; the surface has no
    // owner yet.
    let surface: Surface<P::Surface> =
        unsafe { Managed::from_raw(platform.render_text(font, text, color)) };
    let Some(surface_ptr) = surface.as_non_null() else {
        let err = RenderError::TextRender {
            text: text.to_string(),
            message: platform.last_error(),
        };
        tracing::error!("{}", err);
        return Err(err);
    };

    // SAFETY: both handles keep their pointers live; the new texture has no
    // owner yet.
    let texture = unsafe {
        Texture::from_raw(
            platform.create_texture_from_surface(canvas, surface_ptr),
            None,
        )
    };
    if texture.is_null() {
        let err = RenderError::TextureCreation {
            origin: format!("text {:?}", text),
            message: platform.last_error(),
        };
        tracing::error!("{}", err);
        return Err(err);
    }

    Ok(texture)
}

fn live<T, O>(handle: &Managed<T, O>, kind: &'static str) -> RenderResult<NonNull<T>>
where
    T: tether_handle::NativeResource,
    O: Ownership,
{
    handle.as_non_null().ok_or_else(|| {
        tracing::error!("{} handle is empty", kind);
        RenderError::EmptyHandle { kind }
    })
}
