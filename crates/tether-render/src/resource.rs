//! Platform capabilities the typed handles forward to.
//!
//! Every function takes a pointer that a live handle currently holds. The
//! handle layer never calls these with a released or null pointer.

use std::ptr::NonNull;

use tether_core::geometry::{Pos, Rect, Size};
use tether_handle::NativeResource;

use crate::{BlendMode, Color, Orientation};

/// A native object with a queryable pixel extent.
pub trait Extent: NativeResource {
    /// # Safety
    ///
    /// `ptr` must be live.
    unsafe fn query_size(ptr: NonNull<Self>) -> Size;
}

/// One texture copy onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopyRequest {
    pub src: Rect,
    pub dst: Rect,
    pub orientation: Orientation,
}

/// A GPU texture that can be modulated and copied onto its canvas type.
pub trait TextureResource: Extent {
    /// The renderer this texture is drawn with.
    type Canvas: CanvasResource;

    /// # Safety
    ///
    /// `ptr` must be live.
    unsafe fn set_color_mod(ptr: NonNull<Self>, color: Color);

    /// # Safety
    ///
    /// `ptr` must be live.
    unsafe fn set_blend_mode(ptr: NonNull<Self>, mode: BlendMode);

    /// # Safety
    ///
    /// `ptr` must be live.
    unsafe fn set_alpha_mod(ptr: NonNull<Self>, alpha: u8);

    /// # Safety
    ///
    /// Both pointers must be live and `texture` must belong to `canvas`.
    unsafe fn copy(canvas: NonNull<Self::Canvas>, texture: NonNull<Self>, request: &CopyRequest);
}

/// A render target with immediate-mode primitives.
///
/// # Safety
///
/// Every function requires `ptr` to be live.
pub trait CanvasResource: NativeResource {
    unsafe fn set_draw_color(ptr: NonNull<Self>, color: Color);
    unsafe fn clear(ptr: NonNull<Self>);
    unsafe fn present(ptr: NonNull<Self>);
    unsafe fn fill_rect(ptr: NonNull<Self>, rect: Rect);
    unsafe fn draw_rect(ptr: NonNull<Self>, rect: Rect);
    unsafe fn draw_line(ptr: NonNull<Self>, from: Pos, to: Pos);
    unsafe fn draw_point(ptr: NonNull<Self>, point: Pos);
    unsafe fn output_size(ptr: NonNull<Self>) -> Size;
}

/// A CPU-side pixel buffer.
pub trait SurfaceResource: Extent {}

/// An OS window.
pub trait WindowResource: Extent {}

/// A loaded font face. Fonts are only ever passed back to the platform.
pub trait FontResource: NativeResource {}
