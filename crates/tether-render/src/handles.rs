//! Handle aliases and accessors for renderers, windows, surfaces and fonts.

use tether_core::geometry::{Pos, Rect, Size};
use tether_handle::{Managed, Ownership, Unique};

use crate::Color;
use crate::resource::{CanvasResource, Extent};

pub type Renderer<R, O = Unique> = Managed<R, O>;
pub type Window<W, O = Unique> = Managed<W, O>;
pub type Surface<S, O = Unique> = Managed<S, O>;
pub type Font<F, O = Unique> = Managed<F, O>;

/// Drawing primitives on a renderer handle.
///
/// Calls on an empty handle do nothing; [`output_size`](Self::output_size)
/// reports zero.
pub trait RendererExt {
    fn set_draw_color(&self, color: Color) -> &Self;
    fn clear(&self);
    fn present(&self);
    fn fill_rect(&self, rect: Rect);
    fn draw_rect(&self, rect: Rect);
    fn draw_line(&self, from: Pos, to: Pos);
    fn draw_point(&self, point: Pos);
    fn output_size(&self) -> Size;
}

impl<R: CanvasResource, O: Ownership> RendererExt for Managed<R, O> {
    fn set_draw_color(&self, color: Color) -> &Self {
        if let Some(ptr) = self.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { R::set_draw_color(ptr, color) };
        }
        self
    }

    fn clear(&self) {
        if let Some(ptr) = self.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { R::clear(ptr) };
        }
    }

    fn present(&self) {
        if let Some(ptr) = self.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { R::present(ptr) };
        }
    }

    fn fill_rect(&self, rect: Rect) {
        if let Some(ptr) = self.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { R::fill_rect(ptr, rect) };
        }
    }

    fn draw_rect(&self, rect: Rect) {
        if let Some(ptr) = self.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { R::draw_rect(ptr, rect) };
        }
    }

    fn draw_line(&self, from: Pos, to: Pos) {
        if let Some(ptr) = self.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { R::draw_line(ptr, from, to) };
        }
    }

    fn draw_point(&self, point: Pos) {
        if let Some(ptr) = self.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            unsafe { R::draw_point(ptr, point) };
        }
    }

    fn output_size(&self) -> Size {
        match self.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            Some(ptr) => unsafe { R::output_size(ptr) },
            None => Size::default(),
        }
    }
}

/// Pixel extent of a window, surface or texture handle.
pub trait ExtentExt {
    /// Zero for an empty handle.
    fn size(&self) -> Size;
}

impl<T: Extent, O: Ownership> ExtentExt for Managed<T, O> {
    fn size(&self) -> Size {
        match self.as_non_null() {
            // SAFETY: the handle keeps `ptr` live.
            Some(ptr) => unsafe { T::query_size(ptr) },
            None => Size::default(),
        }
    }
}
