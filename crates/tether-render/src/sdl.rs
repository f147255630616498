//! SDL2 backend: resource impls for the `sdl2::sys` types and an
//! [`SdlPlatform`] that owns the SDL, SDL_image and SDL_ttf subsystems.
//!
//! Each native type is wrapped in a `#[repr(transparent)]` newtype so the
//! handle traits can be implemented for it. Convert with `.cast()` when
//! passing pointers to or from raw `sdl2::sys` calls.

use std::ffi::{CStr, CString, c_int};
use std::path::Path;
use std::ptr::{self, NonNull};

use sdl2::sys;
use tether_core::config::WindowConfig;
use tether_core::geometry::{Pos, Rect, Size};
use tether_handle::{Managed, NativeResource, Ownership};

use crate::error::{RenderError, RenderResult};
use crate::handles::{Renderer, Window};
use crate::loader::Platform;
use crate::resource::{
    CanvasResource, CopyRequest, Extent, FontResource, SurfaceResource, TextureResource,
    WindowResource,
};
use crate::{BlendMode, Color, Flip};

const WINDOWPOS_UNDEFINED: c_int = 0x1FFF_0000;
const IMG_INIT_PNG: c_int = 0x0000_0002;

/// `SDL_Texture`
#[repr(transparent)]
pub struct SdlTexture(sys::SDL_Texture);

/// `SDL_Renderer`
#[repr(transparent)]
pub struct SdlRenderer(sys::SDL_Renderer);

/// `SDL_Window`
#[repr(transparent)]
pub struct SdlWindow(sys::SDL_Window);

/// `SDL_Surface`
#[repr(transparent)]
pub struct SdlSurface(sys::SDL_Surface);

/// `TTF_Font`
#[repr(transparent)]
pub struct SdlFont(sys::ttf::TTF_Font);

fn sdl_rect(rect: Rect) -> sys::SDL_Rect {
    sys::SDL_Rect {
        x: rect.x,
        y: rect.y,
        w: rect.width,
        h: rect.height,
    }
}

fn sdl_color(color: Color) -> sys::SDL_Color {
    sys::SDL_Color {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

/// The platform's last error message.
pub fn last_error() -> String {
    // SAFETY: SDL_GetError always returns a valid NUL-terminated string.
    unsafe { CStr::from_ptr(sys::SDL_GetError()) }
        .to_string_lossy()
        .into_owned()
}

fn set_error(message: &CStr) {
    // SAFETY: both arguments are NUL-terminated and `%s` consumes one string.
    unsafe { sys::SDL_SetError(c"%s".as_ptr(), message.as_ptr()) };
}

fn to_c_string(text: &str) -> Option<CString> {
    let converted = CString::new(text).ok();
    if converted.is_none() {
        set_error(c"string contains an interior NUL byte");
    }
    converted
}

impl NativeResource for SdlTexture {
    const KIND: &'static str = "texture";

    unsafe fn release(ptr: NonNull<Self>) {
        unsafe { sys::SDL_DestroyTexture(ptr.as_ptr().cast()) }
    }
}

impl Extent for SdlTexture {
    unsafe fn query_size(ptr: NonNull<Self>) -> Size {
        let (mut w, mut h) = (0, 0);
        unsafe {
            sys::SDL_QueryTexture(
                ptr.as_ptr().cast(),
                ptr::null_mut(),
                ptr::null_mut(),
                &mut w,
                &mut h,
            )
        };
        Size::new(w, h)
    }
}

impl TextureResource for SdlTexture {
    type Canvas = SdlRenderer;

    unsafe fn set_color_mod(ptr: NonNull<Self>, color: Color) {
        unsafe { sys::SDL_SetTextureColorMod(ptr.as_ptr().cast(), color.r, color.g, color.b) };
    }

    unsafe fn set_blend_mode(ptr: NonNull<Self>, mode: BlendMode) {
        let mode = match mode {
            BlendMode::None => sys::SDL_BlendMode::SDL_BLENDMODE_NONE,
            BlendMode::Blend => sys::SDL_BlendMode::SDL_BLENDMODE_BLEND,
            BlendMode::Add => sys::SDL_BlendMode::SDL_BLENDMODE_ADD,
            BlendMode::Mod => sys::SDL_BlendMode::SDL_BLENDMODE_MOD,
        };
        unsafe { sys::SDL_SetTextureBlendMode(ptr.as_ptr().cast(), mode) };
    }

    unsafe fn set_alpha_mod(ptr: NonNull<Self>, alpha: u8) {
        unsafe { sys::SDL_SetTextureAlphaMod(ptr.as_ptr().cast(), alpha) };
    }

    unsafe fn copy(canvas: NonNull<SdlRenderer>, texture: NonNull<Self>, request: &CopyRequest) {
        let src = sdl_rect(request.src);
        let dst = sdl_rect(request.dst);
        let center = request
            .orientation
            .center
            .map(|Pos { x, y }| sys::SDL_Point { x, y });
        let center_ptr = center
            .as_ref()
            .map_or(ptr::null(), |center| center as *const sys::SDL_Point);

        // No combined flip in SDL; mirroring both axes is a half turn.
        let mut angle = request.orientation.angle;
        let flip = request.orientation.flip;
        let flip = if flip.contains(Flip::HORIZONTAL | Flip::VERTICAL) {
            angle += 180.0;
            sys::SDL_RendererFlip::SDL_FLIP_NONE
        } else if flip.contains(Flip::HORIZONTAL) {
            sys::SDL_RendererFlip::SDL_FLIP_HORIZONTAL
        } else if flip.contains(Flip::VERTICAL) {
            sys::SDL_RendererFlip::SDL_FLIP_VERTICAL
        } else {
            sys::SDL_RendererFlip::SDL_FLIP_NONE
        };

        let status = unsafe {
            sys::SDL_RenderCopyEx(
                canvas.as_ptr().cast(),
                texture.as_ptr().cast(),
                &src,
                &dst,
                angle,
                center_ptr,
                flip,
            )
        };
        if status != 0 {
            tracing::warn!("SDL_RenderCopyEx failed: {}", last_error());
        }
    }
}

impl NativeResource for SdlRenderer {
    const KIND: &'static str = "renderer";

    unsafe fn release(ptr: NonNull<Self>) {
        unsafe { sys::SDL_DestroyRenderer(ptr.as_ptr().cast()) }
    }
}

impl CanvasResource for SdlRenderer {
    unsafe fn set_draw_color(ptr: NonNull<Self>, color: Color) {
        unsafe {
            sys::SDL_SetRenderDrawColor(ptr.as_ptr().cast(), color.r, color.g, color.b, color.a)
        };
    }

    unsafe fn clear(ptr: NonNull<Self>) {
        unsafe { sys::SDL_RenderClear(ptr.as_ptr().cast()) };
    }

    unsafe fn present(ptr: NonNull<Self>) {
        unsafe { sys::SDL_RenderPresent(ptr.as_ptr().cast()) };
    }

    unsafe fn fill_rect(ptr: NonNull<Self>, rect: Rect) {
        let rect = sdl_rect(rect);
        unsafe { sys::SDL_RenderFillRect(ptr.as_ptr().cast(), &rect) };
    }

    unsafe fn draw_rect(ptr: NonNull<Self>, rect: Rect) {
        let rect = sdl_rect(rect);
        unsafe { sys::SDL_RenderDrawRect(ptr.as_ptr().cast(), &rect) };
    }

    unsafe fn draw_line(ptr: NonNull<Self>, from: Pos, to: Pos) {
        unsafe { sys::SDL_RenderDrawLine(ptr.as_ptr().cast(), from.x, from.y, to.x, to.y) };
    }

    unsafe fn draw_point(ptr: NonNull<Self>, point: Pos) {
        unsafe { sys::SDL_RenderDrawPoint(ptr.as_ptr().cast(), point.x, point.y) };
    }

    unsafe fn output_size(ptr: NonNull<Self>) -> Size {
        let (mut w, mut h) = (0, 0);
        unsafe { sys::SDL_GetRendererOutputSize(ptr.as_ptr().cast(), &mut w, &mut h) };
        Size::new(w, h)
    }
}

impl NativeResource for SdlWindow {
    const KIND: &'static str = "window";

    unsafe fn release(ptr: NonNull<Self>) {
        unsafe { sys::SDL_DestroyWindow(ptr.as_ptr().cast()) }
    }
}

impl Extent for SdlWindow {
    unsafe fn query_size(ptr: NonNull<Self>) -> Size {
        let (mut w, mut h) = (0, 0);
        unsafe { sys::SDL_GetWindowSize(ptr.as_ptr().cast(), &mut w, &mut h) };
        Size::new(w, h)
    }
}

impl WindowResource for SdlWindow {}

impl NativeResource for SdlSurface {
    const KIND: &'static str = "surface";

    unsafe fn release(ptr: NonNull<Self>) {
        unsafe { sys::SDL_FreeSurface(ptr.as_ptr().cast()) }
    }
}

impl Extent for SdlSurface {
    unsafe fn query_size(ptr: NonNull<Self>) -> Size {
        let surface = unsafe { &ptr.as_ref().0 };
        Size::new(surface.w, surface.h)
    }
}

impl SurfaceResource for SdlSurface {}

impl NativeResource for SdlFont {
    const KIND: &'static str = "font";

    unsafe fn release(ptr: NonNull<Self>) {
        unsafe { sys::ttf::TTF_CloseFont(ptr.as_ptr().cast()) }
    }
}

impl FontResource for SdlFont {}

/// SDL with video, PNG loading and TrueType fonts initialized.
///
/// Only one should exist at a time. Dropping it shuts the subsystems down, so
/// every handle created through it must be dropped first.
#[derive(Debug)]
pub struct SdlPlatform {
    _not_send: std::marker::PhantomData<*mut ()>,
}

impl SdlPlatform {
    pub fn init() -> RenderResult<Self> {
        // SAFETY: plain initialization calls; each failure is checked.
        unsafe {
            if sys::SDL_Init(sys::SDL_INIT_VIDEO) < 0 {
                return Err(init_error("SDL"));
            }
            if sys::image::IMG_Init(IMG_INIT_PNG) & IMG_INIT_PNG == 0 {
                let err = init_error("SDL_image");
                sys::SDL_Quit();
                return Err(err);
            }
            if sys::ttf::TTF_Init() == -1 {
                let err = init_error("SDL_ttf");
                sys::image::IMG_Quit();
                sys::SDL_Quit();
                return Err(err);
            }
        }

        tracing::info!("SDL platform initialized");
        Ok(Self {
            _not_send: std::marker::PhantomData,
        })
    }

    /// Create a shown window from `config`.
    pub fn create_window(&self, config: &WindowConfig) -> RenderResult<Window<SdlWindow>> {
        let Some(title) = to_c_string(&config.title) else {
            return Err(creation_error("window"));
        };
        // SAFETY: `title` is NUL-terminated; the new window has no owner yet.
        let window: Window<SdlWindow> = unsafe {
            Managed::from_raw(
                sys::SDL_CreateWindow(
                    title.as_ptr(),
                    WINDOWPOS_UNDEFINED,
                    WINDOWPOS_UNDEFINED,
                    config.size.width as c_int,
                    config.size.height as c_int,
                    sys::SDL_WindowFlags::SDL_WINDOW_SHOWN as u32,
                )
                .cast(),
            )
        };
        if window.is_null() {
            return Err(creation_error("window"));
        }
        Ok(window)
    }

    /// Create an accelerated renderer for `window`.
    pub fn create_renderer<O: Ownership>(
        &self,
        window: &Managed<SdlWindow, O>,
        vsync: bool,
    ) -> RenderResult<Renderer<SdlRenderer>> {
        let Some(window) = window.as_non_null() else {
            return Err(RenderError::EmptyHandle { kind: "window" });
        };
        let mut flags = sys::SDL_RendererFlags::SDL_RENDERER_ACCELERATED as u32;
        if vsync {
            flags |= sys::SDL_RendererFlags::SDL_RENDERER_PRESENTVSYNC as u32;
        }
        // SAFETY: the caller's handle keeps `window` live; the renderer has no
        // owner yet.
        let renderer: Renderer<SdlRenderer> = unsafe {
            Managed::from_raw(sys::SDL_CreateRenderer(window.as_ptr().cast(), -1, flags).cast())
        };
        if renderer.is_null() {
            return Err(creation_error("renderer"));
        }
        Ok(renderer)
    }

    /// Milliseconds since SDL was initialized.
    pub fn ticks(&self) -> u32 {
        // SAFETY: no preconditions.
        unsafe { sys::SDL_GetTicks() }
    }
}

impl Drop for SdlPlatform {
    fn drop(&mut self) {
        tracing::info!("shutting down SDL platform");
        // SAFETY: the subsystems were started in `init`.
        unsafe {
            sys::ttf::TTF_Quit();
            sys::image::IMG_Quit();
            sys::SDL_Quit();
        }
    }
}

impl Platform for SdlPlatform {
    type Canvas = SdlRenderer;
    type Texture = SdlTexture;
    type Surface = SdlSurface;
    type Font = SdlFont;

    fn load_image(&self, path: &Path) -> *mut SdlSurface {
        let Some(path) = to_c_string(&path.to_string_lossy()) else {
            return ptr::null_mut();
        };
        // SAFETY: `path` is NUL-terminated.
        unsafe { sys::image::IMG_Load(path.as_ptr()).cast() }
    }

    unsafe fn set_color_key(&self, surface: NonNull<SdlSurface>, key: Color) -> bool {
        let surface: *mut sys::SDL_Surface = surface.as_ptr().cast();
        unsafe {
            let key = sys::SDL_MapRGB((*surface).format, key.r, key.g, key.b);
            sys::SDL_SetColorKey(surface, 1, key) == 0
        }
    }

    unsafe fn create_texture_from_surface(
        &self,
        canvas: NonNull<SdlRenderer>,
        surface: NonNull<SdlSurface>,
    ) -> *mut SdlTexture {
        unsafe {
            sys::SDL_CreateTextureFromSurface(canvas.as_ptr().cast(), surface.as_ptr().cast())
                .cast()
        }
    }

    fn open_font(&self, path: &Path, point_size: u16) -> *mut SdlFont {
        let Some(path) = to_c_string(&path.to_string_lossy()) else {
            return ptr::null_mut();
        };
        // SAFETY: `path` is NUL-terminated.
        unsafe { sys::ttf::TTF_OpenFont(path.as_ptr(), c_int::from(point_size)).cast() }
    }

    unsafe fn render_text(&self, font: NonNull<SdlFont>, text: &str, color: Color) -> *mut SdlSurface {
        let Some(text) = to_c_string(text) else {
            return ptr::null_mut();
        };
        unsafe {
            sys::ttf::TTF_RenderUTF8_Solid(font.as_ptr().cast(), text.as_ptr(), sdl_color(color))
                .cast()
        }
    }

    fn last_error(&self) -> String {
        last_error()
    }
}

fn init_error(subsystem: &'static str) -> RenderError {
    let err = RenderError::Init {
        subsystem,
        message: last_error(),
    };
    tracing::error!("{}", err);
    err
}

fn creation_error(kind: &'static str) -> RenderError {
    let err = RenderError::Creation {
        kind,
        message: last_error(),
    };
    tracing::error!("{}", err);
    err
}
