//! Mock platform that records operations instead of touching a real device.

use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::sync::Arc;

use parking_lot::Mutex;
use tether_audio::{AudioPlatform, ChunkResource, MusicResource, MusicState, Repeat};
use tether_core::alloc::{HashMap, HashSet};
use tether_core::geometry::{Pos, Rect, Size};
use tether_handle::{Managed, NativeResource, Ownership};
use tether_render::resource::{
    CanvasResource, CopyRequest, Extent, FontResource, SurfaceResource, TextureResource,
    WindowResource,
};
use tether_render::{BlendMode, Color, Orientation, Platform};

/// Records a platform call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Release {
        kind: &'static str,
        id: usize,
    },
    LoadImage {
        path: PathBuf,
    },
    SetColorKey {
        surface: usize,
        key: Color,
    },
    CreateTexture {
        surface: usize,
        texture: usize,
    },
    OpenFont {
        path: PathBuf,
        point_size: u16,
    },
    RenderText {
        font: usize,
        text: String,
    },
    SetColorMod {
        texture: usize,
        color: Color,
    },
    SetBlendMode {
        texture: usize,
        mode: BlendMode,
    },
    SetAlphaMod {
        texture: usize,
        alpha: u8,
    },
    Copy {
        canvas: usize,
        texture: usize,
        src: Rect,
        dst: Rect,
        orientation: Orientation,
    },
    SetDrawColor {
        canvas: usize,
        color: Color,
    },
    Clear {
        canvas: usize,
    },
    Present {
        canvas: usize,
    },
    FillRect {
        canvas: usize,
        rect: Rect,
    },
    DrawRect {
        canvas: usize,
        rect: Rect,
    },
    DrawLine {
        canvas: usize,
        from: Pos,
        to: Pos,
    },
    DrawPoint {
        canvas: usize,
        point: Pos,
    },
    LoadChunk {
        path: PathBuf,
    },
    LoadMusic {
        path: PathBuf,
    },
    PlayChunk {
        chunk: usize,
        channel: i32,
        repeat: Repeat,
    },
    PlayMusic {
        music: usize,
        repeat: Repeat,
    },
    PauseMusic,
    ResumeMusic,
    HaltMusic,
}

type CallLog = Arc<Mutex<Vec<PlatformCall>>>;

/// State shared by every mock resource created from one platform.
#[derive(Debug, Clone)]
struct Recorder {
    calls: CallLog,
}

impl Recorder {
    fn push(&self, call: PlatformCall) {
        self.calls.lock().push(call);
    }
}

macro_rules! mock_resource {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            id: usize,
            size: Size,
            recorder: Recorder,
        }

        impl NativeResource for $name {
            const KIND: &'static str = $kind;

            unsafe fn release(ptr: NonNull<Self>) {
                // SAFETY: mock resources are created with `Box::into_raw`.
                let resource = unsafe { Box::from_raw(ptr.as_ptr()) };
                resource.recorder.push(PlatformCall::Release {
                    kind: $kind,
                    id: resource.id,
                });
            }
        }

        impl MockResource for $name {
            fn id(&self) -> usize {
                self.id
            }
        }
    };
}

/// Common view of the mock resource types.
pub trait MockResource: NativeResource {
    /// Identifier assigned by the platform, unique per platform.
    fn id(&self) -> usize;
}

mock_resource!(
    /// Mock texture with a fixed extent.
    MockTexture,
    "texture"
);
mock_resource!(
    /// Mock render target.
    MockRenderer,
    "renderer"
);
mock_resource!(MockWindow, "window");
mock_resource!(MockSurface, "surface");
mock_resource!(
    /// Mock font; its point size is stored as the height of `size`.
    MockFont,
    "font"
);
mock_resource!(MockChunk, "chunk");
mock_resource!(MockMusic, "music");

fn deref<'a, T>(ptr: NonNull<T>) -> &'a T {
    // SAFETY: every trait entry point requires a live pointer, and mock
    // resources are only freed through `release`.
    unsafe { ptr.as_ref() }
}

impl Extent for MockTexture {
    unsafe fn query_size(ptr: NonNull<Self>) -> Size {
        deref(ptr).size
    }
}

impl TextureResource for MockTexture {
    type Canvas = MockRenderer;

    unsafe fn set_color_mod(ptr: NonNull<Self>, color: Color) {
        let texture = deref(ptr);
        texture.recorder.push(PlatformCall::SetColorMod {
            texture: texture.id,
            color,
        });
    }

    unsafe fn set_blend_mode(ptr: NonNull<Self>, mode: BlendMode) {
        let texture = deref(ptr);
        texture.recorder.push(PlatformCall::SetBlendMode {
            texture: texture.id,
            mode,
        });
    }

    unsafe fn set_alpha_mod(ptr: NonNull<Self>, alpha: u8) {
        let texture = deref(ptr);
        texture.recorder.push(PlatformCall::SetAlphaMod {
            texture: texture.id,
            alpha,
        });
    }

    unsafe fn copy(canvas: NonNull<MockRenderer>, texture: NonNull<Self>, request: &CopyRequest) {
        let canvas = deref(canvas);
        canvas.recorder.push(PlatformCall::Copy {
            canvas: canvas.id,
            texture: deref(texture).id,
            src: request.src,
            dst: request.dst,
            orientation: request.orientation,
        });
    }
}

impl CanvasResource for MockRenderer {
    unsafe fn set_draw_color(ptr: NonNull<Self>, color: Color) {
        let canvas = deref(ptr);
        canvas.recorder.push(PlatformCall::SetDrawColor {
            canvas: canvas.id,
            color,
        });
    }

    unsafe fn clear(ptr: NonNull<Self>) {
        let canvas = deref(ptr);
        canvas.recorder.push(PlatformCall::Clear { canvas: canvas.id });
    }

    unsafe fn present(ptr: NonNull<Self>) {
        let canvas = deref(ptr);
        canvas.recorder.push(PlatformCall::Present { canvas: canvas.id });
    }

    unsafe fn fill_rect(ptr: NonNull<Self>, rect: Rect) {
        let canvas = deref(ptr);
        canvas.recorder.push(PlatformCall::FillRect {
            canvas: canvas.id,
            rect,
        });
    }

    unsafe fn draw_rect(ptr: NonNull<Self>, rect: Rect) {
        let canvas = deref(ptr);
        canvas.recorder.push(PlatformCall::DrawRect {
            canvas: canvas.id,
            rect,
        });
    }

    unsafe fn draw_line(ptr: NonNull<Self>, from: Pos, to: Pos) {
        let canvas = deref(ptr);
        canvas.recorder.push(PlatformCall::DrawLine {
            canvas: canvas.id,
            from,
            to,
        });
    }

    unsafe fn draw_point(ptr: NonNull<Self>, point: Pos) {
        let canvas = deref(ptr);
        canvas.recorder.push(PlatformCall::DrawPoint {
            canvas: canvas.id,
            point,
        });
    }

    unsafe fn output_size(ptr: NonNull<Self>) -> Size {
        deref(ptr).size
    }
}

impl Extent for MockWindow {
    unsafe fn query_size(ptr: NonNull<Self>) -> Size {
        deref(ptr).size
    }
}

impl WindowResource for MockWindow {}

impl Extent for MockSurface {
    unsafe fn query_size(ptr: NonNull<Self>) -> Size {
        deref(ptr).size
    }
}

impl SurfaceResource for MockSurface {}

impl FontResource for MockFont {}

impl ChunkResource for MockChunk {}

impl MusicResource for MockMusic {}

/// Failure switches for exercising error paths.
#[derive(Debug, Default, Clone, Copy)]
struct Failures {
    texture_creation: bool,
    color_key: bool,
    text: bool,
    playback: bool,
}

/// In-memory platform for tests.
///
/// Files are registered up front with [`add_image`](Self::add_image),
/// [`add_font`](Self::add_font) and friends; loading anything else fails with
/// a "file not found" error like the real platform would.
#[derive(Debug)]
pub struct MockPlatform {
    recorder: Recorder,
    /// Registered image files and their pixel extents
    images: Mutex<HashMap<PathBuf, Size>>,
    fonts: Mutex<HashSet<PathBuf>>,
    sounds: Mutex<HashSet<PathBuf>>,
    next_id: Mutex<usize>,
    last_error: Mutex<String>,
    failures: Mutex<Failures>,
    music: Mutex<MusicState>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            recorder: Recorder {
                calls: Arc::new(Mutex::new(Vec::new())),
            },
            images: Mutex::new(HashMap::default()),
            fonts: Mutex::new(HashSet::default()),
            sounds: Mutex::new(HashSet::default()),
            next_id: Mutex::new(1),
            last_error: Mutex::new(String::new()),
            failures: Mutex::new(Failures::default()),
            music: Mutex::new(MusicState::Stopped),
        }
    }

    fn next_id(&self) -> usize {
        let mut id = self.next_id.lock();
        let current = *id;
        *id += 1;
        current
    }

    fn fail(&self, message: impl Into<String>) {
        *self.last_error.lock() = message.into();
    }

    /// Register an image file with its extent.
    pub fn add_image(&self, path: impl Into<PathBuf>, width: i32, height: i32) {
        self.images
            .lock()
            .insert(path.into(), Size::new(width, height));
    }

    pub fn add_font(&self, path: impl Into<PathBuf>) {
        self.fonts.lock().insert(path.into());
    }

    /// Register a sound file, loadable as a chunk or as music.
    pub fn add_sound(&self, path: impl Into<PathBuf>) {
        self.sounds.lock().insert(path.into());
    }

    pub fn fail_texture_creation(&self, fail: bool) {
        self.failures.lock().texture_creation = fail;
    }

    pub fn fail_color_key(&self, fail: bool) {
        self.failures.lock().color_key = fail;
    }

    pub fn fail_text(&self, fail: bool) {
        self.failures.lock().text = fail;
    }

    pub fn fail_playback(&self, fail: bool) {
        self.failures.lock().playback = fail;
    }

    fn boxed<T>(&self, make: impl FnOnce(usize, Recorder) -> T) -> *mut T {
        Box::into_raw(Box::new(make(self.next_id(), self.recorder.clone())))
    }

    /// A fresh raw texture. The caller owns it.
    pub fn texture(&self, width: i32, height: i32) -> *mut MockTexture {
        self.boxed(|id, recorder| MockTexture {
            id,
            size: Size::new(width, height),
            recorder,
        })
    }

    /// A fresh raw renderer with the given output size. The caller owns it.
    pub fn renderer(&self, width: i32, height: i32) -> *mut MockRenderer {
        self.boxed(|id, recorder| MockRenderer {
            id,
            size: Size::new(width, height),
            recorder,
        })
    }

    pub fn window(&self, width: i32, height: i32) -> *mut MockWindow {
        self.boxed(|id, recorder| MockWindow {
            id,
            size: Size::new(width, height),
            recorder,
        })
    }

    pub fn surface(&self, width: i32, height: i32) -> *mut MockSurface {
        self.boxed(|id, recorder| MockSurface {
            id,
            size: Size::new(width, height),
            recorder,
        })
    }

    pub fn chunk(&self) -> *mut MockChunk {
        self.boxed(|id, recorder| MockChunk {
            id,
            size: Size::default(),
            recorder,
        })
    }

    pub fn music(&self) -> *mut MockMusic {
        self.boxed(|id, recorder| MockMusic {
            id,
            size: Size::default(),
            recorder,
        })
    }

    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.recorder.calls.lock().clone()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.recorder.calls.lock().clear();
    }

    pub fn call_count(&self) -> usize {
        self.recorder.calls.lock().len()
    }

    /// Count releases of one resource kind.
    pub fn count_releases(&self, kind: &str) -> usize {
        self.recorder
            .calls
            .lock()
            .iter()
            .filter(|call| matches!(call, PlatformCall::Release { kind: k, .. } if *k == kind))
            .count()
    }

    /// How many times the resource `id` was released.
    pub fn releases_of(&self, id: usize) -> usize {
        self.recorder
            .calls
            .lock()
            .iter()
            .filter(|call| matches!(call, PlatformCall::Release { id: i, .. } if *i == id))
            .count()
    }

    pub fn count_copies(&self) -> usize {
        self.recorder
            .calls
            .lock()
            .iter()
            .filter(|call| matches!(call, PlatformCall::Copy { .. }))
            .count()
    }

    /// Recorded copies as `(texture, src, dst)`.
    pub fn copies(&self) -> Vec<(usize, Rect, Rect)> {
        self.recorder
            .calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                PlatformCall::Copy {
                    texture, src, dst, ..
                } => Some((*texture, *src, *dst)),
                _ => None,
            })
            .collect()
    }

    /// The most recent copy, with its orientation.
    pub fn last_copy(&self) -> Option<PlatformCall> {
        self.recorder
            .calls
            .lock()
            .iter()
            .rev()
            .find(|call| matches!(call, PlatformCall::Copy { .. }))
            .cloned()
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform id of the resource a handle holds, `None` when empty.
pub fn mock_id<T: MockResource, O: Ownership>(handle: &Managed<T, O>) -> Option<usize> {
    handle.as_non_null().map(|ptr| deref(ptr).id())
}

impl Platform for MockPlatform {
    type Canvas = MockRenderer;
    type Texture = MockTexture;
    type Surface = MockSurface;
    type Font = MockFont;

    fn load_image(&self, path: &Path) -> *mut MockSurface {
        self.recorder.push(PlatformCall::LoadImage {
            path: path.to_path_buf(),
        });
        let size = self.images.lock().get(path).copied();
        match size {
            Some(size) => self.surface(size.width, size.height),
            None => {
                self.fail(format!("Couldn't open {}", path.display()));
                std::ptr::null_mut()
            }
        }
    }

    unsafe fn set_color_key(&self, surface: NonNull<MockSurface>, key: Color) -> bool {
        self.recorder.push(PlatformCall::SetColorKey {
            surface: deref(surface).id,
            key,
        });
        if self.failures.lock().color_key {
            self.fail("Surface doesn't have a colorkey");
            return false;
        }
        true
    }

    unsafe fn create_texture_from_surface(
        &self,
        _canvas: NonNull<MockRenderer>,
        surface: NonNull<MockSurface>,
    ) -> *mut MockTexture {
        if self.failures.lock().texture_creation {
            self.fail("Texture dimensions are limited to 0x0");
            return std::ptr::null_mut();
        }
        let surface = deref(surface);
        let texture = self.boxed(|id, recorder| MockTexture {
            id,
            size: surface.size,
            recorder,
        });
        self.recorder.push(PlatformCall::CreateTexture {
            surface: surface.id,
            // SAFETY: `boxed` never returns null.
            texture: unsafe { (*texture).id },
        });
        texture
    }

    fn open_font(&self, path: &Path, point_size: u16) -> *mut MockFont {
        self.recorder.push(PlatformCall::OpenFont {
            path: path.to_path_buf(),
            point_size,
        });
        if !self.fonts.lock().contains(path) {
            self.fail(format!("Couldn't open {}", path.display()));
            return std::ptr::null_mut();
        }
        self.boxed(|id, recorder| MockFont {
            id,
            size: Size::new(0, i32::from(point_size)),
            recorder,
        })
    }

    unsafe fn render_text(&self, font: NonNull<MockFont>, text: &str, _color: Color) -> *mut MockSurface {
        let font = deref(font);
        self.recorder.push(PlatformCall::RenderText {
            font: font.id,
            text: text.to_string(),
        });
        if self.failures.lock().text || text.is_empty() {
            self.fail("Text has zero width");
            return std::ptr::null_mut();
        }
        // Half-square glyphs.
        let height = font.size.height;
        let width = height / 2 * text.chars().count() as i32;
        self.surface(width, height)
    }

    fn last_error(&self) -> String {
        self.last_error.lock().clone()
    }
}

impl AudioPlatform for MockPlatform {
    type Chunk = MockChunk;
    type Music = MockMusic;

    fn load_chunk(&self, path: &Path) -> *mut MockChunk {
        self.recorder.push(PlatformCall::LoadChunk {
            path: path.to_path_buf(),
        });
        if !self.sounds.lock().contains(path) {
            self.fail(format!("Couldn't open {}", path.display()));
            return std::ptr::null_mut();
        }
        self.chunk()
    }

    fn load_music(&self, path: &Path) -> *mut MockMusic {
        self.recorder.push(PlatformCall::LoadMusic {
            path: path.to_path_buf(),
        });
        if !self.sounds.lock().contains(path) {
            self.fail(format!("Couldn't open {}", path.display()));
            return std::ptr::null_mut();
        }
        self.music()
    }

    unsafe fn play_chunk(
        &self,
        chunk: NonNull<MockChunk>,
        channel: Option<i32>,
        repeat: Repeat,
    ) -> Option<i32> {
        if self.failures.lock().playback {
            self.fail("No free channels available");
            return None;
        }
        let channel = channel.unwrap_or(0);
        self.recorder.push(PlatformCall::PlayChunk {
            chunk: deref(chunk).id,
            channel,
            repeat,
        });
        Some(channel)
    }

    unsafe fn play_music(&self, music: NonNull<MockMusic>, repeat: Repeat) -> bool {
        if self.failures.lock().playback {
            self.fail("Audio device hasn't been opened");
            return false;
        }
        self.recorder.push(PlatformCall::PlayMusic {
            music: deref(music).id,
            repeat,
        });
        *self.music.lock() = MusicState::Playing;
        true
    }

    fn music_state(&self) -> MusicState {
        *self.music.lock()
    }

    fn pause_music(&self) {
        self.recorder.push(PlatformCall::PauseMusic);
        let mut state = self.music.lock();
        if *state == MusicState::Playing {
            *state = MusicState::Paused;
        }
    }

    fn resume_music(&self) {
        self.recorder.push(PlatformCall::ResumeMusic);
        let mut state = self.music.lock();
        if *state == MusicState::Paused {
            *state = MusicState::Playing;
        }
    }

    fn halt_music(&self) {
        self.recorder.push(PlatformCall::HaltMusic);
        *self.music.lock() = MusicState::Stopped;
    }

    fn last_error(&self) -> String {
        self.last_error.lock().clone()
    }
}
