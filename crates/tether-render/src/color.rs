use bitflags::bitflags;
use tether_core::geometry::Pos;

/// An 8-bit RGBA color, the native color format of the platform.
///
/// ```
/// use tether_render::Color;
///
/// let key = Color::rgb(0, 0xFF, 0xFF);
/// let from_hex = Color::from_hex(0x00FFFF);
/// assert_eq!(key, from_hex);
/// ```
///
/// The struct is `#[repr(C)]` and implements `bytemuck::Pod`, so pixel rows can
/// be reinterpreted as `&[Color]` without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(0xFF, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 0xFF, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 0xFF);
    pub const CYAN: Color = Color::rgb(0, 0xFF, 0xFF);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from(arr: [u8; 4]) -> Self {
        Self::rgba(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<[u8; 3]> for Color {
    fn from(arr: [u8; 3]) -> Self {
        Self::rgb(arr[0], arr[1], arr[2])
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// How a texture's pixels are combined with the render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Source replaces destination.
    None,
    /// Standard alpha blending.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb * (1 - src.a)`
    #[default]
    Blend,
    /// Formula: `src.rgb * src.a + dst.rgb`
    Add,
    /// Formula: `src.rgb * dst.rgb`
    Mod,
}

bitflags! {
    /// Mirroring applied when copying a texture.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flip: u8 {
        const NONE = 0;
        const HORIZONTAL = 1 << 0;
        const VERTICAL = 1 << 1;
    }
}

/// Rotation and mirroring for [`Texture::draw_ex`](crate::Texture::draw_ex).
///
/// The default is the identity: no rotation, centre of the destination, no
/// flip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Clockwise rotation in degrees.
    pub angle: f64,
    /// Rotation centre relative to the destination origin; `None` is the
    /// destination centre.
    pub center: Option<Pos>,
    pub flip: Flip,
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation {
        angle: 0.0,
        center: None,
        flip: Flip::NONE,
    };

    pub fn rotated(angle: f64) -> Self {
        Self {
            angle,
            ..Self::IDENTITY
        }
    }

    pub fn flipped(flip: Flip) -> Self {
        Self {
            flip,
            ..Self::IDENTITY
        }
    }

    pub fn with_center(mut self, center: Pos) -> Self {
        self.center = Some(center);
        self
    }

    pub fn is_identity(&self) -> bool {
        self.angle == 0.0 && self.flip.is_empty()
    }
}
