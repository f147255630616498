use std::ops::{Add, Mul};

/// An axis-aligned rectangle: origin plus extent.
///
/// Used both as a texture clip (which part of the source image to copy) and as
/// a placement (where on the render target to draw, and what area reacts to
/// the pointer). Integer coordinates match the platform's pixel grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect<T = i32> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Copy> Rect<T> {
    pub fn from_parts(pos: Pos<T>, size: Size<T>) -> Self {
        Rect {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn pos(&self) -> Pos<T> {
        Pos::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }

    pub fn set_pos(&mut self, pos: Pos<T>) {
        self.x = pos.x;
        self.y = pos.y;
    }

    pub fn set_size(&mut self, size: Size<T>) {
        self.width = size.width;
        self.height = size.height;
    }
}

impl<T: Copy + PartialOrd + Add<Output = T>> Rect<T> {
    /// Strict interior test: points on the border are outside.
    pub fn contains_strict(&self, point: Pos<T>) -> bool {
        point.x > self.x
            && point.x < self.x + self.width
            && point.y > self.y
            && point.y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size<T = i32> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pos<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub const fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

impl<T: Add<Output = T>> Add for Pos<T> {
    type Output = Pos<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Pos {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_strict_excludes_border() {
        let rect = Rect::new(10, 10, 50, 20);

        assert!(rect.contains_strict(Pos::new(30, 20)));
        assert!(rect.contains_strict(Pos::new(11, 11)));
        assert!(rect.contains_strict(Pos::new(59, 29)));

        assert!(!rect.contains_strict(Pos::new(10, 20)));
        assert!(!rect.contains_strict(Pos::new(60, 20)));
        assert!(!rect.contains_strict(Pos::new(30, 10)));
        assert!(!rect.contains_strict(Pos::new(30, 30)));
    }

    #[test]
    fn test_zero_sized_rect_contains_nothing() {
        let rect = Rect::new(5, 5, 0, 0);
        assert!(!rect.contains_strict(Pos::new(5, 5)));
    }

    #[test]
    fn test_parts_roundtrip() {
        let mut rect = Rect::from_parts(Pos::new(1, 2), Size::new(3, 4));
        assert_eq!(rect, Rect::new(1, 2, 3, 4));

        rect.set_pos(Pos::new(7, 8));
        rect.set_size(Size::new(9, 10));
        assert_eq!(rect.pos(), Pos::new(7, 8));
        assert_eq!(rect.size(), Size::new(9, 10));
    }

    #[test]
    fn test_size_scale() {
        assert_eq!(Size::new(3, 4) * 2, Size::new(6, 8));
        assert_eq!(Size::<u8>::new(3, 4).cast::<i32>(), Size::new(3, 4));
    }
}
