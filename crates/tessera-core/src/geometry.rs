#![forbid(unsafe_code)]

//! Geometric primitives shared by the screen, layouts, and widgets.
//!
//! Coordinates are terminal cells, origin at the top-left. All arithmetic
//! saturates so that oversized margins or offsets collapse to empty areas
//! instead of wrapping.

/// A rectangular region of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// True when either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by the given sides. Margins larger than the rectangle collapse
    /// it to zero width or height at the inset origin.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(margin.left),
            y: self.y.saturating_add(margin.top),
            width: self.width.saturating_sub(margin.horizontal_sum()),
            height: self.height.saturating_sub(margin.vertical_sum()),
        }
    }

    /// Overlapping region, or `None` if the rectangles are disjoint.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        (x < right && y < bottom).then(|| Rect::new(x, y, right - x, bottom - y))
    }

    /// A `width` x `height` rectangle centered in `self`, clamped to fit.
    pub fn centered(&self, width: u16, height: u16) -> Rect {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Rect {
            x: self.x.saturating_add((self.width - width) / 2),
            y: self.y.saturating_add((self.height - height) / 2),
            width,
            height,
        }
    }

    /// Same origin, size clamped to at most `size`.
    pub fn clamp_size(&self, size: Size) -> Rect {
        Rect {
            width: self.width.min(size.width),
            height: self.height.min(size.height),
            ..*self
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Per-edge insets for padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// The same inset on every edge.
    pub const fn all(val: u16) -> Self {
        Self::new(val, val, val, val)
    }

    /// Left and right only.
    pub const fn horizontal(val: u16) -> Self {
        Self::new(0, val, 0, val)
    }

    /// Top and bottom only.
    pub const fn vertical(val: u16) -> Self {
        Self::new(val, 0, val, 0)
    }

    /// CSS order: top, right, bottom, left.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<u16> for Sides {
    fn from(val: u16) -> Self {
        Self::all(val)
    }
}

impl From<(u16, u16)> for Sides {
    fn from((vertical, horizontal): (u16, u16)) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Sides, Size};

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
    }

    #[test]
    fn inner_collapses_on_large_margin() {
        let rect = Rect::new(0, 0, 4, 4);
        let inner = rect.inner(Sides::all(3));
        assert_eq!(inner, Rect::new(3, 3, 0, 0));
        assert!(inner.is_empty());
    }

    #[test]
    fn inner_asymmetric() {
        let rect = Rect::new(1, 1, 10, 6);
        assert_eq!(rect.inner(Sides::new(1, 2, 0, 3)), Rect::new(4, 2, 5, 5));
    }

    #[test]
    fn intersection_disjoint_is_none() {
        let a = Rect::new(0, 0, 3, 3);
        let b = Rect::new(3, 0, 3, 3);
        assert_eq!(a.intersection(&b), None);
        assert_eq!(
            a.intersection(&Rect::new(1, 1, 5, 5)),
            Some(Rect::new(1, 1, 2, 2))
        );
    }

    #[test]
    fn centered_clamps_to_parent() {
        let parent = Rect::new(10, 5, 20, 10);
        assert_eq!(parent.centered(10, 4), Rect::new(15, 8, 10, 4));
        assert_eq!(parent.centered(40, 40), parent);
    }

    #[test]
    fn right_and_bottom_saturate() {
        let rect = Rect::new(u16::MAX - 1, u16::MAX, 10, 10);
        assert_eq!(rect.right(), u16::MAX);
        assert_eq!(rect.bottom(), u16::MAX);
    }

    #[test]
    fn clamp_size_keeps_origin() {
        let rect = Rect::new(2, 2, 8, 3);
        assert_eq!(rect.clamp_size(Size::new(4, 10)), Rect::new(2, 2, 4, 3));
    }

    #[test]
    fn sides_conversions() {
        assert_eq!(Sides::from(2), Sides::all(2));
        assert_eq!(Sides::from((1, 3)), Sides::new(1, 3, 1, 3));
        assert_eq!(Sides::horizontal(2).vertical_sum(), 0);
        assert_eq!(Sides::vertical(2).vertical_sum(), 4);
    }
}
