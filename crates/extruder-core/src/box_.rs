//! Box - Rectangle regions
//!
//! A `Box` addresses a block of pixels inside an image. Coordinates are
//! unsigned because every region the extruder deals with lies inside a
//! real image.

/// A rectangle region
///
/// Small and frequently copied, so it is a plain `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Box {
    /// Create a box without validation
    pub const fn new_unchecked(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    /// Whether the box covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check whether the point lies inside the box.
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check whether the box fits entirely inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        u64::from(self.x) + u64::from(self.w) <= u64::from(width)
            && u64::from(self.y) + u64::from(self.h) <= u64::from(height)
    }

    /// Check whether two boxes share at least one pixel.
    pub fn overlaps(&self, other: &Box) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_edges() {
        let b = Box::new_unchecked(2, 3, 4, 5);
        assert_eq!(b.right(), 6);
        assert_eq!(b.bottom(), 8);
        assert_eq!(b.area(), 20);
        assert!(!b.is_empty());
    }

    #[test]
    fn test_contains_point() {
        let b = Box::new_unchecked(1, 1, 2, 2);
        assert!(b.contains_point(1, 1));
        assert!(b.contains_point(2, 2));
        assert!(!b.contains_point(3, 2));
        assert!(!b.contains_point(0, 1));
    }

    #[test]
    fn test_fits_within() {
        let b = Box::new_unchecked(2, 2, 3, 3);
        assert!(b.fits_within(5, 5));
        assert!(!b.fits_within(4, 5));
        assert!(!Box::new_unchecked(u32::MAX, 0, 1, 1).fits_within(10, 10));
    }

    #[test]
    fn test_overlaps() {
        let a = Box::new_unchecked(0, 0, 2, 2);
        let b = Box::new_unchecked(1, 1, 2, 2);
        let c = Box::new_unchecked(2, 0, 2, 2);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&Box::new_unchecked(0, 0, 0, 5)));
    }
}
