//! Screen rectangles
//!
//! Panel coordinates are unsigned with the origin at the top-left corner.
//! Edge arithmetic is done in `u32` so no rectangle can overflow.

use crate::error::OutOfBoundsError;

/// Axis-aligned rectangle in panel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> u32 {
        self.x as u32 + self.width as u32
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> u32 {
        self.y as u32 + self.height as u32
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check the rectangle is non-empty and lies inside a `width` x
    /// `height` panel
    pub fn check_within(&self, width: u16, height: u16) -> Result<(), OutOfBoundsError> {
        if self.is_empty() || self.right() > u32::from(width) || self.bottom() > u32::from(height)
        {
            return Err(OutOfBoundsError::Region {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Overlapping part of two rectangles, `None` when they are disjoint
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= u32::from(x) || bottom <= u32::from(y) {
            return None;
        }

        // Both extents are bounded by an input width/height
        Some(Rect::new(
            x,
            y,
            (right - u32::from(x)) as u16,
            (bottom - u32::from(y)) as u16,
        ))
    }

    /// Whether `(px, py)` lies inside the rectangle
    pub fn contains(&self, px: u16, py: u16) -> bool {
        px >= self.x
            && py >= self.y
            && u32::from(px) < self.right()
            && u32::from(py) < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_do_not_overflow() {
        let r = Rect::new(u16::MAX, u16::MAX, u16::MAX, 1);
        assert_eq!(r.right(), 2 * u16::MAX as u32);
        assert!(r.check_within(240, 240).is_err());
    }

    #[test]
    fn test_check_within() {
        assert!(Rect::new(0, 0, 240, 240).check_within(240, 240).is_ok());
        assert!(Rect::new(239, 239, 1, 1).check_within(240, 240).is_ok());
        assert!(Rect::new(200, 0, 41, 10).check_within(240, 240).is_err());
        assert!(Rect::new(0, 240, 1, 1).check_within(240, 240).is_err());
        assert_eq!(
            Rect::new(5, 5, 0, 10).check_within(240, 240),
            Err(OutOfBoundsError::Region {
                x: 5,
                y: 5,
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(10, 10, 20, 20);
        let b = Rect::new(20, 0, 20, 15);
        assert_eq!(a.intersection(&b), Some(Rect::new(20, 10, 10, 5)));
        assert_eq!(a.intersection(&Rect::new(30, 10, 5, 5)), None);
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(10, 10));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 10));
        assert!(!r.contains(9, 12));
    }
}
