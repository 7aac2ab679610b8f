//! Staged frame updates
//!
//! The queue holds solid fills in drawing order. Adjacent fills of one
//! color are merged on the way in: pixels on a row become horizontal runs
//! and runs stacked with the same span become rectangles.

use embedded_graphics::pixelcolor::Rgb565;
use heapless::Deque;
use volctrl_core::Rect;

/// Capacity of the frame queue
pub const FRAME_QUEUE_LEN: usize = 64;

/// One staged solid fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFill {
    pub area: Rect,
    pub color: Rgb565,
}

impl PendingFill {
    /// Try to grow `self` to also cover `next`
    fn absorb(&mut self, next: &PendingFill) -> bool {
        if self.color != next.color {
            return false;
        }
        let a = &mut self.area;
        let b = &next.area;

        // Horizontal run on the same rows
        if a.y == b.y && a.height == b.height && a.right() == u32::from(b.x) {
            if let Some(width) = a.width.checked_add(b.width) {
                a.width = width;
                return true;
            }
        }

        // Same span directly below
        if a.x == b.x && a.width == b.width && a.bottom() == u32::from(b.y) {
            if let Some(height) = a.height.checked_add(b.height) {
                a.height = height;
                return true;
            }
        }

        false
    }
}

/// Pending fills awaiting transmission
#[derive(Debug, Default)]
pub struct FrameQueue {
    fills: Deque<PendingFill, FRAME_QUEUE_LEN>,
}

impl FrameQueue {
    pub const fn new() -> Self {
        Self {
            fills: Deque::new(),
        }
    }

    /// Stage a fill, merging it into the last one when possible
    ///
    /// Hands the fill back when the queue is full.
    pub fn push(&mut self, fill: PendingFill) -> Result<(), PendingFill> {
        if let Some(last) = self.fills.back_mut() {
            if last.absorb(&fill) {
                return Ok(());
            }
        }
        self.fills.push_back(fill)
    }

    /// Oldest staged fill
    pub fn pop(&mut self) -> Option<PendingFill> {
        self.fills.pop_front()
    }

    /// Drop everything staged
    pub fn clear(&mut self) {
        self.fills.clear();
    }

    pub fn len(&self) -> usize {
        self.fills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::RgbColor;

    fn fill(x: u16, y: u16, width: u16, height: u16, color: Rgb565) -> PendingFill {
        PendingFill {
            area: Rect::new(x, y, width, height),
            color,
        }
    }

    #[test]
    fn test_pixels_merge_into_runs() {
        let mut queue = FrameQueue::new();
        for x in 10..20 {
            queue.push(fill(x, 5, 1, 1, Rgb565::WHITE)).unwrap();
        }
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(fill(10, 5, 10, 1, Rgb565::WHITE)));
    }

    #[test]
    fn test_runs_merge_into_rects() {
        let mut queue = FrameQueue::new();
        for y in 0..4 {
            queue.push(fill(0, y, 8, 1, Rgb565::RED)).unwrap();
        }
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some(fill(0, 0, 8, 4, Rgb565::RED)));
    }

    #[test]
    fn test_color_change_breaks_run() {
        let mut queue = FrameQueue::new();
        queue.push(fill(0, 0, 1, 1, Rgb565::RED)).unwrap();
        queue.push(fill(1, 0, 1, 1, Rgb565::GREEN)).unwrap();
        queue.push(fill(2, 0, 1, 1, Rgb565::GREEN)).unwrap();
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut queue = FrameQueue::new();
        queue.push(fill(0, 0, 1, 1, Rgb565::RED)).unwrap();
        queue.push(fill(2, 0, 1, 1, Rgb565::RED)).unwrap();
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_full_queue_hands_fill_back() {
        let mut queue = FrameQueue::new();
        for i in 0..FRAME_QUEUE_LEN as u16 {
            // Every other column so nothing merges
            queue.push(fill(i * 2, 0, 1, 1, Rgb565::BLUE)).unwrap();
        }
        assert_eq!(queue.len(), FRAME_QUEUE_LEN);

        let extra = fill(0, 100, 1, 1, Rgb565::BLUE);
        assert_eq!(queue.push(extra), Err(extra));

        // A fill that merges still fits
        assert_eq!(
            queue.push(fill((FRAME_QUEUE_LEN as u16 - 1) * 2 + 1, 0, 1, 1, Rgb565::BLUE)),
            Ok(())
        );
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = FrameQueue::new();
        queue.push(fill(0, 0, 1, 1, Rgb565::RED)).unwrap();
        queue.push(fill(50, 50, 1, 1, Rgb565::RED)).unwrap();
        assert_eq!(queue.pop().map(|f| f.area.x), Some(0));
        assert_eq!(queue.pop().map(|f| f.area.x), Some(50));
        assert!(queue.is_empty());
    }
}
