//! Pixel burst planning
//!
//! Splits a region into sub-windows whose pixel data fits one burst.
//! Sub-windows are whole-row bands when a row fits in a burst, otherwise
//! segments of a single row. They tile the region in raster order, so
//! each sub-window's data is a contiguous slice of the region's data.

use volctrl_core::Rect;

/// Iterator over the sub-windows of a region
#[derive(Debug, Clone)]
pub struct Chunks {
    region: Rect,
    /// Rows per band, or 0 when rows are split into segments
    band_rows: u16,
    /// Segment width when rows are split
    segment: u16,
    x: u16,
    y: u16,
    done: bool,
}

impl Chunks {
    /// Plan `region` in bursts of at most `max_bytes` (RGB565)
    pub fn new(region: Rect, max_bytes: usize) -> Self {
        let max_pixels = (max_bytes / 2).clamp(1, u16::MAX as usize) as u16;
        let (band_rows, segment) = if region.width <= max_pixels {
            (max_pixels / region.width.max(1), region.width)
        } else {
            (0, max_pixels)
        };

        Self {
            region,
            band_rows,
            segment,
            x: region.x,
            y: region.y,
            done: region.is_empty(),
        }
    }

    /// Byte offset of `chunk` within the region's pixel data
    pub fn offset(&self, chunk: &Rect) -> usize {
        let row = usize::from(chunk.y - self.region.y);
        let col = usize::from(chunk.x - self.region.x);
        (row * usize::from(self.region.width) + col) * 2
    }
}

impl Iterator for Chunks {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        if self.done {
            return None;
        }

        let bottom = self.region.bottom();
        let right = self.region.right();

        if self.band_rows > 0 {
            let rows = (bottom - u32::from(self.y)).min(u32::from(self.band_rows)) as u16;
            let chunk = Rect::new(self.region.x, self.y, self.region.width, rows);
            let next_y = u32::from(self.y) + u32::from(rows);
            if next_y >= bottom {
                self.done = true;
            } else {
                self.y = next_y as u16;
            }
            return Some(chunk);
        }

        let width = (right - u32::from(self.x)).min(u32::from(self.segment)) as u16;
        let chunk = Rect::new(self.x, self.y, width, 1);
        let next_x = u32::from(self.x) + u32::from(width);
        if next_x < right {
            self.x = next_x as u16;
        } else {
            let next_y = u32::from(self.y) + 1;
            if next_y >= bottom {
                self.done = true;
            } else {
                self.x = self.region.x;
                self.y = next_y as u16;
            }
        }
        Some(chunk)
    }
}
