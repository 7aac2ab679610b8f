//! embedded-graphics integration
//!
//! Drawing through [`DrawTarget`] only stages fills; nothing reaches the
//! bus until the queue is flushed (or overflows).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use volctrl_core::{Error, Rect};

use super::st7789::St7789;
use crate::transport::Transport;

impl<T: Transport> OriginDimensions for St7789<T> {
    fn size(&self) -> Size {
        let (width, height) = self.dimensions();
        Size::new(u32::from(width), u32::from(height))
    }
}

impl<T: Transport> DrawTarget for St7789<T> {
    type Color = Rgb565;
    type Error = Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        let (width, height) = self.dimensions();
        for Pixel(point, color) in pixels {
            // Off-screen pixels are clipped
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            if x >= width || y >= height {
                continue;
            }
            self.queue_fill(Rect::new(x, y, 1, 1), color)?;
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), Error> {
        let visible = area.intersection(&self.bounding_box());
        let Some(bottom_right) = visible.bottom_right() else {
            return Ok(());
        };
        let top_left = visible.top_left;
        // Clipped to the panel, so every coordinate fits u16
        let rect = Rect::new(
            top_left.x as u16,
            top_left.y as u16,
            (bottom_right.x - top_left.x + 1) as u16,
            (bottom_right.y - top_left.y + 1) as u16,
        );
        self.queue_fill(rect, color)
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), Error> {
        // Everything staged is about to be painted over
        self.discard();
        let (width, height) = self.dimensions();
        self.queue_fill(Rect::new(0, 0, width, height), color)
    }
}
