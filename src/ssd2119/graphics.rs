//! [`embedded_graphics`] support
//!
//! The driver draws straight into the panel's GRAM, there is no frame buffer.
//! Every primitive ends up as [`Ssd2119::write_pixel`] calls, so shapes drawn
//! in horizontal runs get the write-combining discount.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ssd2119::driver::Ssd2119;
use crate::ssd2119::interface::BusHandle;
use crate::ssd2119::{HEIGHT, WIDTH};

impl<B: BusHandle> OriginDimensions for Ssd2119<B> {
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

impl<B: BusHandle> DrawTarget for Ssd2119<B> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.write_pixel(point.x as u16, point.y as u16, color.into_storage());
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        let raw = color.into_storage();
        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                self.write_pixel(x as u16, y as u16, raw);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}
