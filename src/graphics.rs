//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`Rgb565`] colors, so any
//! embedded-graphics drawable can be rendered straight to the panel. The
//! target size follows the current rotation.
//!
//! Drawing stays unbuffered. Solid fills become a single clipped window,
//! contiguous fills that fit on the panel are streamed into one window, and
//! everything else is drawn pixel by pixel with off-panel pixels dropped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use st7789::{Builder, Dimensions, Display, Interface};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! # let dims = match Dimensions::new(240, 240) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut delay = MockDelay;
//! let mut display = Display::new(interface, config);
//! let _ = display.initialize(&mut delay);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::BLUE))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::YELLOW, 2))
//!     .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
    primitives::{PointsIter, Rectangle},
};

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Clip `area` to the panel and return it as `(x, y, w, h)`
    fn visible_area(&self, area: &Rectangle) -> Option<(u16, u16, u16, u16)> {
        let visible = area.intersection(&self.bounding_box());
        if visible.is_zero_sized() {
            return None;
        }
        let Point { x, y } = visible.top_left;
        Some((
            x as u16,
            y as u16,
            visible.size.width as u16,
            visible.size.height as u16,
        ))
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<P>(&mut self, pixels: P) -> GraphicsResult<I>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some((x, y)) = self.clip_point(point.x, point.y) {
                self.draw_pixel(x, y, color.into())?;
            }
        }
        Ok(())
    }

    fn fill_contiguous<C>(&mut self, area: &Rectangle, colors: C) -> GraphicsResult<I>
    where
        C: IntoIterator<Item = Self::Color>,
    {
        if area.is_zero_sized() {
            return Ok(());
        }
        let fully_visible = area.intersection(&self.bounding_box()) == *area;
        let Some((x, y, w, h)) = self.visible_area(area).filter(|_| fully_visible) else {
            return self.draw_iter(
                area.points()
                    .zip(colors)
                    .map(|(point, color)| Pixel(point, color)),
            );
        };

        self.set_window(x, y, x + w - 1, y + h - 1)?;
        let count = w as usize * h as usize;
        self.write_pixels(colors.into_iter().take(count).map(Color::from))
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> GraphicsResult<I> {
        match self.visible_area(area) {
            Some((x, y, w, h)) => self.fill_rect(x, y, w, h, color.into()),
            None => Ok(()),
        }
    }

    fn clear(&mut self, color: Self::Color) -> GraphicsResult<I> {
        Display::clear(self, color.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions, Rotation};
    use crate::mock::{MockInterface, test_display};
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;
    use embedded_graphics::geometry::Dimensions as _;
    use embedded_graphics::pixelcolor::RgbColor;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    fn painted(display: &Display<MockInterface>) -> BTreeSet<(u16, u16)> {
        display.interface.pixels.keys().copied().collect()
    }

    fn block(x: core::ops::Range<u16>, y: core::ops::Range<u16>) -> BTreeSet<(u16, u16)> {
        y.flat_map(|y| x.clone().map(move |x| (x, y))).collect()
    }

    #[test]
    fn test_size_follows_rotation() {
        let config = Builder::new()
            .dimensions(Dimensions::new(170, 320).unwrap())
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        assert_eq!(display.size(), Size::new(170, 320));
        display.set_rotation(Rotation::Rotate90).unwrap();
        assert_eq!(display.size(), Size::new(320, 170));
        assert_eq!(
            display.bounding_box(),
            Rectangle::new(Point::zero(), Size::new(320, 170))
        );
    }

    #[test]
    fn test_draw_iter_drops_off_panel_pixels() {
        let mut display = test_display();
        let pixels = [
            Pixel(Point::new(1, 2), Rgb565::RED),
            Pixel(Point::new(-1, 2), Rgb565::RED),
            Pixel(Point::new(3, -4), Rgb565::RED),
            Pixel(Point::new(240, 0), Rgb565::RED),
            Pixel(Point::new(0, 240), Rgb565::RED),
            Pixel(Point::new(239, 239), Rgb565::GREEN),
        ];
        display.draw_iter(pixels).unwrap();
        assert_eq!(display.interface.windows(), [(1, 2, 1, 2), (239, 239, 239, 239)]);
        assert_eq!(display.interface.pixels[&(1, 2)], 0xF800);
        assert_eq!(display.interface.pixels[&(239, 239)], 0x07E0);
    }

    #[test]
    fn test_fill_solid_is_one_clipped_window() {
        let mut display = test_display();
        let area = Rectangle::new(Point::new(-5, -5), Size::new(10, 10));
        display.fill_solid(&area, Rgb565::BLUE).unwrap();
        assert_eq!(display.interface.windows(), [(0, 0, 4, 4)]);
        assert_eq!(painted(&display), block(0..5, 0..5));
        assert!(display.interface.pixels.values().all(|c| *c == 0x001F));
    }

    #[test]
    fn test_fill_solid_off_panel_sends_nothing() {
        let mut display = test_display();
        let area = Rectangle::new(Point::new(300, 10), Size::new(10, 10));
        display.fill_solid(&area, Rgb565::BLUE).unwrap();
        let empty = Rectangle::new(Point::new(10, 10), Size::zero());
        display.fill_solid(&empty, Rgb565::BLUE).unwrap();
        assert!(display.interface.ops.is_empty());
    }

    #[test]
    fn test_fill_contiguous_streams_into_one_window() {
        let mut display = test_display();
        let area = Rectangle::new(Point::new(10, 20), Size::new(3, 2));
        let colors = (0u16..6).map(|i| Rgb565::from(Color::new(0x1000 + i)));
        display.fill_contiguous(&area, colors).unwrap();

        assert_eq!(display.interface.windows(), [(10, 20, 12, 21)]);
        assert_eq!(display.interface.last_stream().len(), 1);
        assert_eq!(display.interface.pixels[&(10, 20)], 0x1000);
        assert_eq!(display.interface.pixels[&(12, 20)], 0x1002);
        assert_eq!(display.interface.pixels[&(10, 21)], 0x1003);
        assert_eq!(display.interface.pixels[&(12, 21)], 0x1005);
    }

    #[test]
    fn test_fill_contiguous_partially_visible_falls_back_to_pixels() {
        let mut display = test_display();
        let area = Rectangle::new(Point::new(238, 0), Size::new(4, 2));
        let colors = (0u16..8).map(|i| Rgb565::from(Color::new(i)));
        display.fill_contiguous(&area, colors).unwrap();

        // Columns 238 and 239 stay; 240 and 241 are dropped
        assert_eq!(painted(&display), block(238..240, 0..2));
        assert_eq!(display.interface.pixels[&(238, 0)], 0);
        assert_eq!(display.interface.pixels[&(239, 1)], 5);
        assert_eq!(display.interface.windows().len(), 4);
    }

    #[test]
    fn test_clear_fills_rotated_panel() {
        let config = Builder::new()
            .dimensions(Dimensions::new(135, 240).unwrap())
            .rotation(Rotation::Rotate270)
            .build()
            .unwrap();
        let mut display = Display::new(MockInterface::new(), config);
        DrawTarget::clear(&mut display, Rgb565::WHITE).unwrap();
        assert_eq!(display.interface.windows(), [(0, 0, 239, 134)]);
        assert_eq!(display.interface.pixels.len(), 240 * 135);
    }

    #[test]
    fn test_styled_primitives_render() {
        let mut display = test_display();
        Rectangle::new(Point::new(4, 4), Size::new(6, 3))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
            .draw(&mut display)
            .unwrap();
        assert_eq!(painted(&display), block(4..10, 4..7));

        let mut display = test_display();
        Line::new(Point::new(-3, 0), Point::new(5, 0))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
            .draw(&mut display)
            .unwrap();
        assert_eq!(painted(&display), block(0..6, 0..1));
    }

    #[test]
    fn test_draw_errors_propagate() {
        let mut interface = MockInterface::new();
        interface.fail_after = Some(0);
        let mut display = Display::new(interface, *test_display().config());
        let pixels: Vec<Pixel<Rgb565>> = Vec::from([Pixel(Point::new(0, 0), Rgb565::RED)]);
        assert!(matches!(
            display.draw_iter(pixels),
            Err(Error::Interface(_))
        ));
    }
}
