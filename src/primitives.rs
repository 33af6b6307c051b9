//! Drawing primitives
//!
//! Every primitive programs the controller's write window and streams the
//! pixels straight into it. There is no framebuffer: the controller's write
//! pointer advances row-major through the window, so a rectangle of `w*h`
//! pixels is one window plus `w*h` color words.
//!
//! Rectangles, lines and bitmaps are sent as given; keeping them on the
//! panel is the caller's job. Circles are generated around a center and may
//! extend past the edges, so their pixels are clipped to the panel.

use crate::color::Color;
use crate::display::{Display, DisplayResult};
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Midpoint circle walk over the first octant
///
/// Yields `(x, y)` offsets from the center for `x` in `0..=y`, starting at
/// `(0, r)`. The decision variable starts at `3 - 2r`; a negative value keeps
/// `y`, anything else steps `y` inward.
pub(crate) struct MidpointCircle {
    x: i32,
    y: i32,
    d: i32,
}

impl MidpointCircle {
    pub(crate) fn new(radius: u16) -> Self {
        let r = i32::from(radius);
        Self {
            x: 0,
            y: r,
            d: 3 - 2 * r,
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.y {
            return None;
        }
        let point = (self.x, self.y);
        if self.d < 0 {
            self.d += 4 * self.x + 6;
        } else {
            self.d += 4 * (self.x - self.y) + 10;
            self.y -= 1;
        }
        self.x += 1;
        Some(point)
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Set a single pixel
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> DisplayResult<I> {
        self.set_window(x, y, x, y)?;
        self.send_data_word(color.into_raw())
    }

    /// Fill a `w` x `h` rectangle with its top-left corner at `(x, y)`
    ///
    /// An empty rectangle sends nothing.
    #[allow(clippy::many_single_char_names)]
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> DisplayResult<I> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.set_window(x, y, x.saturating_add(w - 1), y.saturating_add(h - 1))?;
        self.write_repeated(color, w as usize * h as usize)
    }

    /// Draw a horizontal line of `w` pixels starting at `(x, y)`
    pub fn draw_hline(&mut self, x: u16, y: u16, w: u16, color: Color) -> DisplayResult<I> {
        self.fill_rect(x, y, w, 1, color)
    }

    /// Draw a vertical line of `h` pixels starting at `(x, y)`
    pub fn draw_vline(&mut self, x: u16, y: u16, h: u16, color: Color) -> DisplayResult<I> {
        self.fill_rect(x, y, 1, h, color)
    }

    /// Fill the whole panel in its current orientation
    pub fn clear(&mut self, color: Color) -> DisplayResult<I> {
        self.fill_rect(0, 0, self.width(), self.height(), color)
    }

    /// Draw a 1-pixel circle outline of radius `r` centered on `(x0, y0)`
    ///
    /// Each step of the midpoint walk plots its eight reflections, one pixel
    /// write each.
    pub fn draw_circle(&mut self, x0: u16, y0: u16, r: u16, color: Color) -> DisplayResult<I> {
        let (cx, cy) = (i32::from(x0), i32::from(y0));
        for (x, y) in MidpointCircle::new(r) {
            let octants = [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ];
            for (px, py) in octants {
                if let Some((px, py)) = self.clip_point(px, py) {
                    self.draw_pixel(px, py, color)?;
                }
            }
        }
        Ok(())
    }

    /// Draw a filled circle of radius `r` centered on `(x0, y0)`
    ///
    /// Uses the same walk as [`draw_circle`](Self::draw_circle); each step
    /// fills the wide spans at rows `y0 ± x`, then the narrow spans at rows
    /// `y0 ± y`, each as one horizontal line.
    pub fn fill_circle(&mut self, x0: u16, y0: u16, r: u16, color: Color) -> DisplayResult<I> {
        let (cx, cy) = (i32::from(x0), i32::from(y0));
        for (x, y) in MidpointCircle::new(r) {
            self.fill_span(cx - y, cx + y, cy + x, color)?;
            self.fill_span(cx - y, cx + y, cy - x, color)?;
            self.fill_span(cx - x, cx + x, cy + y, color)?;
            self.fill_span(cx - x, cx + x, cy - y, color)?;
        }
        Ok(())
    }

    /// Copy a row-major block of pixels into the `w` x `h` area at `(x, y)`
    ///
    /// Pixels are staged through a fixed scratch buffer and sent in chunks
    /// of at most [`TRANSFER_CHUNK_PIXELS`](crate::display::TRANSFER_CHUNK_PIXELS).
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if `pixels` holds fewer than `w * h`
    /// entries. Extra entries are ignored.
    #[allow(clippy::many_single_char_names)]
    pub fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        pixels: &[Color],
    ) -> DisplayResult<I> {
        let required = w as usize * h as usize;
        if pixels.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: pixels.len(),
            });
        }
        if required == 0 {
            return Ok(());
        }
        self.set_window(x, y, x.saturating_add(w - 1), y.saturating_add(h - 1))?;
        self.write_pixels(pixels[..required].iter().copied())
    }

    /// Fill columns `x_start..=x_end` of `row`, clipped to the panel
    fn fill_span(&mut self, x_start: i32, x_end: i32, row: i32, color: Color) -> DisplayResult<I> {
        let Some(row) = clip(row, self.height()) else {
            return Ok(());
        };
        let start = x_start.max(0);
        let end = x_end.min(i32::from(self.width()) - 1);
        if start > end {
            return Ok(());
        }
        self.draw_hline(start as u16, row, (end - start + 1) as u16, color)
    }

    /// Convert a signed position to panel coordinates, if it is on the panel
    pub(crate) fn clip_point(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        Some((clip(x, self.width())?, clip(y, self.height())?))
    }
}

fn clip(value: i32, limit: u16) -> Option<u16> {
    u16::try_from(value).ok().filter(|v| *v < limit)
}
