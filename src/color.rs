//! RGB565 color type
//!
//! The ST7789 is driven in 16 bits per pixel mode. Each pixel is a packed
//! RGB565 word: 5 bits red, 6 bits green, 5 bits blue.
//!
//! | Bits    | Channel |
//! |---------|---------|
//! | 15..=11 | Red     |
//! | 10..=5  | Green   |
//! | 4..=0   | Blue    |
//!
//! The word is transmitted big-endian: high byte first.
//!
//! ## Example
//!
//! ```
//! use st7789::Color;
//!
//! assert_eq!(Color::RED.into_raw(), 0xF800);
//! assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
//! assert_eq!(Color::from_rgb(0, 255, 0), Color::GREEN);
//! ```

/// Packed RGB565 pixel color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[repr(transparent)]
pub struct Color(u16);

impl Color {
    /// Black (0x0000)
    pub const BLACK: Self = Self(0x0000);
    /// Blue (0x001F)
    pub const BLUE: Self = Self(0x001F);
    /// Red (0xF800)
    pub const RED: Self = Self(0xF800);
    /// Green (0x07E0)
    pub const GREEN: Self = Self(0x07E0);
    /// Cyan (0x07FF)
    pub const CYAN: Self = Self(0x07FF);
    /// Magenta (0xF81F)
    pub const MAGENTA: Self = Self(0xF81F);
    /// Yellow (0xFFE0)
    pub const YELLOW: Self = Self(0xFFE0);
    /// White (0xFFFF)
    pub const WHITE: Self = Self(0xFFFF);

    /// Wrap a raw RGB565 word
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit channels into RGB565, dropping the low bits of each channel
    ///
    /// ```
    /// use st7789::Color;
    ///
    /// assert_eq!(Color::from_rgb(255, 255, 255), Color::WHITE);
    /// assert_eq!(Color::from_rgb(255, 0, 0), Color::RED);
    /// assert_eq!(Color::from_rgb(0, 0, 255), Color::BLUE);
    /// ```
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 >> 3) << 11;
        let g = (g as u16 >> 2) << 5;
        let b = b as u16 >> 3;
        Self(r | g | b)
    }

    /// Raw RGB565 word
    pub const fn into_raw(self) -> u16 {
        self.0
    }

    /// Wire encoding, high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        embedded_graphics_core::pixelcolor::raw::RawU16::new(color.0).into()
    }
}
