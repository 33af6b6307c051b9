//! Display configuration types and builder

use embedded_hal::spi::{MODE_0, Mode};

use crate::command::{MADCTL_MV, MADCTL_MX, MADCTL_MY, MADCTL_RGB};
pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Default SPI clock requested from the bus (40 MHz)
pub const DEFAULT_CLOCK_HZ: u32 = 40_000_000;

/// Display dimensions in the panel's native (portrait) orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns (width in pixels)
    pub width: u16,
    /// Number of rows (height in pixels)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or greater than MAX_COLUMNS (240)
    /// - height is 0 or greater than MAX_ROWS (320)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees
    Rotate270,
}

impl Rotation {
    /// MADCTL register value selecting this rotation
    ///
    /// ```
    /// use st7789::Rotation;
    ///
    /// assert_eq!(Rotation::Rotate0.madctl(), 0xC0);
    /// assert_eq!(Rotation::Rotate90.madctl(), 0xA0);
    /// assert_eq!(Rotation::Rotate180.madctl(), 0x00);
    /// assert_eq!(Rotation::Rotate270.madctl(), 0x60);
    /// ```
    pub const fn madctl(self) -> u8 {
        match self {
            Self::Rotate0 => MADCTL_MX | MADCTL_MY | MADCTL_RGB,
            Self::Rotate90 => MADCTL_MY | MADCTL_MV | MADCTL_RGB,
            Self::Rotate180 => MADCTL_RGB,
            Self::Rotate270 => MADCTL_MX | MADCTL_MV | MADCTL_RGB,
        }
    }

    /// Whether rows and columns are exchanged
    pub const fn swaps_axes(self) -> bool {
        self.madctl() & MADCTL_MV != 0
    }
}

/// SPI bus settings requested during initialization
///
/// The chip select line is owned by the [`SpiDevice`](embedded_hal::spi::SpiDevice),
/// so every transfer is chip-select qualified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusConfig {
    /// Clock polarity and phase
    pub mode: Mode,
    /// Clock frequency in Hz
    pub clock_hz: u32,
    /// Bits per transfer word
    pub word_bits: u8,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            mode: MODE_0,
            clock_hz: DEFAULT_CLOCK_HZ,
            word_bits: 8,
        }
    }
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Rotation written during initialization
    ///
    /// `None` writes the native portrait pattern (MADCTL = 0x00).
    pub rotation: Option<Rotation>,
    /// SPI bus settings
    pub bus: BusConfig,
    /// Turn on display inversion during init (panel-specific)
    pub invert_colors: bool,
    /// Switch the backlight on at the end of init
    pub backlight_on_init: bool,
}

impl Config {
    /// MADCTL value written during initialization
    pub fn initial_madctl(&self) -> u8 {
        self.rotation.map_or(MADCTL_RGB, Rotation::madctl)
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7789::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(240, 240) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate90).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Rotation written during init
    rotation: Option<Rotation>,
    /// SPI bus settings
    bus: BusConfig,
    /// Display inversion during init
    invert_colors: bool,
    /// Backlight state after init
    backlight_on_init: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: None,
            bus: BusConfig::default(),
            // Most ST7789 IPS panels need inversion for correct colors
            invert_colors: true,
            backlight_on_init: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the rotation written during init
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Set SPI bus settings
    pub fn bus(mut self, bus: BusConfig) -> Self {
        self.bus = bus;
        self
    }

    /// Set SPI mode
    pub fn spi_mode(mut self, mode: Mode) -> Self {
        self.bus.mode = mode;
        self
    }

    /// Set SPI clock frequency in Hz
    pub fn clock_hz(mut self, clock_hz: u32) -> Self {
        self.bus.clock_hz = clock_hz;
        self
    }

    /// Set whether display inversion is enabled during init
    pub fn invert_colors(mut self, value: bool) -> Self {
        self.invert_colors = value;
        self
    }

    /// Set whether the backlight is switched on at the end of init
    pub fn backlight_on_init(mut self, value: bool) -> Self {
        self.backlight_on_init = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
            bus: self.bus,
            invert_colors: self.invert_colors,
            backlight_on_init: self.backlight_on_init,
        })
    }
}
