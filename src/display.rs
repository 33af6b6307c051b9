//! Core display operations
//!
//! [`Display`] owns a [`DisplayInterface`] and speaks the ST7789 command/data
//! protocol over it. Nothing is buffered: every call programs the controller
//! directly and returns once the bus transfer has completed.

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{
    CASET, COLMOD, COLMOD_RGB565, DISPOFF, DISPON, IDMOFF, IDMON, INVOFF, INVON, MADCTL, NORON,
    PTLAR, PTLON, RAMWR, RASET, SLPIN, SLPOUT, SWRESET, TE_VBLANK, TE_VHBLANK, TEOFF, TEON,
    VSCRDEF, VSCRSADD,
};
use crate::config::{Config, Dimensions, Rotation};
use crate::error::Error;
use crate::interface::DisplayInterface;

pub(crate) type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Size of the scratch buffer used to stage pixel data, in bytes
pub const TRANSFER_BUFFER_SIZE: usize = 2048;

/// Maximum number of pixels sent in a single bus transfer
pub const TRANSFER_CHUNK_PIXELS: usize = TRANSFER_BUFFER_SIZE / 2;

/// Settle time after a software reset
const SWRESET_DELAY_MS: u32 = 150;
/// Power stabilization after leaving sleep during init
const INIT_SLPOUT_DELAY_MS: u32 = 500;
/// Settle time after leaving sleep outside of init
const SLPOUT_DELAY_MS: u32 = 120;
/// Settle time after entering sleep
const SLPIN_DELAY_MS: u32 = 5;
/// Settle time after register writes during init
const REGISTER_DELAY_MS: u32 = 10;
/// Settle time after switching the display on during init
const DISPON_DELAY_MS: u32 = 100;

/// Tearing effect output line configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TearingEffect {
    /// TE line disabled
    #[default]
    Off,
    /// Signal V-blank only
    Vertical,
    /// Signal V-blank and H-blank
    HorizontalAndVertical,
}

/// Core display driver for the ST7789
///
/// This struct provides direct, unbuffered drawing on the controller. Every
/// operation takes `&mut self`; share a driver between execution contexts
/// by wrapping the whole instance in a mutex, since interleaved commands
/// would corrupt the controller's addressing state.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    pub(crate) interface: I,
    /// Display configuration
    config: Config,
    /// Last rotation written to MADCTL (`None` = native portrait)
    rotation: Option<Rotation>,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent until [`initialize`](Self::initialize) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            rotation: config.rotation,
            config,
        }
    }

    /// Configure the bus, reset the controller and run the power-up sequence
    ///
    /// Blocks for roughly 900ms in total; the delays are timing contracts of
    /// the controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if bus configuration or any transfer
    /// fails. The remaining steps are skipped.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "st7789: initializing {}x{} panel",
            self.config.dimensions.width,
            self.config.dimensions.height
        );
        self.interface
            .configure(&self.config.bus)
            .map_err(Error::Interface)?;
        self.interface.reset(delay).map_err(Error::Interface)?;

        self.send_command(SWRESET)?;
        delay.delay_ms(SWRESET_DELAY_MS);

        self.send_command(SLPOUT)?;
        delay.delay_ms(INIT_SLPOUT_DELAY_MS);

        self.send_command(COLMOD)?;
        self.send_data_byte(COLMOD_RGB565)?;
        delay.delay_ms(REGISTER_DELAY_MS);

        self.send_command(MADCTL)?;
        self.send_data_byte(self.config.initial_madctl())?;
        self.rotation = self.config.rotation;
        delay.delay_ms(REGISTER_DELAY_MS);

        self.set_address_range(0, 0, self.width() - 1, self.height() - 1)?;

        self.invert(self.config.invert_colors)?;
        delay.delay_ms(REGISTER_DELAY_MS);

        self.send_command(NORON)?;
        delay.delay_ms(REGISTER_DELAY_MS);

        self.send_command(DISPON)?;
        delay.delay_ms(DISPON_DELAY_MS);

        if self.config.backlight_on_init {
            self.set_backlight(true)?;
        }

        log::debug!("st7789: init complete");
        Ok(())
    }

    /// Send a command byte (DC low)
    pub fn send_command(&mut self, command: u8) -> DisplayResult<I> {
        self.interface
            .send_command(command)
            .map_err(Error::Interface)
    }

    /// Send a single data byte (DC high)
    pub fn send_data_byte(&mut self, value: u8) -> DisplayResult<I> {
        self.send_data_block(&[value])
    }

    /// Send a 16-bit value as data, high byte first
    ///
    /// ```rust,no_run
    /// # use st7789::{Builder, Dimensions, Display, DisplayInterface, BusConfig};
    /// # use embedded_hal::delay::DelayNs;
    /// # struct Iface;
    /// # impl DisplayInterface for Iface {
    /// #     type Error = core::convert::Infallible;
    /// #     fn configure(&mut self, _bus: &BusConfig) -> Result<(), Self::Error> { Ok(()) }
    /// #     fn send_command(&mut self, _c: u8) -> Result<(), Self::Error> { Ok(()) }
    /// #     fn send_data(&mut self, _d: &[u8]) -> Result<(), Self::Error> { Ok(()) }
    /// #     fn reset<D: DelayNs>(&mut self, _d: &mut D) -> Result<(), Self::Error> { Ok(()) }
    /// #     fn set_backlight(&mut self, _on: bool) -> Result<(), Self::Error> { Ok(()) }
    /// # }
    /// # let dims = match Dimensions::new(240, 240) { Ok(d) => d, Err(_) => return };
    /// # let config = match Builder::new().dimensions(dims).build() { Ok(c) => c, Err(_) => return };
    /// # let mut display = Display::new(Iface, config);
    /// // Transmits [0x12, 0x34]
    /// let _ = display.send_data_word(0x1234);
    /// ```
    pub fn send_data_word(&mut self, value: u16) -> DisplayResult<I> {
        self.send_data_block(&value.to_be_bytes())
    }

    /// Send a block of data bytes in one transfer (DC asserted once)
    pub fn send_data_block(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Program the write window and start a memory write
    ///
    /// Coordinates are inclusive. After this call every pixel sent fills the
    /// window row-major until it is full or another command is issued.
    ///
    /// The window is not clamped: `x0 <= x1`, `y0 <= y1` and bounds are the
    /// caller's contract.
    pub fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        log::trace!("st7789: window ({x0},{y0})..=({x1},{y1})");
        self.set_address_range(x0, y0, x1, y1)?;
        self.send_command(RAMWR)
    }

    /// Write CASET/RASET without starting a memory write
    fn set_address_range(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        self.send_command(CASET)?;
        self.send_data_word(x0)?;
        self.send_data_word(x1)?;

        self.send_command(RASET)?;
        self.send_data_word(y0)?;
        self.send_data_word(y1)
    }

    /// Stream `count` copies of `color` into the current window
    pub(crate) fn write_repeated(&mut self, color: Color, count: usize) -> DisplayResult<I> {
        let mut buffer = [0u8; TRANSFER_BUFFER_SIZE];
        let staged = count.min(TRANSFER_CHUNK_PIXELS);
        let bytes = color.to_be_bytes();
        for pair in buffer[..staged * 2].chunks_exact_mut(2) {
            pair.copy_from_slice(&bytes);
        }

        let mut remaining = count;
        while remaining > 0 {
            let chunk = remaining.min(TRANSFER_CHUNK_PIXELS);
            self.send_data_block(&buffer[..chunk * 2])?;
            remaining -= chunk;
        }
        Ok(())
    }

    /// Stream pixels into the current window, at most
    /// [`TRANSFER_CHUNK_PIXELS`] per transfer
    pub(crate) fn write_pixels<P>(&mut self, pixels: P) -> DisplayResult<I>
    where
        P: IntoIterator<Item = Color>,
    {
        let mut buffer = [0u8; TRANSFER_BUFFER_SIZE];
        let mut len = 0;
        let mut transfers = 0usize;

        for color in pixels {
            buffer[len..len + 2].copy_from_slice(&color.to_be_bytes());
            len += 2;
            if len == TRANSFER_BUFFER_SIZE {
                self.send_data_block(&buffer)?;
                transfers += 1;
                len = 0;
            }
        }
        if len > 0 {
            self.send_data_block(&buffer[..len])?;
            transfers += 1;
        }

        log::trace!("st7789: streamed pixels in {transfers} transfers");
        Ok(())
    }

    /// Set display rotation
    pub fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        log::debug!("st7789: rotation {rotation:?}");
        self.send_command(MADCTL)?;
        self.send_data_byte(rotation.madctl())?;
        self.rotation = Some(rotation);
        Ok(())
    }

    /// Switch the panel output on or off
    ///
    /// Frame memory is kept while the display is off.
    pub fn display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { DISPON } else { DISPOFF })
    }

    /// Enable or disable color inversion
    pub fn invert(&mut self, invert: bool) -> DisplayResult<I> {
        self.send_command(if invert { INVON } else { INVOFF })
    }

    /// Switch the backlight on or off
    pub fn set_backlight(&mut self, on: bool) -> DisplayResult<I> {
        self.interface.set_backlight(on).map_err(Error::Interface)
    }

    /// Enter sleep mode
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("st7789: sleep in");
        self.send_command(SLPIN)?;
        delay.delay_ms(SLPIN_DELAY_MS);
        Ok(())
    }

    /// Leave sleep mode
    pub fn wake<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("st7789: sleep out");
        self.send_command(SLPOUT)?;
        delay.delay_ms(SLPOUT_DELAY_MS);
        Ok(())
    }

    /// Enable or disable idle mode (8 colors, reduced power)
    pub fn set_idle_mode(&mut self, idle: bool) -> DisplayResult<I> {
        self.send_command(if idle { IDMON } else { IDMOFF })
    }

    /// Configure the tearing effect output line
    pub fn set_tearing_effect(&mut self, mode: TearingEffect) -> DisplayResult<I> {
        match mode {
            TearingEffect::Off => self.send_command(TEOFF),
            TearingEffect::Vertical => {
                self.send_command(TEON)?;
                self.send_data_byte(TE_VBLANK)
            }
            TearingEffect::HorizontalAndVertical => {
                self.send_command(TEON)?;
                self.send_data_byte(TE_VHBLANK)
            }
        }
    }

    /// Restrict output to rows `start_row..=end_row` and enter partial mode
    pub fn set_partial_area(&mut self, start_row: u16, end_row: u16) -> DisplayResult<I> {
        self.send_command(PTLAR)?;
        self.send_data_word(start_row)?;
        self.send_data_word(end_row)?;
        self.send_command(PTLON)
    }

    /// Leave partial mode
    pub fn normal_mode(&mut self) -> DisplayResult<I> {
        self.send_command(NORON)
    }

    /// Define the vertical scrolling layout
    ///
    /// The three areas, in lines, should add up to the 320-line frame memory.
    pub fn define_vertical_scroll(
        &mut self,
        top_fixed: u16,
        scroll_area: u16,
        bottom_fixed: u16,
    ) -> DisplayResult<I> {
        self.send_command(VSCRDEF)?;
        self.send_data_word(top_fixed)?;
        self.send_data_word(scroll_area)?;
        self.send_data_word(bottom_fixed)
    }

    /// Set the frame memory line shown at the top of the scrolling area
    pub fn set_vertical_scroll_start(&mut self, line: u16) -> DisplayResult<I> {
        self.send_command(VSCRSADD)?;
        self.send_data_word(line)
    }

    /// Get native display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Last rotation written (`None` = native portrait)
    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    fn swaps_axes(&self) -> bool {
        self.rotation.is_some_and(Rotation::swaps_axes)
    }

    /// Width in the current orientation
    pub fn width(&self) -> u16 {
        if self.swaps_axes() {
            self.config.dimensions.height
        } else {
            self.config.dimensions.width
        }
    }

    /// Height in the current orientation
    pub fn height(&self) -> u16 {
        if self.swaps_axes() {
            self.config.dimensions.width
        } else {
            self.config.dimensions.height
        }
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}
