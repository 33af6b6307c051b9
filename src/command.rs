//! ST7789 command definitions
//!
//! This module defines the command bytes used to control the ST7789 TFT
//! controller. Commands are sent over SPI with the DC pin low; their
//! parameters follow with the DC pin high.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send parameter bytes (if any), multi-byte values MSB first
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7789::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // 16-bit color mode
//! let _ = interface.send_command(command::COLMOD);
//! let _ = interface.send_data(&[command::COLMOD_RGB565]);
//!
//! // Turn the panel on
//! let _ = interface.send_command(command::DISPON);
//! ```

// System control commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset (0x01)
///
/// Resets registers to their defaults. Wait at least 120ms before the next
/// command; the init sequence waits 150ms.
pub const SWRESET: u8 = 0x01;

/// Read display ID (0x04)
pub const RDDID: u8 = 0x04;

/// Read display status (0x09)
pub const RDDST: u8 = 0x09;

/// Sleep in (0x10)
///
/// Enters minimum power mode. Wait 5ms before sending further commands.
pub const SLPIN: u8 = 0x10;

/// Sleep out (0x11)
///
/// Leaves sleep mode. The supply and oscillator need time to settle before
/// pixel data is reliable.
pub const SLPOUT: u8 = 0x11;

/// Partial display mode on (0x12)
///
/// Only the rows set with [`PTLAR`] are driven.
pub const PTLON: u8 = 0x12;

/// Normal display mode on (0x13)
///
/// Leaves partial mode.
pub const NORON: u8 = 0x13;

// Display mode commands

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVON: u8 = 0x21;

/// Display off (0x28)
///
/// Frame memory output is disabled; memory contents are kept.
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Memory access commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start MSB, start LSB, end MSB, end LSB]
pub const CASET: u8 = 0x2A;

/// Row address set (0x2B)
///
/// Requires 4 bytes: [start MSB, start LSB, end MSB, end LSB]
pub const RASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Every following data byte is pixel data. The write pointer advances
/// row-major through the window set by [`CASET`] and [`RASET`].
pub const RAMWR: u8 = 0x2C;

/// Memory read (0x2E)
pub const RAMRD: u8 = 0x2E;

/// Partial area (0x30)
///
/// Requires 4 bytes: [start row MSB, start row LSB, end row MSB, end row LSB]
pub const PTLAR: u8 = 0x30;

/// Vertical scrolling definition (0x33)
///
/// Requires 6 bytes: top fixed area, vertical scrolling area and bottom fixed
/// area, each as a 16-bit big-endian line count.
pub const VSCRDEF: u8 = 0x33;

/// Tearing effect line off (0x34)
pub const TEOFF: u8 = 0x34;

/// Tearing effect line on (0x35)
///
/// Requires 1 byte: 0x00 = V-blank only, 0x01 = V-blank and H-blank
pub const TEON: u8 = 0x35;

/// Memory data access control (0x36)
///
/// Requires 1 byte built from the `MADCTL_*` bits.
pub const MADCTL: u8 = 0x36;

/// Vertical scroll start address of RAM (0x37)
///
/// Requires 2 bytes: [line MSB, line LSB]
pub const VSCRSADD: u8 = 0x37;

/// Idle mode off (0x38)
pub const IDMOFF: u8 = 0x38;

/// Idle mode on (0x39)
///
/// Reduces color depth to 8 colors for lower power draw.
pub const IDMON: u8 = 0x39;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte, see [`COLMOD_RGB565`].
pub const COLMOD: u8 = 0x3A;

// Identification commands

/// Read ID1 (0xDA)
pub const RDID1: u8 = 0xDA;

/// Read ID2 (0xDB)
pub const RDID2: u8 = 0xDB;

/// Read ID3 (0xDC)
pub const RDID3: u8 = 0xDC;

/// Read ID4 (0xDD)
pub const RDID4: u8 = 0xDD;

// Parameter values

/// [`COLMOD`] parameter selecting 16 bits per pixel (RGB565)
pub const COLMOD_RGB565: u8 = 0x05;

/// [`TEON`] parameter: output V-blank information only
pub const TE_VBLANK: u8 = 0x00;

/// [`TEON`] parameter: output V-blank and H-blank information
pub const TE_VHBLANK: u8 = 0x01;

// MADCTL bits

/// Row address order (bottom to top)
pub const MADCTL_MY: u8 = 0x80;
/// Column address order (right to left)
pub const MADCTL_MX: u8 = 0x40;
/// Row/column exchange
pub const MADCTL_MV: u8 = 0x20;
/// Vertical refresh order
pub const MADCTL_ML: u8 = 0x10;
/// RGB color order
pub const MADCTL_RGB: u8 = 0x00;
/// BGR color order
pub const MADCTL_BGR: u8 = 0x08;
/// Horizontal refresh order
pub const MADCTL_MH: u8 = 0x04;
