//! Recording interface used by the unit tests
//!
//! `MockInterface` logs every call and also decodes the traffic the way the
//! controller would: CASET/RASET set the window, RAMWR starts a row-major
//! pixel stream. Tests can then inspect both the wire sequence and the
//! resulting pixels.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::command::{CASET, RAMWR, RASET};
use crate::config::{BusConfig, Builder, Dimensions};
use crate::display::Display;
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Configure(BusConfig),
    Reset,
    Command(u8),
    Data(Vec<u8>),
    Backlight(bool),
}

#[derive(Debug)]
pub(crate) struct MockError;

#[derive(Debug, Default)]
pub(crate) struct MockInterface {
    pub ops: Vec<Op>,
    /// Fail every call once this many ops have been recorded
    pub fail_after: Option<usize>,
    pub fail_configure: bool,
    /// Pixel writes in arrival order
    pub writes: Vec<(u16, u16, u16)>,
    /// Last color per pixel
    pub pixels: BTreeMap<(u16, u16), u16>,
    command: Option<u8>,
    params: Vec<u8>,
    window: (u16, u16, u16, u16),
    cursor: (u16, u16),
    pending: Option<u8>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<(), MockError> {
        match self.fail_after {
            Some(limit) if self.ops.len() >= limit => Err(MockError),
            _ => Ok(()),
        }
    }

    pub fn commands(&self) -> impl Iterator<Item = u8> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Command(c) => Some(*c),
            _ => None,
        })
    }

    pub fn data_blocks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Data(d) => Some(d.as_slice()),
            _ => None,
        })
    }

    /// Windows programmed with RAMWR, as inclusive rectangles
    pub fn windows(&self) -> Vec<(u16, u16, u16, u16)> {
        let mut windows = Vec::new();
        let mut params: Vec<u8> = Vec::new();
        let mut current = None;
        let (mut cols, mut rows) = ((0, 0), (0, 0));
        for op in &self.ops {
            match op {
                Op::Command(c) => {
                    finish_range(current, &params, &mut cols, &mut rows);
                    params.clear();
                    current = Some(*c);
                    if *c == RAMWR {
                        windows.push((cols.0, rows.0, cols.1, rows.1));
                    }
                }
                Op::Data(d) => params.extend_from_slice(d),
                _ => {}
            }
        }
        windows
    }

    /// Data blocks sent after the last RAMWR
    pub fn last_stream(&self) -> Vec<&[u8]> {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == Op::Command(RAMWR))
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                Op::Data(d) => Some(d.as_slice()),
                _ => None,
            })
            .collect()
    }

    fn accept_pixel_byte(&mut self, byte: u8) {
        let Some(high) = self.pending.take() else {
            self.pending = Some(byte);
            return;
        };
        let color = u16::from_be_bytes([high, byte]);
        let (x, y) = self.cursor;
        self.writes.push((x, y, color));
        self.pixels.insert((x, y), color);

        let (x0, _, x1, _) = self.window;
        self.cursor = if x >= x1 { (x0, y + 1) } else { (x + 1, y) };
    }
}

fn finish_range(
    command: Option<u8>,
    params: &[u8],
    cols: &mut (u16, u16),
    rows: &mut (u16, u16),
) {
    if params.len() < 4 {
        return;
    }
    let start = u16::from_be_bytes([params[0], params[1]]);
    let end = u16::from_be_bytes([params[2], params[3]]);
    match command {
        Some(CASET) => *cols = (start, end),
        Some(RASET) => *rows = (start, end),
        _ => {}
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn configure(&mut self, bus: &BusConfig) -> Result<(), Self::Error> {
        if self.fail_configure {
            return Err(MockError);
        }
        self.check()?;
        self.ops.push(Op::Configure(*bus));
        Ok(())
    }

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.check()?;
        self.ops.push(Op::Command(command));

        let mut cols = (self.window.0, self.window.2);
        let mut rows = (self.window.1, self.window.3);
        finish_range(self.command, &self.params, &mut cols, &mut rows);
        self.window = (cols.0, rows.0, cols.1, rows.1);

        self.command = Some(command);
        self.params.clear();
        self.pending = None;
        if command == RAMWR {
            self.cursor = (self.window.0, self.window.1);
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.check()?;
        self.ops.push(Op::Data(data.to_vec()));
        if self.command == Some(RAMWR) {
            for byte in data {
                self.accept_pixel_byte(*byte);
            }
        } else {
            self.params.extend_from_slice(data);
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.check()?;
        self.ops.push(Op::Reset);
        delay.delay_ms(10);
        delay.delay_ms(10);
        delay.delay_ms(120);
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.check()?;
        self.ops.push(Op::Backlight(on));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockDelay {
    pub delays: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}

/// 240x240 panel with a fresh mock interface
pub(crate) fn test_display() -> Display<MockInterface> {
    let config = Builder::new()
        .dimensions(Dimensions::new(240, 240).unwrap())
        .build()
        .unwrap();
    Display::new(MockInterface::new(), config)
}
