//! Host side stand-ins for the hardware
//!
//! [`SimulatedPanel`] behaves like an SSD2119 sitting on the bus: it keeps a
//! register file and a GRAM, moves its cursor on address writes and
//! auto-increments it after each pixel. It also counts bus traffic so tests
//! can check what the driver put on the wire.

use std::io::Write;
use std::vec::Vec;

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, PinState};

use crate::runtime::console::SerialPort;
use crate::ssd2119::cmd::Cmd;
use crate::ssd2119::flag::Flag;
use crate::ssd2119::interface::{BusHandle, Port};
use crate::ssd2119::{HEIGHT, WIDTH};

/// Bus traffic seen by a [`SimulatedPanel`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Traffic {
    /// Words written to the command port
    pub commands: u32,
    /// Words written to the data port
    pub data: u32,
    /// Data words that landed in the X or Y address register
    pub address_writes: u32,
    /// Data words that landed in GRAM
    pub pixel_writes: u32,
}

/// Software model of the SSD2119 as seen from the bus
pub struct SimulatedPanel {
    selected: u8,
    registers: [u16; 256],
    cursor: (u16, u16),
    gram: Vec<u16>,
    pixel_log: Vec<u16>,
    traffic: Traffic,
}

impl Default for SimulatedPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedPanel {
    /// Panel with every register and pixel at zero
    pub fn new() -> Self {
        SimulatedPanel {
            selected: 0,
            registers: [0; 256],
            cursor: (0, 0),
            gram: vec![0; WIDTH as usize * HEIGHT as usize],
            pixel_log: Vec::new(),
            traffic: Traffic::default(),
        }
    }

    /// Value last stored in `register`
    ///
    /// The X/Y address registers report the address of the last GRAM access,
    /// or the last value written if no pixel was written since.
    pub fn register(&self, register: u8) -> u16 {
        self.registers[register as usize]
    }

    /// Pixel stored at `(x, y)`
    pub fn pixel(&self, x: u16, y: u16) -> u16 {
        self.gram[Self::index(x, y)]
    }

    /// Where the next pixel write will land
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Every pixel word written to GRAM, in bus order
    pub fn pixel_log(&self) -> &[u16] {
        &self.pixel_log
    }

    /// Counters of bus traffic so far
    pub fn traffic(&self) -> Traffic {
        self.traffic
    }

    /// Zero the traffic counters and the pixel log
    pub fn clear_traffic(&mut self) {
        self.traffic = Traffic::default();
        self.pixel_log.clear();
    }

    /// Move the GRAM cursor behind the driver's back, like a second bus master would
    pub fn poke_cursor(&mut self, x: u16, y: u16) {
        self.cursor = (x % WIDTH, y % HEIGHT);
    }

    /// GRAM expanded to 8 bits per channel, row-major RGB triplets
    pub fn to_rgb888(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.gram.len() * 3);
        for &pixel in &self.gram {
            let r = ((pixel >> 11) & 0x1F) as u8;
            let g = ((pixel >> 5) & 0x3F) as u8;
            let b = (pixel & 0x1F) as u8;
            out.extend_from_slice(&[(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2)]);
        }
        out
    }

    fn index(x: u16, y: u16) -> usize {
        y as usize * WIDTH as usize + x as usize
    }

    fn write_data(&mut self, value: u16) {
        match self.selected {
            Cmd::RAM_DATA => {
                let (x, y) = self.cursor;
                self.gram[Self::index(x, y)] = value;
                self.pixel_log.push(value);
                self.traffic.pixel_writes += 1;
                self.registers[Cmd::X_RAM_ADDR as usize] = x;
                self.registers[Cmd::Y_RAM_ADDR as usize] = y;

                let x = (x + 1) % WIDTH;
                let y = if x == 0 { (y + 1) % HEIGHT } else { y };
                self.cursor = (x, y);
            }
            Cmd::X_RAM_ADDR => {
                self.traffic.address_writes += 1;
                self.registers[Cmd::X_RAM_ADDR as usize] = value;
                self.cursor.0 = value % WIDTH;
            }
            Cmd::Y_RAM_ADDR => {
                self.traffic.address_writes += 1;
                self.registers[Cmd::Y_RAM_ADDR as usize] = value;
                self.cursor.1 = value % HEIGHT;
            }
            register => self.registers[register as usize] = value,
        }
    }
}

impl BusHandle for SimulatedPanel {
    fn write16(&mut self, port: Port, value: u16) {
        match port {
            Port::Command => {
                self.traffic.commands += 1;
                self.selected = value as u8;
            }
            Port::Data => {
                self.traffic.data += 1;
                self.write_data(value);
            }
        }
    }

    fn read16(&mut self, port: Port) -> u16 {
        match (port, self.selected) {
            (Port::Command, _) => 0,
            (Port::Data, Cmd::DEVICE_CODE_READ) => Flag::DEVICE_CODE,
            (Port::Data, Cmd::RAM_DATA) => {
                let (x, y) = self.cursor;
                self.pixel(x, y)
            }
            (Port::Data, register) => self.registers[register as usize],
        }
    }
}

/// Output pin that remembers every level it was driven to
#[derive(Debug, Default)]
pub struct SimPin {
    history: Vec<PinState>,
}

impl SimPin {
    /// Pin that has not been driven yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Levels in the order they were set
    pub fn history(&self) -> &[PinState] {
        &self.history
    }

    /// Current level, if driven at all
    pub fn state(&self) -> Option<PinState> {
        self.history.last().copied()
    }
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.history.push(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.history.push(PinState::High);
        Ok(())
    }
}

/// Serial port whose transmitter is standard output, always ready
#[derive(Debug, Default)]
pub struct StdoutPort;

impl SerialPort for StdoutPort {
    fn tx_empty(&mut self) -> bool {
        true
    }

    fn write_tx(&mut self, byte: u8) {
        let mut out = std::io::stdout().lock();
        // A closed stdout has nowhere to report to
        let _ = out.write_all(&[byte]);
        if byte == b'\n' {
            let _ = out.flush();
        }
    }
}

/// Serial port that collects transmitted bytes, for tests
#[derive(Debug, Default)]
pub struct CapturePort {
    /// Everything transmitted so far
    pub sent: Vec<u8>,
}

impl SerialPort for CapturePort {
    fn tx_empty(&mut self) -> bool {
        true
    }

    fn write_tx(&mut self, byte: u8) {
        self.sent.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_auto_increments_and_wraps() {
        let mut panel = SimulatedPanel::new();
        panel.write16(Port::Command, Cmd::X_RAM_ADDR as u16);
        panel.write16(Port::Data, WIDTH - 1);
        panel.write16(Port::Command, Cmd::Y_RAM_ADDR as u16);
        panel.write16(Port::Data, HEIGHT - 1);
        panel.write16(Port::Command, Cmd::RAM_DATA as u16);
        panel.write16(Port::Data, 0xF800);
        panel.write16(Port::Data, 0x07E0);

        assert_eq!(panel.pixel(WIDTH - 1, HEIGHT - 1), 0xF800);
        assert_eq!(panel.pixel(0, 0), 0x07E0);
        assert_eq!(panel.cursor(), (1, 0));
        assert_eq!(
            panel.traffic(),
            Traffic {
                commands: 3,
                data: 4,
                address_writes: 2,
                pixel_writes: 2,
            }
        );
    }

    #[test]
    fn reports_device_code() {
        let mut panel = SimulatedPanel::new();
        panel.write16(Port::Command, Cmd::DEVICE_CODE_READ as u16);
        assert_eq!(panel.read16(Port::Data), 0x9919);
    }

    #[test]
    fn rgb888_expansion_hits_full_scale() {
        let mut panel = SimulatedPanel::new();
        panel.write16(Port::Command, Cmd::RAM_DATA as u16);
        panel.write16(Port::Data, 0xFFFF);
        assert_eq!(&panel.to_rgb888()[..6], &[0xFF, 0xFF, 0xFF, 0, 0, 0]);
    }
}
