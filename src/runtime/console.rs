//! Blocking serial console
//!
//! Output spins on the transmitter, one byte at a time. Input comes out of the
//! [`RxRing`] the receive interrupt fills.

use core::fmt;

use crate::runtime::ring::RxRing;

/// Transmit side of a UART
pub trait SerialPort {
    /// True when the transmit data register can take another byte
    fn tx_empty(&mut self) -> bool;

    /// Hand one byte to the transmitter, only valid after [`SerialPort::tx_empty`]
    fn write_tx(&mut self, byte: u8);
}

impl<P: SerialPort + ?Sized> SerialPort for &mut P {
    fn tx_empty(&mut self) -> bool {
        (**self).tx_empty()
    }

    fn write_tx(&mut self, byte: u8) {
        (**self).write_tx(byte);
    }
}

/// Console over a UART and its receive ring
pub struct Console<'a, P> {
    port: P,
    rx: &'a RxRing,
}

impl<'a, P: SerialPort> Console<'a, P> {
    /// Console writing to `port` and reading what the interrupt put in `rx`
    pub fn new(port: P, rx: &'a RxRing) -> Self {
        Console { port, rx }
    }

    /// Give the port back
    pub fn release(self) -> P {
        self.port
    }

    /// The port
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Transmit one byte, waiting for the previous one to leave
    pub fn write_char(&mut self, byte: u8) {
        while !self.port.tx_empty() {
            core::hint::spin_loop();
        }
        self.port.write_tx(byte);
    }

    /// Transmit a string, sending CR before every LF
    pub fn write_string(&mut self, s: &str) {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.write_char(b'\r');
            }
            self.write_char(byte);
        }
    }

    /// Next received byte
    ///
    /// With `wait` the call spins until a byte arrives and always returns
    /// `Some`. Without it an empty ring gives `None` straight away.
    pub fn read_char(&mut self, wait: bool) -> Option<u8> {
        if wait {
            Some(self.rx.recv())
        } else {
            self.rx.try_recv()
        }
    }
}

impl<P: SerialPort> fmt::Write for Console<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}
