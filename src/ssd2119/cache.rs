//! Bookkeeping for the write-combining fast path
//!
//! The controller keeps its own GRAM cursor and advances it after every write
//! to [`Cmd::RAM_DATA`]. [`WriteCache`] mirrors that cursor so the driver can
//! tell when an X/Y address write would only restate what the controller
//! already holds, and when the register select of a pixel write can be left out.
//!
//! The mirror is only as good as the traffic it sees. Anything that moves the
//! controller's cursor without going through the driver leaves it stale until
//! the next explicit X/Y address write, or [`WriteCache::invalidate`].

use crate::ssd2119::cmd::Cmd;
use crate::ssd2119::{HEIGHT, WIDTH};

/// How the predicted row wraps when a pixel write runs off the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalWrap {
    /// `(y + 1) % HEIGHT`, what the controller does
    #[default]
    Modulo,
    /// `(y + 1) & HEIGHT`, the arithmetic of the vendor code this driver
    /// replaces. Only equivalent to modulo when `HEIGHT` is `2^n - 1`, which
    /// 240 is not; kept selectable until checked against the hardware.
    Bitmask,
}

/// Which bus phases a register write still needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing goes out, the controller already holds this value
    Suppress,
    /// Register is still selected, only the value goes out
    DataOnly,
    /// Select the register, then write the value
    Full,
}

/// Mirror of the controller's register select and GRAM cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteCache {
    last_register: Option<u8>,
    next_x: Option<u16>,
    next_y: Option<u16>,
    wrap: VerticalWrap,
}

impl WriteCache {
    /// Cache that knows nothing yet
    pub const fn new(wrap: VerticalWrap) -> Self {
        WriteCache {
            last_register: None,
            next_x: None,
            next_y: None,
            wrap,
        }
    }

    /// Decide what a write of `value` to `register` has to put on the bus
    pub fn plan(&self, register: u8, value: u16) -> Phase {
        if register == Cmd::X_RAM_ADDR && self.next_x == Some(value) {
            return Phase::Suppress;
        }
        if register == Cmd::Y_RAM_ADDR && self.next_y == Some(value) {
            return Phase::Suppress;
        }
        // Only pixel data may ride on an earlier select, every other
        // register is selected again
        if register == Cmd::RAM_DATA && self.last_register == Some(register) {
            Phase::DataOnly
        } else {
            Phase::Full
        }
    }

    /// Account for a write that went out on the bus
    pub fn record_write(&mut self, register: u8, value: u16) {
        self.last_register = Some(register);
        // The controller keeps the address modulo the panel size
        match register {
            Cmd::X_RAM_ADDR => self.next_x = Some(value % WIDTH),
            Cmd::Y_RAM_ADDR => self.next_y = Some(value % HEIGHT),
            Cmd::RAM_DATA => self.advance(),
            _ => {}
        }
    }

    /// Account for a register select without a write (a register read)
    pub fn record_select(&mut self, register: u8) {
        self.last_register = Some(register);
    }

    /// Forget everything, the next writes all go out in full
    pub fn invalidate(&mut self) {
        *self = Self::new(self.wrap);
    }

    /// Where the controller will put the next pixel, if known
    pub fn predicted_cursor(&self) -> (Option<u16>, Option<u16>) {
        (self.next_x, self.next_y)
    }

    /// Register the controller currently has selected, if known
    pub fn last_register(&self) -> Option<u8> {
        self.last_register
    }

    fn advance(&mut self) {
        let Some(x) = self.next_x else {
            return;
        };
        let x = x.wrapping_add(1) % WIDTH;
        self.next_x = Some(x);
        if x == 0 {
            self.next_y = self.next_y.map(|y| match self.wrap {
                VerticalWrap::Modulo => y.wrapping_add(1) % HEIGHT,
                VerticalWrap::Bitmask => y.wrapping_add(1) & HEIGHT,
            });
        }
    }
}
