//! Display interface using the FSMC
use core::ptr::{read_volatile, write_volatile};

use crate::ssd2119::pins::Pins;

/// The two registers the panel exposes on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    /// Register select, D/C low
    Command,
    /// Register contents, D/C high
    Data,
}

/// Raw 16 bit access to the command and data registers of the panel.
///
/// There is no error path: the bus is assumed to be configured and the panel
/// present before the first call.
pub trait BusHandle {
    /// Write one 16 bit word to `port`
    fn write16(&mut self, port: Port, value: u16);

    /// Read one 16 bit word from `port`
    fn read16(&mut self, port: Port) -> u16;
}

impl<B: BusHandle + ?Sized> BusHandle for &mut B {
    fn write16(&mut self, port: Port, value: u16) {
        (**self).write16(port, value);
    }

    fn read16(&mut self, port: Port) -> u16 {
        (**self).read16(port)
    }
}

/// Memory mapped bus, the FSMC pretending the panel is an SRAM
///
/// The D/C pin of the panel hangs off address line A19, so the command and
/// data registers are two addresses in bank 1.
pub struct FsmcBus {
    /// Written with D/C low
    command: *mut u16,
    /// Written and read with D/C high
    data: *mut u16,
}

impl FsmcBus {
    /// Bus at arbitrary command/data addresses
    ///
    /// # Safety
    /// Both pointers must stay valid for volatile 16 bit access for the lifetime
    /// of the bus, and nothing else may drive the panel through them.
    pub const unsafe fn new(command: *mut u16, data: *mut u16) -> Self {
        FsmcBus { command, data }
    }

    /// Bus at the bank 1 addresses used by the expansion board
    ///
    /// # Safety
    /// The FSMC must already be configured (see [`crate::board::fsmc`]) and only
    /// one bus may exist.
    pub unsafe fn bank1() -> Self {
        Self::new(
            Pins::LCD_COMMAND_ADDRESS as *mut u16,
            Pins::LCD_DATA_ADDRESS as *mut u16,
        )
    }

    fn address(&self, port: Port) -> *mut u16 {
        match port {
            Port::Command => self.command,
            Port::Data => self.data,
        }
    }
}

impl BusHandle for FsmcBus {
    #[inline(always)]
    fn write16(&mut self, port: Port, value: u16) {
        // SAFETY: validity of the address is the contract of `FsmcBus::new`
        unsafe { write_volatile(self.address(port), value) }
    }

    #[inline(always)]
    fn read16(&mut self, port: Port) -> u16 {
        // SAFETY: see above
        unsafe { read_volatile(self.address(port)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fsmc_bus_hits_separate_addresses() {
        let mut regs = [0u16; 2];
        let base = regs.as_mut_ptr();
        let mut bus = unsafe { FsmcBus::new(base, base.add(1)) };

        bus.write16(Port::Command, 0x22);
        bus.write16(Port::Data, 0xBEEF);

        assert_eq!(bus.read16(Port::Command), 0x22);
        assert_eq!(bus.read16(Port::Data), 0xBEEF);
        drop(bus);
        assert_eq!(regs, [0x22, 0xBEEF]);
    }

    #[test]
    fn bank1_addresses_differ_by_a19() {
        let diff = Pins::LCD_DATA_ADDRESS - Pins::LCD_COMMAND_ADDRESS;
        // 16 bit bus: FSMC A19 is byte address bit 20
        assert_eq!(diff, 1 << (Pins::DC_ADDRESS_LINE + 1));
    }
}
