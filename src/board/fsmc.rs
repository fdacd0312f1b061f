//! FSMC bank 1 set up as a 16 bit SRAM for the LCD
//!
//! The panel sits on the FSMC as if it were a static RAM. The board only has
//! the 100 pin package, so instead of the real read/write strobes it uses:
//!
//! | FSMC  | LCD    |
//! |-------|--------|
//! | NOE   | RD     |
//! | NWE   | WR     |
//! | NE1   | CS     |
//! | A19   | DC     |
//!
//! The bus has to be 16 bits wide for A19 to land where the code expects, see
//! [`crate::ssd2119::pins::Pins::LCD_DATA_ADDRESS`].

use stm32f4::stm32f407::fsmc;

use crate::board::gpio::{GpioPort, Speed, AF_FSMC};
use crate::ssd2119::pins::Pins;

/// MWID value for a 16 bit wide bus
const MWID_16: u8 = 0b01;

/// Bank 1 read/write timing in HCLK cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsmcTiming {
    /// ADDSET, 0..=15
    pub address_setup: u8,
    /// DATAST, 1..=255
    pub data_setup: u8,
}

impl Default for FsmcTiming {
    /// Address setup 1 cycle, data setup 9 cycles, enough for the SSD2119 at 168 MHz
    fn default() -> Self {
        FsmcTiming {
            address_setup: 1,
            data_setup: 9,
        }
    }
}

/// NOR/SRAM bank 1 of the FSMC
pub struct FsmcBank1<'a> {
    regs: &'a fsmc::RegisterBlock,
}

impl<'a> FsmcBank1<'a> {
    /// The FSMC clock (RCC AHB3ENR) must be enabled
    pub fn new(regs: &'a fsmc::RegisterBlock) -> Self {
        FsmcBank1 { regs }
    }

    /// Configure the bank as a 16 bit, write enabled SRAM
    pub fn configure(&mut self, timing: FsmcTiming) {
        log::info!(
            "Configuring FSMC bank 1: address setup {} / data setup {} cycles",
            timing.address_setup,
            timing.data_setup
        );
        // Timing first, the bank is enabled last
        self.regs.btr1.write(|w| unsafe {
            w.bits(0)
                .addset()
                .bits(timing.address_setup)
                .datast()
                .bits(timing.data_setup)
        });
        self.regs.bcr1.write(|w| unsafe {
            w.bits(0)
                .mwid()
                .bits(MWID_16)
                .wren()
                .set_bit()
                .mbken()
                .set_bit()
        });
    }
}

/// Hand the FSMC data and strobe lines to the FSMC and make reset/backlight outputs
///
/// The GPIOD/GPIOE clocks must be enabled.
pub fn configure_pins(port_d: &mut GpioPort, port_e: &mut GpioPort) {
    port_d.set_alternate(&Pins::FSMC_PORT_D, AF_FSMC, Speed::High);
    port_e.set_alternate(&Pins::FSMC_PORT_E, AF_FSMC, Speed::High);
    port_d.set_output(&[Pins::RST, Pins::BACKLIGHT], Speed::Medium);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::gpio::GpioRegisters;
    use crate::board::image::RegisterImage;

    #[test]
    fn default_timing_register_values() {
        let image = RegisterImage::new();
        // Reset value of BCR1 has extra bits set, they must not survive
        image.set_word(0x00, 0x0000_30DB);
        let regs: &fsmc::RegisterBlock = image.block();

        FsmcBank1::new(regs).configure(FsmcTiming::default());

        assert_eq!(regs.bcr1.read().bits(), 0x0000_1011);
        assert_eq!(regs.btr1.read().bits(), 0x0000_0901);
    }

    #[test]
    fn timing_fields_are_masked() {
        let image = RegisterImage::new();
        let regs: &fsmc::RegisterBlock = image.block();
        let timing = FsmcTiming {
            address_setup: 0x1F,
            data_setup: 0xFF,
        };
        FsmcBank1::new(regs).configure(timing);

        assert_eq!(regs.btr1.read().bits(), 0x0000_FF0F);
    }

    #[test]
    fn pins_switch_to_fsmc() {
        let d = RegisterImage::new();
        let e = RegisterImage::new();
        let mut port_d = GpioPort::new(d.block::<GpioRegisters>());
        let mut port_e = GpioPort::new(e.block::<GpioRegisters>());
        configure_pins(&mut port_d, &mut port_e);

        // PD0, PD1 alternate function, PD3 output
        assert_eq!(d.word(0x00) & 0xFF, 0b0100_1010);
        // AF12 on PD0 in AFRL
        assert_eq!(d.word(0x20) & 0xF, 12);
        // PE15 is AF12 in AFRH
        assert_eq!(e.word(0x24) >> 28, 12);
        // PD13 backlight is an output
        assert_eq!((d.word(0x00) >> 26) & 0b11, 0b01);
    }
}
