//! STM32F4 GPIO port configuration
//!
//! Just enough to hand pins to a peripheral and to drive the LCD reset and
//! backlight lines. All ports share the GPIOA register layout, pins are picked
//! at run time so the per-pin field accessors of the PAC don't apply.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use stm32f4::stm32f407::gpioa;

/// Register block of any GPIO port
pub type GpioRegisters = gpioa::RegisterBlock;

/// Alternate function number of the FSMC
pub const AF_FSMC: u8 = 12;
/// Alternate function number of USART6
pub const AF_USART6: u8 = 8;

const MODE_OUTPUT: u32 = 0b01;
const MODE_ALTERNATE: u32 = 0b10;

/// Output slew rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    /// 2 MHz
    Low = 0b00,
    /// 25 MHz
    Medium = 0b01,
    /// 50 MHz
    High = 0b10,
    /// 100 MHz
    VeryHigh = 0b11,
}

/// Registers of the port behind `ptr`, as the common GPIO layout
///
/// ```ignore
/// let port_d = GpioPort::new(unsafe { gpio::registers(pac::GPIOD::ptr()) });
/// ```
///
/// # Safety
/// `ptr` must be the register block pointer of a GPIO port from the PAC, and
/// the port must not be configured from anywhere else at the same time.
pub unsafe fn registers<T>(ptr: *const T) -> &'static GpioRegisters {
    &*ptr.cast::<GpioRegisters>()
}

/// One GPIO port
pub struct GpioPort<'a> {
    regs: &'a GpioRegisters,
}

impl<'a> GpioPort<'a> {
    /// The port's clock must already be enabled, see [`crate::board::rcc`]
    pub fn new(regs: &'a GpioRegisters) -> Self {
        GpioPort { regs }
    }

    /// Route `pins` to alternate function `af`, push-pull
    pub fn set_alternate(&mut self, pins: &[u8], af: u8, speed: Speed) {
        let af = u32::from(af & 0xF);
        for &pin in pins {
            self.set_mode(pin, MODE_ALTERNATE);
            self.set_speed(pin, speed);
            if pin < 8 {
                let shift = u32::from(pin) * 4;
                self.regs
                    .afrl
                    .modify(|r, w| unsafe { w.bits((r.bits() & !(0xF << shift)) | (af << shift)) });
            } else {
                let shift = u32::from(pin - 8) * 4;
                self.regs
                    .afrh
                    .modify(|r, w| unsafe { w.bits((r.bits() & !(0xF << shift)) | (af << shift)) });
            }
        }
    }

    /// Make `pins` push-pull outputs
    pub fn set_output(&mut self, pins: &[u8], speed: Speed) {
        for &pin in pins {
            self.set_mode(pin, MODE_OUTPUT);
            self.set_speed(pin, speed);
        }
    }

    /// Output handle for one pin of this port
    pub fn output(&self, pin: u8) -> GpioOutput<'a> {
        GpioOutput {
            regs: self.regs,
            pin,
        }
    }

    fn set_mode(&mut self, pin: u8, mode: u32) {
        let shift = u32::from(pin) * 2;
        self.regs
            .moder
            .modify(|r, w| unsafe { w.bits((r.bits() & !(0b11 << shift)) | (mode << shift)) });
    }

    fn set_speed(&mut self, pin: u8, speed: Speed) {
        let shift = u32::from(pin) * 2;
        let speed = speed as u32;
        self.regs
            .ospeedr
            .modify(|r, w| unsafe { w.bits((r.bits() & !(0b11 << shift)) | (speed << shift)) });
    }
}

/// A pin driven through its port's bit set/reset register
///
/// BSRR sets or resets single bits without a read-modify-write, so handles
/// for different pins of one port don't get in each other's way.
pub struct GpioOutput<'a> {
    regs: &'a GpioRegisters,
    pin: u8,
}

impl ErrorType for GpioOutput<'_> {
    type Error = Infallible;
}

impl OutputPin for GpioOutput<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let bit = 1 << (u32::from(self.pin) + 16);
        self.regs.bsrr.write(|w| unsafe { w.bits(bit) });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let bit = 1 << u32::from(self.pin);
        self.regs.bsrr.write(|w| unsafe { w.bits(bit) });
        Ok(())
    }
}
