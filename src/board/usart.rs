//! STM32F4 USART driver for the console
//!
//! Transmit is polled, receive is interrupt driven: the USART interrupt calls
//! [`Usart::on_interrupt`], which moves the received byte into an [`RxRing`].
//!
//! ```ignore
//! static RX: RxRing = RxRing::new();
//!
//! #[interrupt]
//! fn USART6() {
//!     // SAFETY: the handler only touches SR and DR
//!     let usart = Usart::new(unsafe { &*pac::USART6::ptr() });
//!     usart.on_interrupt(&RX);
//! }
//! ```

use stm32f4::stm32f407::usart1;

use crate::board::gpio::{GpioPort, Speed, AF_USART6};
use crate::runtime::console::SerialPort;
use crate::runtime::ring::RxRing;
use crate::ssd2119::pins::Pins;

/// Register block shared by USART1 and USART6
pub type UsartRegisters = usart1::RegisterBlock;

/// Line settings, always 8 data bits, no parity, 1 stop bit, no flow control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    /// Bits per second
    pub baud: u32,
    /// Clock of the APB bus the USART hangs off
    pub pclk_hz: u32,
}

impl Default for SerialConfig {
    /// 115200 baud on APB2 with the core at 168 MHz
    fn default() -> Self {
        SerialConfig {
            baud: 115_200,
            pclk_hz: 84_000_000,
        }
    }
}

impl SerialConfig {
    /// BRR for 16x oversampling, rounded to the nearest step
    fn brr(&self) -> u32 {
        (self.pclk_hz + self.baud / 2) / self.baud
    }
}

/// One USART peripheral
pub struct Usart<'a> {
    regs: &'a UsartRegisters,
}

impl<'a> Usart<'a> {
    /// The USART clock must be enabled and its pins routed
    pub fn new(regs: &'a UsartRegisters) -> Self {
        Usart { regs }
    }

    /// Set up 8N1 at the configured baud rate and enable the receive interrupt
    ///
    /// The NVIC line of the USART still has to be unmasked by the caller.
    pub fn configure(&mut self, config: SerialConfig) {
        log::info!("Configuring USART: {} baud 8N1", config.baud);

        let brr = config.brr();
        self.regs.cr1.write(|w| unsafe { w.bits(0) });
        self.regs.brr.write(|w| unsafe {
            w.bits(0)
                .div_mantissa()
                .bits((brr >> 4) as u16)
                .div_fraction()
                .bits((brr & 0xF) as u8)
        });
        self.regs.cr2.modify(|_, w| unsafe { w.stop().bits(0b00) });
        self.regs
            .cr3
            .modify(|_, w| w.rtse().clear_bit().ctse().clear_bit());
        self.regs.cr1.modify(|_, w| {
            w.m()
                .clear_bit()
                .pce()
                .clear_bit()
                .te()
                .set_bit()
                .re()
                .set_bit()
        });
        // Enable the USART, then let it raise receive interrupts
        self.regs.cr1.modify(|_, w| w.ue().set_bit());
        self.regs.cr1.modify(|_, w| w.rxneie().set_bit());
    }

    /// Receive interrupt body: move a pending byte into `ring`
    pub fn on_interrupt(&self, ring: &RxRing) {
        if self.regs.sr.read().rxne().bit_is_set() {
            // Reading DR clears RXNE
            ring.push((self.regs.dr.read().dr().bits() & 0xFF) as u8);
        }
    }
}

/// Route the console TX/RX lines of GPIOC to USART6
pub fn configure_pins(port_c: &mut GpioPort) {
    port_c.set_alternate(&[Pins::CONSOLE_TX, Pins::CONSOLE_RX], AF_USART6, Speed::Medium);
}

impl SerialPort for Usart<'_> {
    fn tx_empty(&mut self) -> bool {
        self.regs.sr.read().txe().bit_is_set()
    }

    fn write_tx(&mut self, byte: u8) {
        self.regs.dr.write(|w| unsafe { w.dr().bits(u16::from(byte)) });
    }
}
