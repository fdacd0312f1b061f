//! Board bring-up for the STM32F4 Discovery with the DM-STF4BB expansion board
//!
//! Peripheral setup on top of the `stm32f4` register definitions and the
//! `cortex-m` core peripherals. Each driver borrows the register block it
//! works on, so the same code runs against the real peripheral or an
//! in-memory register image.
//!
//! Bring-up order, as [`rcc`] leaves the clocks:
//!
//! 1. [`rcc::Rcc::configure_168mhz`] and [`rcc::Rcc::enable_peripherals`]
//! 1. [`systick::start_millisecond_tick`]
//! 1. [`usart::configure_pins`] and [`usart::Usart::configure`]
//! 1. [`fsmc::configure_pins`] and [`fsmc::FsmcBank1::configure`]

pub mod fsmc;
pub mod gpio;
pub mod rcc;
pub mod systick;
pub mod usart;
