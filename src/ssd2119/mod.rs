//! SSD2119 LCD Driver
//!
//! Used on the [Embest DM-STF4BB](https://www.embest-tech.com/) expansion board for the
//! STM32F4 Discovery, where the panel is hooked to the FSMC as a 16 bit 8080 style bus.
//!
//! ### Usage
//! Everything goes through [`driver::Ssd2119`]:
//!
//! 1. wrap the two FSMC addresses in a [`interface::FsmcBus`] (or any other [`interface::BusHandle`])
//! 1. run [`driver::Ssd2119::init`] once after the bus is configured
//! 1. write pixels with [`driver::Ssd2119::write_pixel`], or draw with
//! [`embedded_graphics`](https://github.com/embedded-graphics/embedded-graphics)
//!
//! Horizontal runs of pixels are cheap: the controller auto-increments its RAM
//! address after each pixel and the driver skips address writes it can predict.

pub mod cache;
pub mod cmd;
pub mod color;
pub mod driver;
pub mod flag;
pub mod graphics;
pub mod interface;
pub mod pins;

/// Display width, pixels horizontally
pub const WIDTH: u16 = 320;

/// Display height, pixels vertically
pub const HEIGHT: u16 = 240;
