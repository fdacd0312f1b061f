//! Driver stack for the SSD2119 320x240 LCD on the STM32F4 Discovery expansion board.
//!
//! The panel is wired to the FSMC as if it were a 16 bit SRAM, so talking to the
//! controller is a matter of writing to two memory addresses: one selects a
//! register, the other carries its value. On top of that this crate provides:
//!
//! 1. the register protocol with a write-combining fast path, see [`ssd2119::driver::Ssd2119`]
//! 1. the datasheet power-up sequence, see [`ssd2119::driver::Ssd2119::init`]
//! 1. a pixel API and an [`embedded_graphics`] draw target
//! 1. a millisecond [`runtime::clock::Clock`] and an interrupt fed [`runtime::console::Console`]
//!
//! Board register setup lives in [`board`], the demo screens in [`demo`].
//! With the `std` feature the [`sim`] module simulates the controller on the host.
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]

pub mod board;
pub mod demo;
pub mod runtime;
pub mod ssd2119;

#[cfg(any(test, feature = "std"))]
pub mod sim;

pub use crate::ssd2119::cmd::Cmd;
pub use crate::ssd2119::color::pixel_rgb;
pub use crate::ssd2119::driver::{DriverConfig, Protocol, Ssd2119, VerticalWrap, WriteStats};
pub use crate::ssd2119::flag::Flag;
pub use crate::ssd2119::interface::{BusHandle, FsmcBus, Port};
pub use crate::ssd2119::pins::Pins;
pub use crate::ssd2119::{HEIGHT, WIDTH};
