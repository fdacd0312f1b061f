//! Timebase and serial console
//!
//! Both are fed from interrupt handlers and read from the main loop. Every
//! wait in here is a busy spin; there is no scheduler to yield to.

pub mod clock;
pub mod console;
pub mod ring;
