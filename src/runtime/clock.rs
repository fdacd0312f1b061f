//! Millisecond timebase
//!
//! A [`Clock`] counts timer interrupts. The SysTick handler is the only writer
//! ([`Clock::tick`]); everyone else reads. The counter is an atomic, so a spin
//! loop re-reads it on every pass instead of looping on a stale copy.
//!
//! ```ignore
//! static CLOCK: Clock = Clock::new();
//!
//! #[exception]
//! fn SysTick() {
//!     CLOCK.tick();
//! }
//! ```

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use embedded_hal::delay::DelayNs;

/// Milliseconds since boot, wraps after about 49.7 days
pub struct Clock {
    millis: AtomicU32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Clock at zero, usable in a `static`
    pub const fn new() -> Self {
        Clock {
            millis: AtomicU32::new(0),
        }
    }

    /// Advance by one millisecond, called from the timer interrupt
    pub fn tick(&self) {
        // Single writer, a load/store pair would do; fetch_add wraps the same way
        self.millis.fetch_add(1, Ordering::Release);
    }

    /// Milliseconds since boot
    pub fn now(&self) -> u32 {
        self.millis.load(Ordering::Acquire)
    }

    /// Spin until `ms` milliseconds have passed
    ///
    /// Nothing but interrupt handlers runs meanwhile. There is no timeout: with
    /// the timer interrupt disabled this never returns.
    pub fn delay(&self, ms: u32) {
        let start = self.now();
        while self.now().wrapping_sub(start) < ms {
            core::hint::spin_loop();
        }
    }

    /// Time since boot, split into clock fields
    pub fn uptime(&self) -> Uptime {
        Uptime::from_millis(self.now())
    }

    /// [`DelayNs`] provider backed by this clock
    pub fn delay_provider(&self) -> Delay<'_> {
        Delay { clock: self }
    }
}

/// Blocking delays on top of a [`Clock`]
///
/// Resolution is one tick: anything shorter than a millisecond waits a full one.
pub struct Delay<'a> {
    clock: &'a Clock,
}

impl DelayNs for Delay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.delay(ns.div_ceil(1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.delay(us.div_ceil(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.delay(ms);
    }
}

/// Elapsed time as hours, minutes, seconds and milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    /// Whole hours, not wrapped
    pub hours: u32,
    /// 0..60
    pub minutes: u8,
    /// 0..60
    pub seconds: u8,
    /// 0..1000
    pub millis: u16,
}

impl Uptime {
    /// Split a millisecond count
    pub const fn from_millis(ms: u32) -> Self {
        Uptime {
            hours: ms / 3_600_000,
            minutes: ((ms / 60_000) % 60) as u8,
            seconds: ((ms / 1_000) % 60) as u8,
            millis: (ms % 1_000) as u16,
        }
    }

    /// True during every tenth second (0, 10, 20, ...)
    pub fn on_ten_second_mark(&self) -> bool {
        self.seconds % 10 == 0
    }
}

/// `HH:MM:SS.mmm`, hours wrap at 24
impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours % 24,
            self.minutes,
            self.seconds,
            self.millis
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn counts_ticks() {
        let clock = Clock::new();
        for _ in 0..1234 {
            clock.tick();
        }
        assert_eq!(clock.now(), 1234);
    }

    #[test]
    fn counter_wraps() {
        let clock = Clock {
            millis: AtomicU32::new(u32::MAX),
        };
        clock.tick();
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn delay_waits_for_interrupts() {
        let clock = Arc::new(Clock::new());
        for _ in 0..100 {
            clock.tick();
        }

        let ticker = {
            let clock = Arc::clone(&clock);
            thread::spawn(move || {
                for _ in 0..60 {
                    thread::sleep(Duration::from_micros(200));
                    clock.tick();
                }
            })
        };

        clock.delay(50);
        assert!(clock.now() >= 150);
        ticker.join().unwrap();
    }

    #[test]
    fn delay_across_wraparound() {
        let clock = Arc::new(Clock {
            millis: AtomicU32::new(u32::MAX - 5),
        });
        let ticker = {
            let clock = Arc::clone(&clock);
            thread::spawn(move || {
                for _ in 0..20 {
                    thread::sleep(Duration::from_micros(200));
                    clock.tick();
                }
            })
        };

        clock.delay(10);
        // 6 ticks to reach zero, then at least 4 more
        assert!(clock.now() >= 4 && clock.now() < 20);
        ticker.join().unwrap();
    }

    #[test]
    fn zero_delay_returns_at_once() {
        let clock = Clock::new();
        clock.delay(0);
        clock.delay_provider().delay_ns(0);
    }

    #[test]
    fn uptime_formatting() {
        let uptime = Uptime::from_millis(3_723_045);
        assert_eq!(uptime.to_string(), "01:02:03.045");
        assert!(!uptime.on_ten_second_mark());

        let uptime = Uptime::from_millis(25 * 3_600_000 + 20_000);
        assert_eq!(uptime.hours, 25);
        assert_eq!(uptime.to_string(), "01:00:20.000");
        assert!(uptime.on_ten_second_mark());
    }
}
