//! SysTick as the 1 kHz tick source of [`crate::runtime::clock::Clock`]

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;

/// Tick rate the clock expects
pub const TICK_HZ: u32 = 1_000;

/// Largest reload value, the counter is 24 bits
const LOAD_MAX: u32 = 0x00FF_FFFF;

/// Reload value for one tick every millisecond with the core at `hclk_hz`
pub fn reload_for(hclk_hz: u32) -> u32 {
    (hclk_hz / TICK_HZ).saturating_sub(1).min(LOAD_MAX)
}

/// Fire the SysTick exception every millisecond with the core running at `hclk_hz`
///
/// The exception handler has to call [`crate::runtime::clock::Clock::tick`].
pub fn start_millisecond_tick(syst: &mut SYST, hclk_hz: u32) {
    let reload = reload_for(hclk_hz);
    log::info!("SysTick reload {} for {} Hz", reload, hclk_hz);

    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload);
    syst.clear_current();
    syst.enable_counter();
    // Interrupt last, the counter is already running
    syst.enable_interrupt();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millisecond_reload_at_168_mhz() {
        assert_eq!(reload_for(168_000_000), 167_999);
    }

    #[test]
    fn reload_is_clamped_to_24_bits() {
        assert_eq!(reload_for(u32::MAX), LOAD_MAX);
    }

    #[test]
    fn slow_clock_never_underflows() {
        assert_eq!(reload_for(500), 0);
    }
}
