//! SSD2119 Display Driver Implementation
//!
//! This module contains the register protocol, the power-up sequence and the
//! pixel API of the SSD2119 LCD controller.
//!
//! ## Architecture
//!
//! ### Register Protocol
//! - `write_register()` - select a register, then write its value
//! - `read_register()` - select a register, then read it back
//!
//! ### Initialization
//! - `init()` - reset pulse and the datasheet register script
//! - `init_with_backlight()` - the same with the backlight dark until the panel is filled
//! - `enter_sleep()` / `exit_sleep()` - sleep mode register writes
//!
//! ### Pixel API
//! - `write_pixel()` - X address, Y address, pixel data
//! - `fill_rect()` / `set_background()` - loops over `write_pixel()`
//!
//! ## Critical Implementation Details
//!
//! ### Write combining
//!
//! With [`Protocol::WriteCombining`] the driver tracks the controller's GRAM
//! cursor (see [`crate::ssd2119::cache`]). An X or Y address write that names
//! the position the cursor already sits on is dropped entirely, and repeated
//! pixel data writes skip the register select. A full-screen fill then costs one
//! bus write per pixel instead of six.
//!
//! ### Bypassing the driver
//!
//! Writing the X/Y address registers through the bus directly desynchronizes
//! the cursor mirror and pixels land in the wrong place, silently. Call
//! [`Ssd2119::invalidate_cache`] after touching the controller some other way.

pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

pub use crate::ssd2119::cache::VerticalWrap;
use crate::ssd2119::cache::{Phase, WriteCache};
use crate::ssd2119::color::pixel_rgb;
use crate::ssd2119::interface::{BusHandle, Port};
use crate::ssd2119::{cmd::Cmd, flag::Flag, HEIGHT, WIDTH};

/// Time the reset line is held low, per datasheet
const RESET_DELAY_MS: u32 = 100;
/// Settle time after leaving sleep mode
const SLEEP_EXIT_DELAY_MS: u32 = 50;

/// How register writes are put on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// Every write selects its register and then writes the value
    Naive,
    /// Skip address writes the controller's auto-increment already covers
    #[default]
    WriteCombining,
}

/// Driver configuration, fixed for the lifetime of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriverConfig {
    /// Bus protocol
    pub protocol: Protocol,
    /// Row wraparound used when predicting the cursor
    pub vertical_wrap: VerticalWrap,
}

/// Diagnostic counters of register writes, wrapping at `u32::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteStats {
    /// Register selects written to the command port
    pub address_phases: u32,
    /// Values written to the data port
    pub data_phases: u32,
    /// Writes dropped because the controller already held the value
    pub suppressed: u32,
}

/// SSD2119 LCD Driver
///
/// Owns the bus handle and the mirror of the controller's state. There should
/// be exactly one per panel, created once the bus is configured.
pub struct Ssd2119<B> {
    bus: B,
    config: DriverConfig,
    cache: WriteCache,
    stats: WriteStats,
}

impl<B> Ssd2119<B>
where
    B: BusHandle,
{
    /// Create the driver, the panel is not touched until [`Ssd2119::init`]
    pub fn new(bus: B, config: DriverConfig) -> Self {
        Ssd2119 {
            bus,
            config,
            cache: WriteCache::new(config.vertical_wrap),
            stats: WriteStats::default(),
        }
    }

    /// Give the bus handle back
    pub fn release(self) -> B {
        self.bus
    }

    /// Configuration the driver was created with
    pub fn config(&self) -> DriverConfig {
        self.config
    }

    /// The bus handle
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Counters of what went out on the bus so far
    pub fn stats(&self) -> WriteStats {
        self.stats
    }

    /// Where the driver expects the controller's cursor to be
    pub fn predicted_cursor(&self) -> (Option<u16>, Option<u16>) {
        self.cache.predicted_cursor()
    }

    /// Forget the mirrored controller state, the next writes all go out in full
    pub fn invalidate_cache(&mut self) {
        log::debug!("Write cache invalidated");
        self.cache.invalidate();
    }

    /// Write `value` to the controller register `register`
    pub fn write_register(&mut self, register: u8, value: u16) {
        let phase = match self.config.protocol {
            Protocol::Naive => Phase::Full,
            Protocol::WriteCombining => self.cache.plan(register, value),
        };

        match phase {
            Phase::Suppress => {
                self.stats.suppressed = self.stats.suppressed.wrapping_add(1);
                return;
            }
            Phase::Full => {
                self.bus.write16(Port::Command, u16::from(register));
                self.stats.address_phases = self.stats.address_phases.wrapping_add(1);
            }
            Phase::DataOnly => {}
        }
        self.bus.write16(Port::Data, value);
        self.stats.data_phases = self.stats.data_phases.wrapping_add(1);

        if self.config.protocol == Protocol::WriteCombining {
            self.cache.record_write(register, value);
        }
    }

    /// Read the controller register `register`
    pub fn read_register(&mut self, register: u8) -> u16 {
        self.bus.write16(Port::Command, u16::from(register));
        self.stats.address_phases = self.stats.address_phases.wrapping_add(1);
        self.cache.record_select(register);
        self.bus.read16(Port::Data)
    }

    /// Device code of the controller, 0x9919 for an SSD2119
    pub fn device_code(&mut self) -> u16 {
        self.read_register(Cmd::DEVICE_CODE_READ)
    }

    /// Reset the panel and run the power-up register script
    ///
    /// The order and the two delays are dictated by the datasheet. A shortened
    /// sequence gives a blank or garbled panel without any error to show for it.
    pub fn init<RST, DELAY>(&mut self, rst: &mut RST, delay: &mut DELAY) -> Result<(), DisplayError>
    where
        RST: OutputPin,
        DELAY: DelayNs,
    {
        log::info!("Initializing LCD with SSD2119 datasheet sequence");

        // Hardware reset first, the controller forgets its cursor too
        self.reset(rst, delay)?;
        self.invalidate_cache();

        // Step 1: Enter sleep mode (if not already there) and start the oscillator
        self.write_register(Cmd::SLEEP_MODE_1, Flag::SLEEP_ENTER);
        self.write_register(Cmd::PWR_CTRL_5, Flag::PWR_CTRL_5_VCOMH);
        self.write_register(Cmd::OSC_START, Flag::OSC_ON);

        // Step 2: Scanning direction and AC drive
        self.write_register(Cmd::OUTPUT_CTRL, Flag::OUTPUT_CTRL_DEFAULT);
        self.write_register(Cmd::LCD_DRIVE_AC_CTRL, Flag::AC_CTRL_LINE_INVERSION);

        // Step 3: Exit sleep mode
        self.write_register(Cmd::SLEEP_MODE_1, Flag::SLEEP_EXIT);
        delay.delay_ms(SLEEP_EXIT_DELAY_MS);

        // Step 4: Pixel format and MCU interface
        self.write_register(Cmd::ENTRY_MODE, Flag::ENTRY_MODE_65K_INC);

        // Step 5: Analog parameters, display on
        self.write_register(Cmd::SLEEP_MODE_2, Flag::SLEEP_MODE_2_DEFAULT);
        self.write_register(Cmd::ANALOG_SET, Flag::ANALOG_SET_DEFAULT);
        self.write_register(Cmd::DISPLAY_CTRL, Flag::DISPLAY_ON);
        self.write_register(Cmd::PWR_CTRL_2, Flag::PWR_CTRL_2_VCIX2);

        // Step 6: Gamma and the remaining power registers
        self.configure_gamma();
        self.write_register(Cmd::PWR_CTRL_3, Flag::PWR_CTRL_3_VLCD63);
        self.write_register(Cmd::PWR_CTRL_4, Flag::PWR_CTRL_4_VCOML);

        // Step 7: GRAM window over the whole panel, cursor to the origin
        self.use_full_frame();
        self.write_register(Cmd::X_RAM_ADDR, 0x0000);
        self.write_register(Cmd::Y_RAM_ADDR, 0x0000);

        // One pixel so the cursor mirror starts from a known position
        self.write_register(Cmd::RAM_DATA, 0x0000);

        log::info!("LCD initialization done");
        Ok(())
    }

    /// Power up with the backlight off until the panel holds a defined image
    ///
    /// Reset, backlight off, register script, green background, backlight on.
    /// Without the fill the backlight would show whatever GRAM held at power-up.
    pub fn init_with_backlight<RST, BL, DELAY>(
        &mut self,
        rst: &mut RST,
        backlight: &mut BL,
        delay: &mut DELAY,
    ) -> Result<(), DisplayError>
    where
        RST: OutputPin,
        BL: OutputPin,
        DELAY: DelayNs,
    {
        backlight.set_low().map_err(|_| DisplayError::RSError)?;
        self.init(rst, delay)?;
        self.set_background(0x00, 0xFF, 0x00);
        backlight.set_high().map_err(|_| DisplayError::RSError)?;
        log::info!("LCD backlight on");
        Ok(())
    }

    /// Put the panel to sleep, GRAM contents are kept
    pub fn enter_sleep(&mut self) {
        log::info!("LCD entering sleep mode");
        self.write_register(Cmd::SLEEP_MODE_1, Flag::SLEEP_ENTER);
    }

    /// Wake the panel and wait for it to settle
    pub fn exit_sleep(&mut self, delay: &mut impl DelayNs) {
        log::info!("LCD leaving sleep mode");
        self.write_register(Cmd::SLEEP_MODE_1, Flag::SLEEP_EXIT);
        delay.delay_ms(SLEEP_EXIT_DELAY_MS);
    }

    /// Write one pixel
    ///
    /// Coordinates are not checked, the controller wraps them itself.
    pub fn write_pixel(&mut self, x: u16, y: u16, color: u16) {
        self.write_register(Cmd::X_RAM_ADDR, x);
        self.write_register(Cmd::Y_RAM_ADDR, y);
        self.write_register(Cmd::RAM_DATA, color);
    }

    /// Fill a rectangle row by row, clipped to the panel
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: u16) {
        let x_end = x.saturating_add(width).min(WIDTH);
        let y_end = y.saturating_add(height).min(HEIGHT);
        for row in y..y_end {
            for column in x..x_end {
                self.write_pixel(column, row, color);
            }
        }
    }

    /// Fill the whole panel with one color
    pub fn set_background(&mut self, r: u8, g: u8, b: u8) {
        self.fill_rect(0, 0, WIDTH, HEIGHT, pixel_rgb(r, g, b));
    }

    /// Hold the reset line low for the datasheet time, then release it
    fn reset<RST, DELAY>(&mut self, rst: &mut RST, delay: &mut DELAY) -> Result<(), DisplayError>
    where
        RST: OutputPin,
        DELAY: DelayNs,
    {
        rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_DELAY_MS);
        rst.set_high().map_err(|_| DisplayError::RSError)?;
        Ok(())
    }

    /// Gamma control 1..10
    fn configure_gamma(&mut self) {
        const GAMMA_REGISTERS: [u8; 10] = [
            Cmd::GAMMA_CTRL_1,
            Cmd::GAMMA_CTRL_2,
            Cmd::GAMMA_CTRL_3,
            Cmd::GAMMA_CTRL_4,
            Cmd::GAMMA_CTRL_5,
            Cmd::GAMMA_CTRL_6,
            Cmd::GAMMA_CTRL_7,
            Cmd::GAMMA_CTRL_8,
            Cmd::GAMMA_CTRL_9,
            Cmd::GAMMA_CTRL_10,
        ];
        for (register, value) in GAMMA_REGISTERS.into_iter().zip(Flag::GAMMA) {
            self.write_register(register, value);
        }
    }

    /// Set the GRAM window to the full panel
    fn use_full_frame(&mut self) {
        self.write_register(Cmd::V_RAM_POS, Flag::V_RAM_POS_FULL);
        self.write_register(Cmd::H_RAM_START, Flag::H_RAM_START_FULL);
        self.write_register(Cmd::H_RAM_END, Flag::H_RAM_END_FULL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimPin, SimulatedPanel};
    use embedded_hal::digital::PinState;

    struct NoDelay {
        total_ms: u32,
    }

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns.div_ceil(1_000_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
        }
    }

    fn driver(protocol: Protocol) -> Ssd2119<SimulatedPanel> {
        Ssd2119::new(
            SimulatedPanel::new(),
            DriverConfig {
                protocol,
                ..DriverConfig::default()
            },
        )
    }

    fn initialized(protocol: Protocol) -> Ssd2119<SimulatedPanel> {
        let mut lcd = driver(protocol);
        lcd.init(&mut SimPin::new(), &mut NoDelay { total_ms: 0 })
            .expect("init");
        lcd
    }

    #[test]
    fn naive_protocol_always_writes_both_phases() {
        let mut lcd = driver(Protocol::Naive);
        lcd.write_pixel(0, 0, 0xFFFF);
        lcd.write_pixel(1, 0, 0xFFFF);

        let traffic = lcd.bus().traffic();
        assert_eq!(traffic.commands, 6);
        assert_eq!(traffic.data, 6);
        assert_eq!(lcd.stats().suppressed, 0);
    }

    #[test]
    fn sequential_pixels_only_write_data() {
        let mut lcd = driver(Protocol::WriteCombining);
        lcd.write_pixel(10, 20, 1);
        lcd.bus_mut_for_test().clear_traffic();

        lcd.write_pixel(11, 20, 2);
        lcd.write_pixel(12, 20, 3);

        let traffic = lcd.bus().traffic();
        assert_eq!(traffic.commands, 0);
        assert_eq!(traffic.data, 2);
        assert_eq!(lcd.bus().pixel(11, 20), 2);
        assert_eq!(lcd.bus().pixel(12, 20), 3);
        assert_eq!(lcd.stats().suppressed, 4);
    }

    #[test]
    fn jump_rewrites_only_the_changed_coordinate() {
        let mut lcd = driver(Protocol::WriteCombining);
        lcd.write_pixel(0, 5, 1);
        lcd.bus_mut_for_test().clear_traffic();

        lcd.write_pixel(100, 5, 2);

        let traffic = lcd.bus().traffic();
        assert_eq!(traffic.address_writes, 1);
        // X select, RAM_DATA select again
        assert_eq!(traffic.commands, 2);
        assert_eq!(lcd.bus().pixel(100, 5), 2);
    }

    #[test]
    fn read_register_reselects() {
        let mut lcd = driver(Protocol::WriteCombining);
        lcd.write_pixel(0, 0, 1);
        assert_eq!(lcd.read_register(Cmd::X_RAM_ADDR), 0);

        // RAM_DATA must be selected again after the read
        lcd.bus_mut_for_test().clear_traffic();
        lcd.write_pixel(1, 0, 2);
        assert_eq!(lcd.bus().traffic().commands, 1);
        assert_eq!(lcd.bus().pixel(1, 0), 2);
    }

    #[test]
    fn pixel_address_reads_back_for_every_position() {
        for protocol in [Protocol::Naive, Protocol::WriteCombining] {
            let mut lcd = driver(protocol);
            for y in 0..HEIGHT {
                for x in 0..WIDTH {
                    lcd.write_pixel(x, y, x ^ y);
                    assert_eq!(lcd.read_register(Cmd::X_RAM_ADDR), x);
                    assert_eq!(lcd.read_register(Cmd::Y_RAM_ADDR), y);
                }
            }
            assert_eq!(lcd.bus().pixel(WIDTH - 1, HEIGHT - 1), (WIDTH - 1) ^ (HEIGHT - 1));
        }
    }

    #[test]
    fn write_combining_matches_naive_output() {
        let mut naive = driver(Protocol::Naive);
        let mut fast = driver(Protocol::WriteCombining);

        // Three runs crossing row ends, plus the bottom-right corner wrap
        let runs: [(u16, u16, u32); 3] = [(300, 10, 700), (5, 100, 320), (310, 239, 30)];
        for (x0, y0, count) in runs {
            let (mut x, mut y) = (x0, y0);
            for i in 0..count {
                let color = (i as u16).wrapping_mul(2654);
                naive.write_pixel(x, y, color);
                fast.write_pixel(x, y, color);
                x = (x + 1) % WIDTH;
                if x == 0 {
                    y = (y + 1) % HEIGHT;
                }
            }
        }

        assert_eq!(naive.bus().pixel_log(), fast.bus().pixel_log());
        assert!(fast.bus().traffic().address_writes <= naive.bus().traffic().address_writes);
        assert!(fast.bus().traffic().address_writes < 10);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                assert_eq!(naive.bus().pixel(x, y), fast.bus().pixel(x, y));
            }
        }
    }

    #[test]
    fn full_panel_fill_needs_two_address_writes() {
        let mut lcd = driver(Protocol::WriteCombining);
        lcd.set_background(0x00, 0xFF, 0x00);

        let traffic = lcd.bus().traffic();
        assert_eq!(traffic.pixel_writes, 76_800);
        assert!(traffic.address_writes <= 2);
        // X select, Y select, one RAM_DATA select
        assert_eq!(traffic.commands, 3);
        assert_eq!(lcd.bus().pixel(WIDTH - 1, HEIGHT - 1), 0x07E0);
        assert_eq!(lcd.predicted_cursor(), (Some(0), Some(0)));
    }

    #[test]
    fn fill_after_init_stays_cheap() {
        let mut lcd = initialized(Protocol::WriteCombining);
        lcd.bus_mut_for_test().clear_traffic();
        lcd.set_background(0, 0, 0xFF);

        let traffic = lcd.bus().traffic();
        assert_eq!(traffic.pixel_writes, u32::from(WIDTH) * u32::from(HEIGHT));
        assert!(traffic.address_writes <= 2);
    }

    #[test]
    fn bitmask_wrap_misplaces_pixels_after_first_row() {
        let config = DriverConfig {
            protocol: Protocol::WriteCombining,
            vertical_wrap: VerticalWrap::Bitmask,
        };
        let mut lcd = Ssd2119::new(SimulatedPanel::new(), config);
        for x in 0..WIDTH {
            lcd.write_pixel(x, 0, 0x1111);
        }
        // Mirror says row 0, controller sits on row 1
        lcd.write_pixel(0, 0, 0x2222);
        assert_eq!(lcd.bus().pixel(0, 0), 0x1111);
        assert_eq!(lcd.bus().pixel(0, 1), 0x2222);
    }

    #[test]
    fn stale_cache_recovers_after_invalidate() {
        let mut lcd = driver(Protocol::WriteCombining);
        lcd.write_pixel(0, 0, 1);
        lcd.bus_mut_for_test().poke_cursor(50, 50);

        lcd.write_pixel(1, 0, 2);
        assert_eq!(lcd.bus().pixel(50, 50), 2);

        lcd.invalidate_cache();
        lcd.write_pixel(1, 0, 3);
        assert_eq!(lcd.bus().pixel(1, 0), 3);
    }

    #[test]
    fn init_pulses_reset_and_honours_delays() {
        let mut lcd = driver(Protocol::WriteCombining);
        let mut rst = SimPin::new();
        let mut delay = NoDelay { total_ms: 0 };
        lcd.init(&mut rst, &mut delay).expect("init");

        assert_eq!(rst.history(), &[PinState::Low, PinState::High]);
        assert!(delay.total_ms >= RESET_DELAY_MS + SLEEP_EXIT_DELAY_MS);

        let panel = lcd.bus();
        assert_eq!(panel.register(Cmd::ENTRY_MODE), 0x6830);
        assert_eq!(panel.register(Cmd::OUTPUT_CTRL), 0x30EF);
        assert_eq!(panel.register(Cmd::V_RAM_POS), 0xEF00);
        assert_eq!(panel.register(Cmd::H_RAM_START), 0x0000);
        assert_eq!(panel.register(Cmd::H_RAM_END), 319);
        assert_eq!(panel.register(Cmd::GAMMA_CTRL_9), 0x0a00);
        assert_eq!(panel.register(Cmd::GAMMA_CTRL_10), 0x1000);
        assert_eq!(panel.register(Cmd::SLEEP_MODE_1), 0x0000);
        assert_eq!(panel.cursor(), (1, 0));
        assert_eq!(lcd.predicted_cursor(), (Some(1), Some(0)));
    }

    #[test]
    fn backlight_comes_on_after_first_fill() {
        let mut lcd = driver(Protocol::WriteCombining);
        let mut rst = SimPin::new();
        let mut backlight = SimPin::new();
        lcd.init_with_backlight(&mut rst, &mut backlight, &mut NoDelay { total_ms: 0 })
            .expect("init");

        assert_eq!(backlight.history(), &[PinState::Low, PinState::High]);
        assert_eq!(rst.history(), &[PinState::Low, PinState::High]);
        assert_eq!(lcd.bus().pixel(0, 0), 0x07E0);
        assert_eq!(lcd.bus().pixel(WIDTH - 1, HEIGHT - 1), 0x07E0);
    }

    #[test]
    fn stats_wrap_instead_of_overflowing() {
        let mut lcd = driver(Protocol::WriteCombining);
        lcd.stats.data_phases = u32::MAX;
        lcd.stats.address_phases = u32::MAX;
        lcd.write_register(Cmd::ENTRY_MODE, 0x6830);
        assert_eq!(lcd.stats().data_phases, 0);
        assert_eq!(lcd.stats().address_phases, 0);

        lcd.write_pixel(0, 0, 1);
        lcd.stats.suppressed = u32::MAX;
        lcd.write_pixel(1, 0, 2);
        assert_eq!(lcd.stats().suppressed, 1);

        lcd.stats.address_phases = u32::MAX;
        lcd.read_register(Cmd::X_RAM_ADDR);
        assert_eq!(lcd.stats().address_phases, 0);
    }

    #[test]
    fn oversized_x_lands_where_the_controller_puts_it() {
        let mut lcd = driver(Protocol::WriteCombining);
        lcd.write_pixel(u16::MAX, 5, 0x1111);
        lcd.write_pixel(0, 6, 0x2222);
        lcd.write_pixel(1, 6, 0x3333);

        assert_eq!(lcd.bus().pixel(u16::MAX % WIDTH, 5), 0x1111);
        assert_eq!(lcd.bus().pixel(0, 6), 0x2222);
        assert_eq!(lcd.bus().pixel(1, 6), 0x3333);
        assert_eq!(lcd.bus().cursor(), (2, 6));
    }

    #[test]
    fn init_twice_gives_same_state() {
        let mut once = initialized(Protocol::WriteCombining);
        let mut twice = initialized(Protocol::WriteCombining);
        twice
            .init(&mut SimPin::new(), &mut NoDelay { total_ms: 0 })
            .expect("second init");

        for register in [
            Cmd::V_RAM_POS,
            Cmd::H_RAM_START,
            Cmd::H_RAM_END,
            Cmd::ENTRY_MODE,
            Cmd::OUTPUT_CTRL,
        ] {
            assert_eq!(once.bus().register(register), twice.bus().register(register));
        }
        assert_eq!(once.bus().cursor(), twice.bus().cursor());
        assert_eq!(once.device_code(), twice.device_code());
    }

    #[test]
    fn sleep_round_trip() {
        let mut lcd = initialized(Protocol::WriteCombining);
        let mut delay = NoDelay { total_ms: 0 };
        lcd.enter_sleep();
        assert_eq!(lcd.bus().register(Cmd::SLEEP_MODE_1), 1);
        lcd.exit_sleep(&mut delay);
        assert_eq!(lcd.bus().register(Cmd::SLEEP_MODE_1), 0);
        assert_eq!(delay.total_ms, SLEEP_EXIT_DELAY_MS);
    }

    #[test]
    fn fill_rect_clips_to_panel() {
        let mut lcd = driver(Protocol::WriteCombining);
        lcd.fill_rect(310, 230, 50, 50, 0xABCD);
        assert_eq!(lcd.bus().traffic().pixel_writes, 100);
        assert_eq!(lcd.bus().pixel(319, 239), 0xABCD);
        assert_eq!(lcd.bus().pixel(309, 239), 0);
    }

    impl Ssd2119<SimulatedPanel> {
        fn bus_mut_for_test(&mut self) -> &mut SimulatedPanel {
            &mut self.bus
        }
    }
}
