//! LCD demo firmware for the STM32F4 Discovery with the DM-STF4BB expansion board
//!
//! ```text
//! cargo build --release --no-default-features --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! SysTick drives the millisecond clock, the USART6 interrupt fills the
//! console receive ring. Everything else runs in the main loop.
#![no_std]
#![no_main]

use core::convert::Infallible;

use cortex_m::peripheral::NVIC;
use cortex_m_rt::{entry, exception};
use panic_halt as _;
use stm32f4::stm32f407::{self as pac, interrupt, Interrupt};

use ssd2119::board::fsmc::{self, FsmcBank1, FsmcTiming};
use ssd2119::board::gpio::{self, GpioPort};
use ssd2119::board::rcc::Rcc;
use ssd2119::board::systick;
use ssd2119::board::usart::{self, SerialConfig, Usart};
use ssd2119::demo;
use ssd2119::runtime::clock::Clock;
use ssd2119::runtime::console::{Console, SerialPort};
use ssd2119::runtime::ring::RxRing;
use ssd2119::{DriverConfig, FsmcBus, Pins, Ssd2119};

static CLOCK: Clock = Clock::new();
static RX: RxRing = RxRing::new();

/// How long each intro screen stays up
const STEP_DELAY_MS: u32 = 5_000;

#[entry]
fn main() -> ! {
    let (Some(mut cp), Some(dp)) = (cortex_m::Peripherals::take(), pac::Peripherals::take()) else {
        halt();
    };

    let mut rcc = Rcc::new(&dp.RCC, &dp.FLASH);
    let clocks = rcc.configure_168mhz();
    rcc.enable_peripherals();
    systick::start_millisecond_tick(&mut cp.SYST, clocks.hclk);

    // SAFETY: the ports are only configured here, pins are handed out once
    let (mut port_c, mut port_d, mut port_e) = unsafe {
        (
            GpioPort::new(gpio::registers(pac::GPIOC::ptr())),
            GpioPort::new(gpio::registers(pac::GPIOD::ptr())),
            GpioPort::new(gpio::registers(pac::GPIOE::ptr())),
        )
    };

    usart::configure_pins(&mut port_c);
    let mut serial = Usart::new(&dp.USART6);
    serial.configure(SerialConfig {
        pclk_hz: clocks.pclk2,
        ..SerialConfig::default()
    });
    // SAFETY: the handler only reads SR and DR and pushes into RX
    unsafe { NVIC::unmask(Interrupt::USART6) };
    let mut console = Console::new(serial, &RX);

    console.write_string("\nMy LCD Demo 0.1\n");
    console.write_string("LCD Init ...\n");

    fsmc::configure_pins(&mut port_d, &mut port_e);
    FsmcBank1::new(&dp.FSMC).configure(FsmcTiming::default());

    // SAFETY: bank 1 is configured and this is the only bus
    let mut lcd = Ssd2119::new(unsafe { FsmcBus::bank1() }, DriverConfig::default());
    let mut rst = port_d.output(Pins::RST);
    let mut backlight = port_d.output(Pins::BACKLIGHT);
    if lcd
        .init_with_backlight(&mut rst, &mut backlight, &mut CLOCK.delay_provider())
        .is_err()
    {
        console.write_string("LCD init failed\n");
        halt();
    }

    if let Err(never) = run_demo(&mut lcd, &mut console) {
        match never {}
    }
    halt();
}

fn run_demo<P: SerialPort>(
    lcd: &mut Ssd2119<FsmcBus>,
    console: &mut Console<'_, P>,
) -> Result<(), Infallible> {
    demo::splash(lcd)?;
    console.write_string("Done [LCD Init]\n");
    console.write_string(" Next step in 5 seconds ... Screen should GREEN\n");
    CLOCK.delay(STEP_DELAY_MS);

    demo::rgb_test(lcd)?;
    console.write_string(" Next step in 5 seconds, screen should be MULTICOLORED\n");
    CLOCK.delay(STEP_DELAY_MS);

    lcd.set_background(0x00, 0x00, 0x00);
    demo::title(lcd, "LCD Demonstration")?;

    let mut round: u32 = 0;
    loop {
        demo::run_round(lcd, console, &CLOCK, round)?;
        round = round.wrapping_add(1);
    }
}

fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}

#[exception]
fn SysTick() {
    CLOCK.tick();
}

#[interrupt]
fn USART6() {
    // SAFETY: only SR and DR are touched, the main thread never reads DR
    let serial = Usart::new(unsafe { &*pac::USART6::ptr() });
    serial.on_interrupt(&RX);
}
