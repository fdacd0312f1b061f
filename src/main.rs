//! Host run of the LCD demo against the simulated controller
//!
//! A thread stands in for the SysTick interrupt, another one for the USART
//! receive interrupt by feeding stdin into the receive ring. The panel
//! contents are saved as PNG after each screen.
//!
//! ```text
//! lcd-sim [OUT_DIR] [ROUNDS]
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::Context;

use ssd2119::demo;
use ssd2119::runtime::clock::Clock;
use ssd2119::runtime::console::Console;
use ssd2119::runtime::ring::RxRing;
use ssd2119::sim::{SimPin, SimulatedPanel, StdoutPort};
use ssd2119::{DriverConfig, Ssd2119, HEIGHT, WIDTH};

static CLOCK: Clock = Clock::new();
static RX: RxRing = RxRing::new();

/// How long each intro screen stays up
const STEP_DELAY_MS: u32 = 5_000;
const DEFAULT_ROUNDS: u32 = 4;

fn spawn_interrupts() {
    thread::spawn(|| loop {
        thread::sleep(Duration::from_millis(1));
        CLOCK.tick();
    });

    thread::spawn(|| {
        let mut stdin = std::io::stdin().lock();
        let mut byte = [0u8; 1];
        while let Ok(1) = stdin.read(&mut byte) {
            RX.push(byte[0]);
        }
        log::debug!("stdin closed, no more console input");
    });
}

fn save_snapshot(panel: &SimulatedPanel, dir: &Path, name: &str) -> anyhow::Result<()> {
    let image = image::RgbImage::from_raw(u32::from(WIDTH), u32::from(HEIGHT), panel.to_rgb888())
        .context("GRAM size does not match the panel")?;
    let path = dir.join(format!("{name}.png"));
    image
        .save(&path)
        .with_context(|| format!("Could not write {}", path.display()))?;
    log::info!("Saved {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "snapshots".into()));
    let rounds = match args.next() {
        Some(value) => value
            .parse::<u32>()
            .with_context(|| format!("ROUNDS must be a number, got {value:?}"))?,
        None => DEFAULT_ROUNDS,
    };
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Could not create {}", out_dir.display()))?;

    spawn_interrupts();
    let mut console = Console::new(StdoutPort, &RX);

    console.write_string("\nMy LCD Demo 0.1\n");
    console.write_string("LCD Init ...\n");

    let mut lcd = Ssd2119::new(SimulatedPanel::new(), DriverConfig::default());
    let mut rst = SimPin::new();
    let mut backlight = SimPin::new();
    if let Err(e) = lcd.init_with_backlight(&mut rst, &mut backlight, &mut CLOCK.delay_provider()) {
        log::error!("LCD init failed: {:?}", e);
        return Err(anyhow::anyhow!("LCD init failed: {:?}", e));
    }
    log::info!("Device code {:#06x}", lcd.device_code());

    demo::splash(&mut lcd)?;
    save_snapshot(lcd.bus(), &out_dir, "splash")?;
    console.write_string("Done [LCD Init]\n");
    console.write_string(" Next step in 5 seconds ... Screen should GREEN\n");
    CLOCK.delay(STEP_DELAY_MS);

    demo::rgb_test(&mut lcd)?;
    save_snapshot(lcd.bus(), &out_dir, "rgb-test")?;
    console.write_string(" Next step in 5 seconds, screen should be MULTICOLORED\n");
    CLOCK.delay(STEP_DELAY_MS);

    lcd.set_background(0x00, 0x00, 0x00);
    demo::title(&mut lcd, "LCD Demonstration")?;

    for round in 0..rounds {
        demo::run_round(&mut lcd, &mut console, &CLOCK, round)?;
        save_snapshot(lcd.bus(), &out_dir, &format!("round-{round}"))?;
    }

    let stats = lcd.stats();
    log::info!(
        "Bus traffic: {} address phases, {} data phases, {} suppressed",
        stats.address_phases,
        stats.data_phases,
        stats.suppressed
    );
    if RX.dropped() > 0 {
        log::warn!("{} console bytes dropped", RX.dropped());
    }
    Ok(())
}
