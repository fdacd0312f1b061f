//! Reset and clock control: the core at 168 MHz from the 8 MHz crystal
//!
//! ```text
//! HSE 8 MHz / PLLM 8 * PLLN 336 = 336 MHz VCO
//!   / PLLP 2  = 168 MHz SYSCLK = HCLK
//!   / PLLQ 7  = 48 MHz USB/SDIO
//! HCLK / 4    = 42 MHz APB1
//! HCLK / 2    = 84 MHz APB2 (USART6)
//! ```

use stm32f4::stm32f407::{flash, rcc};

const PLLM: u8 = 8;
const PLLN: u16 = 336;
/// PLLP field value for divide by 2
const PLLP_DIV2: u8 = 0b00;
const PLLQ: u8 = 7;

/// Flash wait states for 168 MHz at 3.3 V
const FLASH_LATENCY: u8 = 5;

const HPRE_DIV1: u8 = 0b0000;
const PPRE_DIV2: u8 = 0b100;
const PPRE_DIV4: u8 = 0b101;

/// SW/SWS value selecting the main PLL
const SW_PLL: u8 = 0b10;

/// Bus frequencies after [`Rcc::configure_168mhz`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clocks {
    pub sysclk: u32,
    /// Core and AHB, the SysTick source
    pub hclk: u32,
    /// APB1
    pub pclk1: u32,
    /// APB2, USART6 hangs off this one
    pub pclk2: u32,
}

pub struct Rcc<'a> {
    rcc: &'a rcc::RegisterBlock,
    flash: &'a flash::RegisterBlock,
}

impl<'a> Rcc<'a> {
    pub fn new(rcc: &'a rcc::RegisterBlock, flash: &'a flash::RegisterBlock) -> Self {
        Rcc { rcc, flash }
    }

    /// Start the crystal and the main PLL and switch the system clock over
    pub fn configure_168mhz(&mut self) -> Clocks {
        let hse_hz: u32 = 8_000_000;
        let vco = hse_hz / u32::from(PLLM) * u32::from(PLLN);
        let sysclk = vco / 2;
        let clocks = Clocks {
            sysclk,
            hclk: sysclk,
            pclk1: sysclk / 4,
            pclk2: sysclk / 2,
        };

        self.rcc.cr.modify(|_, w| w.hseon().set_bit());
        while self.rcc.cr.read().hserdy().bit_is_clear() {}

        // Wait states before the clock goes up
        self.flash.acr.write(|w| unsafe {
            w.bits(0)
                .latency()
                .bits(FLASH_LATENCY)
                .prften()
                .set_bit()
                .icen()
                .set_bit()
                .dcen()
                .set_bit()
        });
        while self.flash.acr.read().latency().bits() != FLASH_LATENCY {}

        self.rcc.cfgr.modify(|_, w| unsafe {
            w.hpre()
                .bits(HPRE_DIV1)
                .ppre1()
                .bits(PPRE_DIV4)
                .ppre2()
                .bits(PPRE_DIV2)
        });

        self.rcc.pllcfgr.write(|w| unsafe {
            w.bits(0)
                .pllm()
                .bits(PLLM)
                .plln()
                .bits(PLLN)
                .pllp()
                .bits(PLLP_DIV2)
                .pllsrc()
                .set_bit()
                .pllq()
                .bits(PLLQ)
        });
        self.rcc.cr.modify(|_, w| w.pllon().set_bit());
        while self.rcc.cr.read().pllrdy().bit_is_clear() {}

        self.rcc.cfgr.modify(|_, w| unsafe { w.sw().bits(SW_PLL) });
        while self.rcc.cfgr.read().sws().bits() != SW_PLL {}

        log::info!(
            "Clocks: SYSCLK {} Hz, APB1 {} Hz, APB2 {} Hz",
            clocks.sysclk,
            clocks.pclk1,
            clocks.pclk2
        );
        clocks
    }

    /// Clock the GPIO ports, the FSMC and USART6
    pub fn enable_peripherals(&mut self) {
        self.rcc.ahb1enr.modify(|_, w| {
            w.gpiocen()
                .set_bit()
                .gpioden()
                .set_bit()
                .gpioeen()
                .set_bit()
        });
        self.rcc.ahb3enr.modify(|_, w| w.fsmcen().set_bit());
        self.rcc.apb2enr.modify(|_, w| w.usart6en().set_bit());
    }
}
