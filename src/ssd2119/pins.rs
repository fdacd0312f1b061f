//! Pin and address definitions for the SSD2119 panel and the console
//!
//! This module contains the wiring of the DM-STF4BB expansion board.

/// Pin configuration constants for the LCD and peripherals
pub struct Pins;

#[allow(dead_code)]
impl Pins {
    // LCD control pins, all on port D
    /// Reset pin for display (PD3, normally FSMC CLK)
    pub const RST: u8 = 3;
    /// Backlight / PWM enable (PD13, normally FSMC A18)
    pub const BACKLIGHT: u8 = 13;
    /// FSMC address line wired to the D/C pin of the panel
    pub const DC_ADDRESS_LINE: u8 = 19;

    // FSMC data lines D0..D15
    /// Port D pins used in alternate function 12
    pub const FSMC_PORT_D: [u8; 10] = [0, 1, 4, 5, 7, 8, 9, 10, 14, 15];
    /// Port E pins used in alternate function 12
    pub const FSMC_PORT_E: [u8; 10] = [3, 7, 8, 9, 10, 11, 12, 13, 14, 15];

    // Console
    /// USART6 TX (PC6)
    pub const CONSOLE_TX: u8 = 6;
    /// USART6 RX (PC7)
    pub const CONSOLE_RX: u8 = 7;

    // Memory map
    /// Bank 1 address with A19 low: writes land in the command register
    pub const LCD_COMMAND_ADDRESS: usize = 0x6000_0000;
    /// Bank 1 address with A19 high: reads and writes hit the data register
    pub const LCD_DATA_ADDRESS: usize = 0x6010_0000;
}
