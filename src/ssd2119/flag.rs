use crate::ssd2119::{HEIGHT, WIDTH};

/// Register values used by the SSD2119 power-up sequence.
///
/// These are tuning constants for this particular panel, taken from the
/// vendor's board support code. They go out exactly as listed.
pub struct Flag;

#[allow(missing_docs)]
impl Flag {
    // Device code reported by register 0x00
    pub const DEVICE_CODE: u16 = 0x9919;

    // Sleep Mode 1 (0x10)
    pub const SLEEP_ENTER: u16 = 0x0001;
    pub const SLEEP_EXIT: u16 = 0x0000;

    // Power Control 5 (0x1E), VCOM high voltage
    pub const PWR_CTRL_5_VCOMH: u16 = 0x00B2;

    // Oscillation Start (0x00)
    pub const OSC_ON: u16 = 0x0001;

    // Driver Output Control (0x01): RL=0, REV=1, GD=1, BGR=1, SM=0, TB=1, MUX=239
    pub const OUTPUT_CTRL_DEFAULT: u16 = 0x30EF;

    // LCD Drive AC Control (0x02): line inversion
    pub const AC_CTRL_LINE_INVERSION: u16 = 0x0600;

    // Entry Mode (0x11): 65k colours, 16 bit interface, ID = horizontal increment
    pub const ENTRY_MODE_65K_INC: u16 = 0x6830;

    // Sleep Mode 2 (0x12) and Analog Setting (0x26)
    pub const SLEEP_MODE_2_DEFAULT: u16 = 0x0999;
    pub const ANALOG_SET_DEFAULT: u16 = 0x3800;

    // Display Control (0x07): GON, DTE, D1:0 = on
    pub const DISPLAY_ON: u16 = 0x0033;

    // Power Control 2 (0x0C): VCIX2 = 6.1V
    pub const PWR_CTRL_2_VCIX2: u16 = 0x0005;

    // Power Control 3 (0x0D) Vlcd63, Power Control 4 (0x0E) VCOMl
    pub const PWR_CTRL_3_VLCD63: u16 = 0x000A;
    pub const PWR_CTRL_4_VCOML: u16 = 0x2E00;

    // Gamma Control 1..10 (0x30..0x3B)
    pub const GAMMA: [u16; 10] = [
        0x0000, 0x0303, 0x0407, 0x0301, 0x0301, 0x0403, 0x0707, 0x0400, 0x0a00, 0x1000,
    ];

    // Window covering the whole panel
    pub const V_RAM_POS_FULL: u16 = (HEIGHT - 1) << 8;
    pub const H_RAM_START_FULL: u16 = 0x0000;
    pub const H_RAM_END_FULL: u16 = WIDTH - 1;
}
