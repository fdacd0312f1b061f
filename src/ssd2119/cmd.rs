/// Register addresses of the SSD2119 controller.
///
/// Each one is selected by writing it to the command port, after which the
/// data port reads or writes that register.
pub struct Cmd;

#[allow(missing_docs)]
impl Cmd {
    // Identification, shares its address with the oscillator register
    pub const DEVICE_CODE_READ: u8 = 0x00;

    // Init
    pub const OSC_START: u8 = 0x00;
    pub const OUTPUT_CTRL: u8 = 0x01;
    pub const LCD_DRIVE_AC_CTRL: u8 = 0x02;
    pub const PWR_CTRL_1: u8 = 0x03;
    pub const DISPLAY_CTRL: u8 = 0x07;
    pub const FRAME_CYCLE_CTRL: u8 = 0x0B;
    pub const PWR_CTRL_2: u8 = 0x0C;
    pub const PWR_CTRL_3: u8 = 0x0D;
    pub const PWR_CTRL_4: u8 = 0x0E;
    pub const GATE_SCAN_START: u8 = 0x0F;
    pub const SLEEP_MODE_1: u8 = 0x10;
    pub const ENTRY_MODE: u8 = 0x11;
    pub const SLEEP_MODE_2: u8 = 0x12;
    pub const GEN_IF_CTRL: u8 = 0x15;
    pub const PWR_CTRL_5: u8 = 0x1E;
    pub const FRAME_FREQ: u8 = 0x25;
    pub const ANALOG_SET: u8 = 0x26;
    pub const VCOM_OTP_1: u8 = 0x28;
    pub const VCOM_OTP_2: u8 = 0x29;

    // Gamma
    pub const GAMMA_CTRL_1: u8 = 0x30;
    pub const GAMMA_CTRL_2: u8 = 0x31;
    pub const GAMMA_CTRL_3: u8 = 0x32;
    pub const GAMMA_CTRL_4: u8 = 0x33;
    pub const GAMMA_CTRL_5: u8 = 0x34;
    pub const GAMMA_CTRL_6: u8 = 0x35;
    pub const GAMMA_CTRL_7: u8 = 0x36;
    pub const GAMMA_CTRL_8: u8 = 0x37;
    pub const GAMMA_CTRL_9: u8 = 0x3A;
    pub const GAMMA_CTRL_10: u8 = 0x3B;

    // Window
    pub const V_RAM_POS: u8 = 0x44;
    pub const H_RAM_START: u8 = 0x45;
    pub const H_RAM_END: u8 = 0x46;

    // Update
    pub const X_RAM_ADDR: u8 = 0x4E;
    pub const Y_RAM_ADDR: u8 = 0x4F;
    pub const RAM_DATA: u8 = 0x22;
}

/*
Datasheet names for the registers the init sequence touches:
0x00 - Oscillation Start (read: Device Code 0x9919)
0x01 - Driver Output Control
0x02 - LCD Drive AC Control
0x07 - Display Control
0x0C..0x0E, 0x1E - Power Control 2..5
0x10 - Sleep Mode 1
0x11 - Entry Mode
0x12 - Sleep Mode 2
0x26 - Analog Setting
0x30..0x3B - Gamma Control 1..10
0x44 - Vertical RAM Address Position
0x45 / 0x46 - Horizontal RAM Address Start / End
0x4E / 0x4F - Set GDDRAM X / Y Address Counter
0x22 - RAM Data Write / Read
*/
