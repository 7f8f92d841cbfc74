//! Fixed timings used by the LCD driver, the sensors and the screen loop.

/// Time the LCD needs after power-up before it accepts the reset nibbles
pub const POWER_UP_DELAY_MS: u32 = 50;
/// Settle time after each reset nibble during initialization
pub const RESET_NIBBLE_DELAY_MS: u32 = 5;
/// Hold time on each edge of the enable strobe
pub const ENABLE_PULSE_US: u32 = 1;
/// Time for the controller to latch a nibble after the enable strobe
pub const ENABLE_SETTLE_US: u32 = 100;
/// Wait after a full command or data byte (worst case is ~1.52ms for clear/home)
pub const COMMAND_DELAY_MS: u32 = 2;
/// Wait after each CGRAM bitmap row
pub const CGRAM_ROW_DELAY_MS: u32 = 1;

/// Spacing between two analog samples
pub const SAMPLE_DELAY_MS: u32 = 10;
/// How long each screen stays up
pub const SCREEN_DELAY_MS: u32 = 2000;
