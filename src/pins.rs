//! Fixed wiring between the Pico, the LCD and the sensors.
//!
//! ```text
//!  LCD           Pico
//!  RS  --------- GP7
//!  EN  --------- GP6
//!  D4  --------- GP5
//!  D5  --------- GP4
//!  D6  --------- GP3
//!  D7  --------- GP2
//!
//!  LM35 out ---- GP26 (ADC0)
//!  LDR divider - GP27 (ADC1)
//! ```
//!
//! The numbers are only documentation for the GPIO numbering: the pins are
//! taken by type in `main.rs`.

pub const LCD_RS: u8 = 7;
pub const LCD_EN: u8 = 6;
pub const LCD_D4: u8 = 5;
pub const LCD_D5: u8 = 4;
pub const LCD_D6: u8 = 3;
pub const LCD_D7: u8 = 2;

pub const TEMP_PIN: u8 = 26;
pub const LDR_PIN: u8 = 27;
