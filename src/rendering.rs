use heapless::String;
use ufmt::uwrite;

use crate::glyphs::{LIGHT_SYMBOL, TEMP_SYMBOL};
use crate::lcd::{self, CharacterDisplay};

/// Minimum width of the temperature field, padded with leading spaces
pub const TEMPERATURE_WIDTH: usize = 4;

/// Longest formatted value: sign, 10 digits, point, one decimal
pub type ValueString = String<16>;

/// Errors while putting a screen on the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The LCD bus failed
    Lcd(lcd::Error),
    /// A value did not fit its text buffer
    Overflow,
}

impl From<lcd::Error> for Error {
    fn from(error: lcd::Error) -> Self {
        Error::Lcd(error)
    }
}

/// Formats a temperature with one decimal, rounded half up and right
/// aligned in a [`TEMPERATURE_WIDTH`] field. 5.25 -> " 5.3", 100.2 -> "100.2"
/// param celsius: temperature to format
pub fn format_temperature(celsius: f32) -> Result<ValueString, Error> {
    let negative = celsius < 0.0;
    let magnitude = if negative { -celsius } else { celsius };
    // ufmt has no float support, so work in tenths of a degree
    let tenths = (magnitude * 10.0 + 0.5) as u32;

    let mut digits = ValueString::new();
    if negative {
        digits.push('-').map_err(|_| Error::Overflow)?;
    }
    uwrite!(digits, "{}.{}", tenths / 10, tenths % 10).map_err(|_| Error::Overflow)?;

    let mut padded = ValueString::new();
    for _ in digits.len()..TEMPERATURE_WIDTH {
        padded.push(' ').map_err(|_| Error::Overflow)?;
    }
    padded.push_str(&digits).map_err(|_| Error::Overflow)?;
    Ok(padded)
}

/// Formats a light level as a plain decimal number
/// param level: averaged raw reading
pub fn format_light(level: u16) -> Result<ValueString, Error> {
    let mut text = ValueString::new();
    uwrite!(text, "{}", level).map_err(|_| Error::Overflow)?;
    Ok(text)
}

/// Renders the thermometer glyph and the temperature on the top line:
/// `<thermometer>: 20.0 C`
/// param lcd: LCD instance
/// param celsius: temperature to show
pub fn render_temperature<L: CharacterDisplay>(lcd: &mut L, celsius: f32) -> Result<(), Error> {
    let value = format_temperature(celsius)?;
    lcd.set_cursor(0, 0)?;
    lcd.write_glyph(TEMP_SYMBOL)?;
    lcd.print(": ")?;
    lcd.print(&value)?;
    lcd.print(" C")?;
    Ok(())
}

/// Renders the sun glyph and the light level on the top line: `<sun>: 512`
/// param lcd: LCD instance
/// param level: light level to show
pub fn render_light<L: CharacterDisplay>(lcd: &mut L, level: u16) -> Result<(), Error> {
    let value = format_light(level)?;
    lcd.set_cursor(0, 0)?;
    lcd.write_glyph(LIGHT_SYMBOL)?;
    lcd.print(": ")?;
    lcd.print(&value)?;
    Ok(())
}
