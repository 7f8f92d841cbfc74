//! Bit-banged driver for an HD44780 compatible 16x2 LCD in 4-bit mode.
//!
//! Every transfer is followed by a fixed delay instead of polling the busy
//! flag, so the R/W line stays tied to ground.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use ufmt::uWrite;

use crate::glyphs::{Glyph, CUSTOM_GLYPHS};
use crate::timer::{
    CGRAM_ROW_DELAY_MS, COMMAND_DELAY_MS, ENABLE_PULSE_US, ENABLE_SETTLE_US, POWER_UP_DELAY_MS,
    RESET_NIBBLE_DELAY_MS,
};

/// Clear display and return home
pub const CLEAR_DISPLAY: u8 = 0x01;
/// Entry mode: increment address, no display shift
pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
/// Display on, cursor off, blink off
pub const DISPLAY_ON: u8 = 0x0C;
/// Function set: 4-bit bus, 2 lines, 5x8 font
pub const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
/// Set CGRAM address, OR'ed with `slot << 3`
pub const SET_CGRAM_ADDR: u8 = 0x40;
/// Set DDRAM address, OR'ed with the address
pub const SET_DDRAM_ADDR: u8 = 0x80;

/// Nibble forcing 8-bit mode, sent three times to resync the controller
const RESET_NIBBLE: u8 = 0x03;
/// Nibble switching the controller to 4-bit mode
const FOUR_BIT_NIBBLE: u8 = 0x02;

/// DDRAM address of the first column of each row
pub const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Errors from the LCD bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Driving one of the six bus pins failed
    Pin,
}

/// Which register a byte goes to, selected by the RS line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Register {
    Command,
    Data,
}

/// LCD wired as RS, EN and D4-D7, with R/W grounded
pub struct Lcd<RS, EN, D4, D5, D6, D7, D> {
    rs: RS,
    en: EN,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: D,
}

fn set_level<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), Error> {
    pin.set_state(PinState::from(high)).map_err(|_| Error::Pin)
}

impl<RS, EN, D4, D5, D6, D7, D> Lcd<RS, EN, D4, D5, D6, D7, D>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    D: DelayNs,
{
    /// Takes ownership of the bus pins, already configured as outputs.
    /// Nothing is sent until [`Lcd::init`] is called.
    pub fn new(rs: RS, en: EN, d4: D4, d5: D5, d6: D6, d7: D7, delay: D) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
        }
    }

    /// Runs the power-on reset sequence and uploads the custom glyphs.
    ///
    /// The order of the reset nibbles and the four setup commands is fixed
    /// by the controller and must not change. None of the other methods
    /// check that this has run.
    pub fn init(&mut self) -> Result<(), Error> {
        self.delay.delay_ms(POWER_UP_DELAY_MS);

        set_level(&mut self.rs, false)?;
        set_level(&mut self.en, false)?;

        // The controller may be in 8-bit mode or halfway through a 4-bit
        // byte; three resets put it in a known state either way.
        for _ in 0..3 {
            self.send_4bits(RESET_NIBBLE)?;
            self.delay.delay_ms(RESET_NIBBLE_DELAY_MS);
        }
        self.send_4bits(FOUR_BIT_NIBBLE)?;
        self.delay.delay_ms(RESET_NIBBLE_DELAY_MS);

        self.command(FUNCTION_SET_4BIT_2LINE)?;
        self.command(DISPLAY_ON)?;
        self.command(ENTRY_MODE_INCREMENT)?;
        self.command(CLEAR_DISPLAY)?;
        self.delay.delay_ms(RESET_NIBBLE_DELAY_MS);

        for (location, glyph) in CUSTOM_GLYPHS {
            self.create_char(location, glyph)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("LCD initialized");
        Ok(())
    }

    /// Strobes EN so the controller latches D4-D7
    pub fn pulse_enable(&mut self) -> Result<(), Error> {
        set_level(&mut self.en, false)?;
        self.delay.delay_us(ENABLE_PULSE_US);
        set_level(&mut self.en, true)?;
        self.delay.delay_us(ENABLE_PULSE_US);
        set_level(&mut self.en, false)?;
        self.delay.delay_us(ENABLE_SETTLE_US);
        Ok(())
    }

    /// Puts the low 4 bits of `nibble` on D4-D7 and latches them
    pub fn send_4bits(&mut self, nibble: u8) -> Result<(), Error> {
        set_level(&mut self.d4, nibble & 0x01 != 0)?;
        set_level(&mut self.d5, nibble & 0x02 != 0)?;
        set_level(&mut self.d6, nibble & 0x04 != 0)?;
        set_level(&mut self.d7, nibble & 0x08 != 0)?;
        self.pulse_enable()
    }

    /// Sends both halves of a byte, high nibble first, without any settle time
    fn send_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.send_4bits(byte >> 4)?;
        self.send_4bits(byte & 0x0F)
    }

    fn select(&mut self, register: Register) -> Result<(), Error> {
        set_level(&mut self.rs, register == Register::Data)
    }

    /// Sends an instruction byte (RS low)
    pub fn command(&mut self, cmd: u8) -> Result<(), Error> {
        self.select(Register::Command)?;
        self.send_byte(cmd)?;
        self.delay.delay_ms(COMMAND_DELAY_MS);
        Ok(())
    }

    /// Sends a data byte (RS high), i.e. writes a character at the cursor
    pub fn write_data(&mut self, data: u8) -> Result<(), Error> {
        self.select(Register::Data)?;
        self.send_byte(data)?;
        self.delay.delay_ms(COMMAND_DELAY_MS);
        Ok(())
    }

    /// Writes every byte of `text` from the cursor on. There is no wrapping:
    /// text past the end of the row goes to off-screen DDRAM.
    pub fn print(&mut self, text: &str) -> Result<(), Error> {
        text.bytes().try_for_each(|byte| self.write_data(byte))
    }

    /// Prints the custom character stored in CGRAM slot `location`.
    ///
    /// Character codes 8-15 alias slots 0-7 on the controller, so masking
    /// to 0-7 shows the same glyph the unmasked code would.
    pub fn write_glyph(&mut self, location: u8) -> Result<(), Error> {
        self.write_data(location & 0x07)
    }

    /// Clears the display and returns the cursor home
    pub fn clear(&mut self) -> Result<(), Error> {
        self.command(CLEAR_DISPLAY)
    }

    /// Moves the cursor to `col`, `row`.
    ///
    /// Neither value is validated. Rows past the second are folded back onto
    /// the row table and a column past the row width lands wherever the
    /// controller puts it.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error> {
        let offset = ROW_OFFSETS[usize::from(row) % ROW_OFFSETS.len()];
        self.command(SET_DDRAM_ADDR | col.wrapping_add(offset))
    }

    /// Stores `charmap` in CGRAM slot `location`.
    ///
    /// `location` is masked to 0-7, so slot 8 overwrites slot 0. The address
    /// counter is shared with DDRAM, so it is reset to DDRAM 0 afterwards.
    pub fn create_char(&mut self, location: u8, charmap: &Glyph) -> Result<(), Error> {
        let location = location & 0x07;
        self.command(SET_CGRAM_ADDR | (location << 3))?;

        self.select(Register::Data)?;
        for row in charmap {
            self.send_byte(*row)?;
            self.delay.delay_ms(CGRAM_ROW_DELAY_MS);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Glyph stored in CGRAM slot {}", location);

        self.command(SET_DDRAM_ADDR)
    }

    /// Gives back the pins and the delay
    pub fn release(self) -> (RS, EN, D4, D5, D6, D7, D) {
        (
            self.rs, self.en, self.d4, self.d5, self.d6, self.d7, self.delay,
        )
    }
}

/// Text operations the screens need from a character display
pub trait CharacterDisplay {
    fn clear(&mut self) -> Result<(), Error>;

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error>;

    /// Prints a custom character from CGRAM
    fn write_glyph(&mut self, location: u8) -> Result<(), Error>;

    fn print(&mut self, text: &str) -> Result<(), Error>;
}

impl<RS, EN, D4, D5, D6, D7, D> CharacterDisplay for Lcd<RS, EN, D4, D5, D6, D7, D>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), Error> {
        Lcd::clear(self)
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error> {
        Lcd::set_cursor(self, col, row)
    }

    fn write_glyph(&mut self, location: u8) -> Result<(), Error> {
        Lcd::write_glyph(self, location)
    }

    fn print(&mut self, text: &str) -> Result<(), Error> {
        Lcd::print(self, text)
    }
}

impl<RS, EN, D4, D5, D6, D7, D> uWrite for Lcd<RS, EN, D4, D5, D6, D7, D>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    D: DelayNs,
{
    type Error = Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.print(s)
    }
}
