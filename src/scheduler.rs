//! Screen loop alternating between the temperature and light views

use embedded_hal::delay::DelayNs;

use crate::lcd::CharacterDisplay;
use crate::rendering::{render_light, render_temperature, Error};
use crate::sensors::{AnalogSource, Readings, Sensors};
use crate::timer::SCREEN_DELAY_MS;

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    #[default]
    Temperature,
    Light,
}

impl DisplayMode {
    /// The other screen
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Temperature => DisplayMode::Light,
            DisplayMode::Light => DisplayMode::Temperature,
        }
    }
}

/// Owns the sensor windows and the current screen
#[derive(Default)]
pub struct DisplayScheduler {
    mode: DisplayMode,
    sensors: Sensors,
}

impl DisplayScheduler {
    pub const fn new() -> Self {
        Self {
            mode: DisplayMode::Temperature,
            sensors: Sensors::new(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Runs one screen cycle: sample both sensors, clear the LCD, draw the
    /// current screen, hold it for SCREEN_DELAY_MS, then switch screens.
    ///
    /// Both sensors are sampled every cycle so their windows keep moving even
    /// while the other screen is up.
    /// param lcd: LCD instance, already initialized
    /// param source: analog inputs
    /// param delay: delay used for sampling and for holding the screen
    /// returns the readings that were sampled
    pub fn run_cycle<L, A, D>(
        &mut self,
        lcd: &mut L,
        source: &mut A,
        delay: &mut D,
    ) -> Result<Readings, Error>
    where
        L: CharacterDisplay,
        A: AnalogSource,
        D: DelayNs,
    {
        let readings = self.sensors.read(source, delay);

        lcd.clear()?;
        match self.mode {
            DisplayMode::Temperature => render_temperature(lcd, readings.temperature_c)?,
            DisplayMode::Light => render_light(lcd, readings.light)?,
        }

        delay.delay_ms(SCREEN_DELAY_MS);
        self.mode = self.mode.toggled();
        Ok(readings)
    }
}
