use embedded_hal::delay::DelayNs;

use crate::timer::SAMPLE_DELAY_MS;

/// Samples in each sliding window
pub const WINDOW_SIZE: usize = 10;
/// ADC reference voltage the temperature calibration assumes
pub const ADC_REFERENCE_VOLTS: f32 = 5.0;
/// Full scale count of the 10-bit readings
pub const ADC_MAX: f32 = 1023.0;
/// LM35 style sensor: 10mV per degree
pub const CELSIUS_PER_VOLT: f32 = 100.0;

/// Analog inputs being monitored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Temperature,
    Light,
}

/// Source of raw analog readings
///
/// Readings are 10-bit counts (0-1023). Reading never fails.
pub trait AnalogSource {
    fn read_analog(&mut self, channel: Channel) -> u16;
}

/// Moving average over the last [`WINDOW_SIZE`] samples of one channel.
///
/// The window is filled on the first read; afterwards each read replaces the
/// oldest sample and adjusts the running total, so no re-summing is needed.
pub struct MovingAverage {
    readings: [u16; WINDOW_SIZE],
    read_index: usize,
    total: u32,
    initialized: bool,
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self::new()
    }
}

impl MovingAverage {
    pub const fn new() -> Self {
        Self {
            readings: [0; WINDOW_SIZE],
            read_index: 0,
            total: 0,
            initialized: false,
        }
    }

    /// Takes a new sample and returns the truncated mean of the window
    /// param source: where samples come from
    /// param channel: channel to sample
    /// param delay: spaces the samples by SAMPLE_DELAY_MS
    /// returns the average in raw ADC counts
    pub fn read_average<A: AnalogSource, D: DelayNs>(
        &mut self,
        source: &mut A,
        channel: Channel,
        delay: &mut D,
    ) -> u16 {
        if !self.initialized {
            for slot in self.readings.iter_mut() {
                *slot = source.read_analog(channel);
                self.total += u32::from(*slot);
                delay.delay_ms(SAMPLE_DELAY_MS);
            }
            self.initialized = true;
        }

        let sample = source.read_analog(channel);
        self.total = self.total - u32::from(self.readings[self.read_index]) + u32::from(sample);
        self.readings[self.read_index] = sample;
        self.read_index = (self.read_index + 1) % WINDOW_SIZE;

        delay.delay_ms(SAMPLE_DELAY_MS);
        self.average()
    }

    /// Current window mean, without sampling. Zero before the first read.
    pub fn average(&self) -> u16 {
        (self.total / WINDOW_SIZE as u32) as u16
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

/// Converts a raw reading to degrees Celsius: 5V over 1023 steps, 10mV/°C
pub fn temperature_celsius(raw: u16) -> f32 {
    let voltage = raw as f32 * (ADC_REFERENCE_VOLTS / ADC_MAX);
    voltage * CELSIUS_PER_VOLT
}

/// One averaged reading of both channels
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    pub raw_temperature: u16,
    pub temperature_c: f32,
    pub light: u16,
}

/// Independent windows for the temperature and light channels
#[derive(Default)]
pub struct Sensors {
    temperature: MovingAverage,
    light: MovingAverage,
}

impl Sensors {
    pub const fn new() -> Self {
        Self {
            temperature: MovingAverage::new(),
            light: MovingAverage::new(),
        }
    }

    /// Samples temperature then light
    pub fn read<A: AnalogSource, D: DelayNs>(&mut self, source: &mut A, delay: &mut D) -> Readings {
        let raw_temperature = self
            .temperature
            .read_average(source, Channel::Temperature, delay);
        let light = self.light.read_average(source, Channel::Light, delay);

        #[cfg(feature = "defmt")]
        defmt::debug!("raw temperature: {}, light: {}", raw_temperature, light);

        Readings {
            raw_temperature,
            temperature_c: temperature_celsius(raw_temperature),
            light,
        }
    }
}
