//! Recording mocks shared by the unit tests.
//!
//! Every mock pushes into one shared log so tests can check the exact
//! interleaving of pin writes, delays and ADC samples.

use core::convert::Infallible;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::lcd::Lcd;
use crate::sensors::{AnalogSource, Channel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Rs,
    En,
    D4,
    D5,
    D6,
    D7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pin(Line, bool),
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
    Sample(Channel, u16),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockPin {
    line: Line,
    log: Log,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Pin(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Pin(self.line, true));
        Ok(())
    }
}

/// Pin whose writes always fail
pub struct BrokenPin;

#[derive(Debug)]
pub struct BrokenPinError;

impl embedded_hal::digital::Error for BrokenPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = BrokenPinError;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(BrokenPinError)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(BrokenPinError)
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

/// ADC replaying scripted samples per channel, then repeating the last one
pub struct MockAdc {
    temperature: VecDeque<u16>,
    light: VecDeque<u16>,
    log: Log,
}

impl MockAdc {
    pub fn new(log: &Log) -> Self {
        Self {
            temperature: VecDeque::new(),
            light: VecDeque::new(),
            log: log.clone(),
        }
    }

    pub fn push(&mut self, channel: Channel, samples: &[u16]) {
        let queue = match channel {
            Channel::Temperature => &mut self.temperature,
            Channel::Light => &mut self.light,
        };
        queue.extend(samples.iter().copied());
    }
}

impl AnalogSource for MockAdc {
    fn read_analog(&mut self, channel: Channel) -> u16 {
        let queue = match channel {
            Channel::Temperature => &mut self.temperature,
            Channel::Light => &mut self.light,
        };
        let value = if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().copied().unwrap_or(0)
        };
        self.log.borrow_mut().push(Event::Sample(channel, value));
        value
    }
}

pub type MockLcd = Lcd<MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockDelay>;

pub fn mock_lcd(log: &Log) -> MockLcd {
    let pin = |line| MockPin {
        line,
        log: log.clone(),
    };
    Lcd::new(
        pin(Line::Rs),
        pin(Line::En),
        pin(Line::D4),
        pin(Line::D5),
        pin(Line::D6),
        pin(Line::D7),
        MockDelay::new(log),
    )
}

/// Nibbles latched by the controller, as (RS level, value).
///
/// The HD44780 latches on the falling edge of EN.
pub fn nibbles(log: &Log) -> Vec<(bool, u8)> {
    let mut latched = Vec::new();
    let mut rs = false;
    let mut en = false;
    let mut data = [false; 4];
    for event in log.borrow().iter() {
        if let Event::Pin(line, level) = *event {
            match line {
                Line::Rs => rs = level,
                Line::En => {
                    if en && !level {
                        let value = data
                            .iter()
                            .enumerate()
                            .fold(0u8, |acc, (bit, set)| acc | ((*set as u8) << bit));
                        latched.push((rs, value));
                    }
                    en = level;
                }
                Line::D4 => data[0] = level,
                Line::D5 => data[1] = level,
                Line::D6 => data[2] = level,
                Line::D7 => data[3] = level,
            }
        }
    }
    latched
}

/// Pairs latched nibbles back into (RS level, byte) transfers
pub fn bytes(nibbles: &[(bool, u8)]) -> Vec<(bool, u8)> {
    nibbles
        .chunks(2)
        .map(|pair| {
            assert_eq!(pair.len(), 2, "dangling nibble");
            assert_eq!(pair[0].0, pair[1].0, "RS changed inside a byte");
            (pair[0].0, (pair[0].1 << 4) | pair[1].1)
        })
        .collect()
}

/// All millisecond delays in order
pub fn delays_ms(log: &Log) -> Vec<u32> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::DelayMs(ms) => Some(*ms),
            _ => None,
        })
        .collect()
}
