#![no_std]

//! # thermolight-rs
//! ## Temperature and light readings on a character LCD
//!
//! Features:
//! - Bit-banged HD44780 driver over a 4-bit parallel bus
//! - Custom CGRAM glyphs (thermometer and sun)
//! - Sliding window averaging of the analog sensors
//! - Alternating temperature / light screens

#[cfg(test)]
extern crate std;

pub mod glyphs;
pub mod lcd;
pub mod pins;
pub mod rendering;
pub mod scheduler;
pub mod sensors;
pub mod timer;

#[cfg(test)]
mod testing;
