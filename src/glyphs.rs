//! Custom 5x8 characters stored in the LCD's CGRAM

/// One 5x8 dot-matrix character, a byte per row. Only the low 5 bits are drawn.
pub type Glyph = [u8; 8];

/// CGRAM slot holding the thermometer
pub const TEMP_SYMBOL: u8 = 0;
/// CGRAM slot holding the sun
pub const LIGHT_SYMBOL: u8 = 1;

/// Thermometer
pub const THERMOMETER: Glyph = [
    0b00100, 0b01010, 0b01010, 0b01010, 0b01010, 0b10001, 0b10001, 0b01110,
];

/// Sun, used for the light level
pub const SUN: Glyph = [
    0b00000, 0b00100, 0b10101, 0b01110, 0b11111, 0b01110, 0b10101, 0b00100,
];

/// Every glyph uploaded during LCD initialization, with its slot
pub const CUSTOM_GLYPHS: [(u8, &Glyph); 2] = [(TEMP_SYMBOL, &THERMOMETER), (LIGHT_SYMBOL, &SUN)];
