//! Hexadecimal digit lookup table
//!
//! Maps every byte to its nibble value, or to [`INVALID_HEX`] when the byte
//! is not a hex digit. Valid nibbles never set the high four bits, so ORing
//! the lookups of several bytes equals [`INVALID_HEX`] exactly when at least
//! one of them was invalid.

/// Marker stored for bytes that are not hex digits
pub const INVALID_HEX: u8 = 0xFF;

/// Pre-computed byte to nibble table
static HEX_TABLE: [u8; 256] = generate_hex_table();

/// Generate the hex lookup table at compile time
const fn generate_hex_table() -> [u8; 256] {
    let mut table = [INVALID_HEX; 256];
    let mut i = 0;

    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }

    i = 0;
    while i < 6 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }

    table
}

/// Look up the nibble value of `byte`, or [`INVALID_HEX`]
#[inline(always)]
pub fn hex_value(byte: u8) -> u8 {
    HEX_TABLE[byte as usize]
}
