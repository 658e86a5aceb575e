//! Constants for balanced-ternary encodings

/// Tryte alphabet; the index of a character is its unbalanced value
pub const TRYTE_ALPHABET: &[u8; 27] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of distinct tryte values
pub const TRYTE_RADIX: usize = 27;

/// Trits per tryte
pub const TRITS_PER_TRYTE: usize = 3;

/// Trytes produced for each input byte by the byte to tryte expansion
pub const TRYTES_PER_BYTE: usize = 2;

/// Largest value a tryte can hold in balanced form
pub const MAX_TRYTE_VALUE: i8 = 13;
