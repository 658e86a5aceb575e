//! Balanced-ternary encodings
//!
//! A tryte is one character of the alphabet `9ABCDEFGHIJKLMNOPQRSTUVWXYZ`. Its
//! index in the alphabet is an unbalanced value in `0..27`; values above 13 wrap
//! to the negative range, so `N` is -13 and `Z` is -1. Each tryte expands to three
//! trits, least significant first.

use tcrypt_api::Trit;
use tcrypt_params::utils::ternary::{MAX_TRYTE_VALUE, TRITS_PER_TRYTE, TRYTE_ALPHABET, TRYTE_RADIX};

mod tryte_string;

pub use tryte_string::TryteString;

/// Trit expansion of every tryte, in alphabet order.
const TRYTE_TRITS: [[Trit; TRITS_PER_TRYTE]; TRYTE_RADIX] = [
    [0, 0, 0],
    [1, 0, 0],
    [-1, 1, 0],
    [0, 1, 0],
    [1, 1, 0],
    [-1, -1, 1],
    [0, -1, 1],
    [1, -1, 1],
    [-1, 0, 1],
    [0, 0, 1],
    [1, 0, 1],
    [-1, 1, 1],
    [0, 1, 1],
    [1, 1, 1],
    [-1, -1, -1],
    [0, -1, -1],
    [1, -1, -1],
    [-1, 0, -1],
    [0, 0, -1],
    [1, 0, -1],
    [-1, 1, -1],
    [0, 1, -1],
    [1, 1, -1],
    [-1, -1, 0],
    [0, -1, 0],
    [1, -1, 0],
    [-1, 0, 0],
];

/// Index of a tryte character in the alphabet
#[inline]
pub fn tryte_index(tryte: u8) -> Option<usize> {
    match tryte {
        b'9' => Some(0),
        b'A'..=b'Z' => Some((tryte - b'A') as usize + 1),
        _ => None,
    }
}

/// Balanced value of a tryte character, in `-13..=13`
#[inline]
pub fn tryte_value(tryte: u8) -> Option<i8> {
    tryte_index(tryte).map(|i| {
        let i = i as i8;
        if i > MAX_TRYTE_VALUE {
            i - TRYTE_RADIX as i8
        } else {
            i
        }
    })
}

/// Expand one tryte character into its three trits
#[inline]
pub fn tryte_to_trits(tryte: u8) -> Option<[Trit; TRITS_PER_TRYTE]> {
    tryte_index(tryte).map(|i| TRYTE_TRITS[i])
}

/// Pack up to three trits into a tryte character
///
/// Missing high trits are treated as zero. Returns `None` if a value is not a
/// balanced trit or more than three trits are given.
#[inline]
pub fn trits_to_tryte(trits: &[Trit]) -> Option<u8> {
    if trits.len() > TRITS_PER_TRYTE || !tcrypt_api::all_trits(trits) {
        return None;
    }
    let value = trits
        .iter()
        .rev()
        .fold(0i8, |acc, &t| acc * TRITS_PER_TRYTE as i8 + t);
    let index = if value < 0 {
        value + TRYTE_RADIX as i8
    } else {
        value
    };
    Some(TRYTE_ALPHABET[index as usize])
}
