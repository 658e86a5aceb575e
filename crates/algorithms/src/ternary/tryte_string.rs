use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use tcrypt_api::Trit;
use tcrypt_params::utils::ternary::{TRITS_PER_TRYTE, TRYTES_PER_BYTE, TRYTE_ALPHABET, TRYTE_RADIX};
use zeroize::Zeroize;

use super::{trits_to_tryte, tryte_index, tryte_to_trits};
use crate::error::{validate, Error, Result};

/// An immutable string of trytes
///
/// Every character is guaranteed to belong to the tryte alphabet, so the
/// conversions to trits and bytes never see foreign input.
#[derive(Clone, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct TryteString {
    trytes: String,
}

impl TryteString {
    /// Parse a string of tryte characters
    pub fn from_trytes<T: AsRef<[u8]>>(trytes: T) -> Result<Self> {
        let raw = trytes.as_ref();
        if let Some(position) = raw.iter().position(|&c| tryte_index(c).is_none()) {
            return Err(Error::Encoding {
                context: "TryteString::from_trytes",
                position,
                details: "character is not in the tryte alphabet",
            });
        }

        let mut trytes = String::with_capacity(raw.len());
        trytes.extend(raw.iter().map(|&c| c as char));
        Ok(Self { trytes })
    }

    /// Expand raw bytes into trytes, two trytes per byte
    ///
    /// Each byte is written as two base-27 digits, least significant first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut trytes = String::with_capacity(bytes.len() * TRYTES_PER_BYTE);
        for &byte in bytes {
            let (high, low) = (byte as usize / TRYTE_RADIX, byte as usize % TRYTE_RADIX);
            trytes.push(TRYTE_ALPHABET[low] as char);
            trytes.push(TRYTE_ALPHABET[high] as char);
        }
        Self { trytes }
    }

    /// Pack trits into trytes
    ///
    /// A trailing group shorter than three trits is padded with zeros.
    pub fn from_trits(trits: &[Trit]) -> Result<Self> {
        validate::trits("TryteString::from_trits", trits)?;

        let mut trytes = String::with_capacity(trits.len().div_ceil(TRITS_PER_TRYTE));
        for chunk in trits.chunks(TRITS_PER_TRYTE) {
            let tryte = trits_to_tryte(chunk).ok_or(Error::Processing {
                operation: "TryteString::from_trits",
                details: "trit group does not map to a tryte",
            })?;
            trytes.push(tryte as char);
        }
        Ok(Self { trytes })
    }

    /// Reverse of [`from_bytes`](Self::from_bytes)
    pub fn decode(&self) -> Result<Vec<u8>> {
        let raw = self.trytes.as_bytes();
        if raw.len() % TRYTES_PER_BYTE != 0 {
            return Err(Error::Length {
                context: "TryteString::decode",
                expected: raw.len() + 1,
                actual: raw.len(),
            });
        }

        let mut bytes = Vec::with_capacity(raw.len() / TRYTES_PER_BYTE);
        for (pair, chunk) in raw.chunks(TRYTES_PER_BYTE).enumerate() {
            let low = tryte_index(chunk[0]).unwrap_or(0);
            let high = tryte_index(chunk[1]).unwrap_or(0);
            let value = low + high * TRYTE_RADIX;
            let byte = u8::try_from(value).map_err(|_| Error::Encoding {
                context: "TryteString::decode",
                position: pair * TRYTES_PER_BYTE,
                details: "tryte pair does not encode a byte",
            })?;
            bytes.push(byte);
        }
        Ok(bytes)
    }

    /// Number of trytes
    pub fn len(&self) -> usize {
        self.trytes.len()
    }

    /// Check if the string holds no trytes
    pub fn is_empty(&self) -> bool {
        self.trytes.is_empty()
    }

    /// Number of trits (three per tryte)
    pub fn trit_len(&self) -> usize {
        self.len() * TRITS_PER_TRYTE
    }

    /// The trytes as a string slice
    pub fn as_str(&self) -> &str {
        &self.trytes
    }

    /// Expand every tryte into trits
    pub fn as_trits(&self) -> Vec<Trit> {
        let mut trits = Vec::with_capacity(self.trit_len());
        for &c in self.trytes.as_bytes() {
            trits.extend_from_slice(&tryte_to_trits(c).unwrap_or_default());
        }
        trits
    }

    /// Trits in the half-open range `start..end`
    ///
    /// Offsets are trit offsets and need not fall on tryte boundaries.
    pub fn trits_range(&self, start: usize, end: usize) -> Result<Vec<Trit>> {
        validate::parameter(start <= end, "start", "range start exceeds range end")?;
        if end > self.trit_len() {
            return Err(Error::Length {
                context: "TryteString::trits_range",
                expected: end,
                actual: self.trit_len(),
            });
        }

        let first = start / TRITS_PER_TRYTE;
        let last = end.div_ceil(TRITS_PER_TRYTE);
        let covered = Self {
            trytes: String::from(&self.trytes[first..last]),
        };
        let trits = covered.as_trits();
        let offset = first * TRITS_PER_TRYTE;
        Ok(trits[start - offset..end - offset].to_vec())
    }
}

impl fmt::Debug for TryteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TryteString({:?})", self.trytes)
    }
}

impl fmt::Display for TryteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.trytes)
    }
}

impl FromStr for TryteString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_trytes(s)
    }
}

impl AsRef<str> for TryteString {
    fn as_ref(&self) -> &str {
        &self.trytes
    }
}

impl AsRef<[u8]> for TryteString {
    fn as_ref(&self) -> &[u8] {
        self.trytes.as_bytes()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TryteString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.trytes)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TryteString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_trytes(raw).map_err(serde::de::Error::custom)
    }
}
