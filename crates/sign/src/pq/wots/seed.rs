//! Random seeds

use alloc::format;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use tcrypt_algorithms::{Trit, TryteString};
use tcrypt_api::EntropySource;
use tcrypt_internal::constant_time::ct_eq;
use tcrypt_params::pqc::wots::WOTS_SEED_LEN;
use tcrypt_params::utils::ternary::TRYTES_PER_BYTE;

use crate::error::{Error, Result};

/// Secret seed from which signing keys are derived
///
/// A seed is an arbitrary tryte string. One hash worth of trytes
/// ([`WOTS_SEED_LEN`]) is the recommended minimum; shorter seeds are accepted.
///
/// # Security
///
/// - The trytes are zeroized when the seed is dropped
/// - `Debug` output only reveals the length
/// - Equality is checked in constant time
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    trytes: TryteString,
}

impl Seed {
    /// Wrap existing trytes as a seed
    pub fn new(trytes: TryteString) -> Self {
        Self { trytes }
    }

    /// Parse a seed from tryte text
    pub fn from_trytes(trytes: &str) -> Result<Self> {
        Ok(Self::new(TryteString::from_trytes(trytes)?))
    }

    /// Draw a seed of the recommended length from `source`
    pub fn random<E: EntropySource>(source: &mut E) -> Result<Self> {
        Self::random_with_length(WOTS_SEED_LEN, source)
    }

    /// Draw a seed of at least `min_length` trytes from `source`
    ///
    /// Every byte of entropy expands to two trytes, so `ceil(min_length / 2)`
    /// bytes are requested and the result length is always even. Failures of
    /// the source are returned as [`Error::Entropy`] without retrying.
    ///
    /// ```
    /// use tcrypt_api::entropy;
    /// use tcrypt_sign::Seed;
    ///
    /// let mut zeros = entropy::from_fn(|n| Ok(vec![0u8; n]));
    /// let seed = Seed::random_with_length(5, &mut zeros).unwrap();
    /// assert_eq!(seed.len(), 6);
    /// ```
    pub fn random_with_length<E: EntropySource>(min_length: usize, source: &mut E) -> Result<Self> {
        if min_length < WOTS_SEED_LEN {
            warn!(
                min_length,
                recommended = WOTS_SEED_LEN,
                "seed is shorter than one hash"
            );
        }

        let byte_count = min_length.div_ceil(TRYTES_PER_BYTE);
        let bytes = Zeroizing::new(source.bytes(byte_count)?);
        if bytes.len() != byte_count {
            return Err(Error::Entropy(format!(
                "requested {} bytes, source returned {}",
                byte_count,
                bytes.len()
            )));
        }

        Ok(Self::new(TryteString::from_bytes(&bytes)))
    }

    /// Draw a seed of the recommended length from the operating system
    #[cfg(feature = "std")]
    pub fn generate() -> Result<Self> {
        Self::random(&mut rand::rngs::OsRng)
    }

    /// Length in trytes
    pub fn len(&self) -> usize {
        self.trytes.len()
    }

    /// Whether the seed is empty
    pub fn is_empty(&self) -> bool {
        self.trytes.is_empty()
    }

    /// The seed trytes
    pub fn as_trytes(&self) -> &TryteString {
        &self.trytes
    }

    /// The seed expanded to trits
    pub fn as_trits(&self) -> Zeroizing<Vec<Trit>> {
        Zeroizing::new(self.trytes.as_trits())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed([REDACTED; {} trytes])", self.len())
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.trytes.as_str(), other.trytes.as_str())
    }
}

impl Eq for Seed {}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_trytes(s)
    }
}

impl From<TryteString> for Seed {
    fn from(trytes: TryteString) -> Self {
        Self::new(trytes)
    }
}
