//! Signing keys

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use tcrypt_algorithms::{Curl, Sponge, Trit, TryteString};
use tcrypt_internal::constant_time::ct_eq;
use tcrypt_params::pqc::wots::{SigningKeyParams, WotsParams};

use super::digest::{check_layout, KeyDigestDeriver};
use crate::error::{Error, Result};

/// A signing key made of whole `P::BLOCK_LEN`-tryte blocks
///
/// The block invariant is checked once, at construction; the key is
/// immutable afterwards.
pub struct SigningKey<P: SigningKeyParams = WotsParams> {
    trytes: TryteString,
    _params: PhantomData<P>,
}

impl<P: SigningKeyParams> SigningKey<P> {
    /// Build a key from trytes
    ///
    /// Fails with [`Error::InvalidBlockLength`] unless the length is a
    /// multiple of `P::BLOCK_LEN`. An empty key has zero blocks.
    pub fn new(trytes: TryteString) -> Result<Self> {
        check_layout::<P>()?;
        if trytes.len() % P::BLOCK_LEN != 0 {
            return Err(Error::InvalidBlockLength {
                block_len: P::BLOCK_LEN,
                actual: trytes.len(),
            });
        }
        Ok(Self {
            trytes,
            _params: PhantomData,
        })
    }

    /// Parse a key from tryte text
    pub fn from_trytes(trytes: &str) -> Result<Self> {
        Self::new(TryteString::from_trytes(trytes)?)
    }

    /// Build a key from trits
    ///
    /// The trit count itself must be a multiple of `P::BLOCK_TRITS`; no
    /// padding is applied.
    pub fn from_trits(trits: &[Trit]) -> Result<Self> {
        check_layout::<P>()?;
        if trits.len() % P::BLOCK_TRITS != 0 {
            return Err(Error::InvalidBlockLength {
                block_len: P::BLOCK_TRITS,
                actual: trits.len(),
            });
        }
        Self::new(TryteString::from_trits(trits)?)
    }

    /// Number of blocks
    pub fn block_count(&self) -> usize {
        self.trytes.len() / P::BLOCK_LEN
    }

    /// Length in trytes
    pub fn len(&self) -> usize {
        self.trytes.len()
    }

    /// Whether the key has no blocks
    pub fn is_empty(&self) -> bool {
        self.trytes.is_empty()
    }

    /// The key trytes
    pub fn as_trytes(&self) -> &TryteString {
        &self.trytes
    }

    /// The key expanded to trits
    pub fn as_trits(&self) -> Zeroizing<Vec<Trit>> {
        Zeroizing::new(self.trytes.as_trits())
    }

    /// Derive the key digest with Curl-P-81
    ///
    /// Returns `block_count() * P::HASH_LENGTH` trits, one hash per block in
    /// block order.
    pub fn get_digest_trits(&self) -> Result<Vec<Trit>> {
        self.get_digest_trits_with::<Curl>()
    }

    /// Derive the key digest with an arbitrary sponge
    pub fn get_digest_trits_with<S: Sponge>(&self) -> Result<Vec<Trit>> {
        let trits = self.as_trits();
        KeyDigestDeriver::<S, P>::derive(trits.as_slice())
    }
}

impl<P: SigningKeyParams> Clone for SigningKey<P> {
    fn clone(&self) -> Self {
        Self {
            trytes: self.trytes.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: SigningKeyParams> Zeroize for SigningKey<P> {
    fn zeroize(&mut self) {
        self.trytes.zeroize();
    }
}

impl<P: SigningKeyParams> Drop for SigningKey<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: SigningKeyParams> ZeroizeOnDrop for SigningKey<P> {}

impl<P: SigningKeyParams> PartialEq for SigningKey<P> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.trytes.as_str(), other.trytes.as_str())
    }
}

impl<P: SigningKeyParams> Eq for SigningKey<P> {}

impl<P: SigningKeyParams> fmt::Debug for SigningKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SigningKey<{}>([REDACTED; {} blocks])",
            P::NAME,
            self.block_count()
        )
    }
}

impl<P: SigningKeyParams> TryFrom<TryteString> for SigningKey<P> {
    type Error = Error;

    fn try_from(trytes: TryteString) -> Result<Self> {
        Self::new(trytes)
    }
}
