//! Signing key digest schedule
//!
//! Three levels, each exposed on its own:
//!
//! 1. [`KeyDigestDeriver::chain_fragment`]: one hash-sized fragment pushed
//!    through `P::CHAIN_ROUNDS` fresh sponges.
//! 2. [`KeyDigestDeriver::block_digest`]: every fragment of a block chained,
//!    then the whole block compressed by one more fresh sponge.
//! 3. [`KeyDigestDeriver::derive`]: block digests concatenated in order.
//!
//! A sponge instance never outlives one absorb/squeeze cycle.

use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;

use tracing::{debug, trace};
use zeroize::Zeroizing;

use tcrypt_algorithms::{validate, Curl, Sponge, Trit};
use tcrypt_params::pqc::wots::{SigningKeyParams, WotsParams};

use crate::error::{Error, Result};

/// Check that a parameter set describes a usable block layout
pub(crate) fn check_layout<P: SigningKeyParams>() -> Result<()> {
    let fail = |details: &'static str| Error::Structure {
        scheme: P::NAME,
        details,
    };

    if P::BLOCK_LEN == 0 || P::HASH_LENGTH == 0 {
        return Err(fail("block and hash lengths must be non-zero"));
    }
    if P::FRAGMENTS_PER_BLOCK * P::HASH_LENGTH != P::BLOCK_TRITS {
        return Err(fail("block does not split into whole fragments"));
    }
    Ok(())
}

/// Derives the digest of a signing key with sponge `S` and parameters `P`
pub struct KeyDigestDeriver<S: Sponge = Curl, P: SigningKeyParams = WotsParams> {
    _marker: PhantomData<fn() -> (S, P)>,
}

impl<S: Sponge, P: SigningKeyParams> KeyDigestDeriver<S, P> {
    /// Check that `P` and `S` agree on the block layout
    ///
    /// Runs before any hashing, so a misconfigured pair never yields a
    /// partial digest.
    pub fn check_structure() -> Result<()> {
        check_layout::<P>()?;
        if P::HASH_LENGTH != S::hash_length() {
            return Err(Error::Structure {
                scheme: P::NAME,
                details: "fragment length differs from the sponge hash length",
            });
        }
        Ok(())
    }

    /// Chain one fragment through `P::CHAIN_ROUNDS` fresh sponges
    pub fn chain_fragment(fragment: &[Trit]) -> Result<Vec<Trit>> {
        Self::check_structure()?;
        validate::length(
            "KeyDigestDeriver::chain_fragment",
            fragment.len(),
            P::HASH_LENGTH,
        )?;

        let mut buffer = Zeroizing::new(fragment.to_vec());
        Self::chain_in_place(buffer.as_mut_slice())?;
        Ok(buffer.to_vec())
    }

    /// Digest one block of `P::BLOCK_TRITS` trits into `P::HASH_LENGTH` trits
    pub fn block_digest(block: &[Trit]) -> Result<Vec<Trit>> {
        Self::check_structure()?;
        validate::length(
            "KeyDigestDeriver::block_digest",
            block.len(),
            P::BLOCK_TRITS,
        )?;

        let mut segment = vec![0; P::HASH_LENGTH];
        Self::block_digest_into(block, &mut segment)?;
        Ok(segment)
    }

    /// Digest every block of `trits`
    ///
    /// `trits` must hold a whole number of blocks. The result has
    /// `P::HASH_LENGTH` trits per block, in block order; an empty input
    /// yields an empty digest.
    pub fn derive(trits: &[Trit]) -> Result<Vec<Trit>> {
        Self::check_structure()?;
        if trits.len() % P::BLOCK_TRITS != 0 {
            return Err(Error::InvalidBlockLength {
                block_len: P::BLOCK_TRITS,
                actual: trits.len(),
            });
        }

        let block_count = trits.len() / P::BLOCK_TRITS;
        debug!(
            scheme = P::NAME,
            sponge = S::name(),
            block_count,
            "deriving signing key digest"
        );

        let mut digest = vec![0; block_count * P::HASH_LENGTH];
        for (index, (block, segment)) in trits
            .chunks_exact(P::BLOCK_TRITS)
            .zip(digest.chunks_exact_mut(P::HASH_LENGTH))
            .enumerate()
        {
            trace!(block = index, "digesting key block");
            Self::block_digest_into(block, segment)?;
        }

        debug!(digest_trits = digest.len(), "signing key digest derived");
        Ok(digest)
    }

    fn chain_in_place(buffer: &mut [Trit]) -> Result<()> {
        for _ in 0..P::CHAIN_ROUNDS {
            let mut sponge = S::new();
            sponge.absorb(buffer)?;
            sponge.squeeze(buffer)?;
        }
        Ok(())
    }

    // Lengths are validated by the callers.
    fn block_digest_into(block: &[Trit], segment: &mut [Trit]) -> Result<()> {
        let mut key_fragment = Zeroizing::new(block.to_vec());
        for fragment in key_fragment.chunks_exact_mut(P::HASH_LENGTH) {
            Self::chain_in_place(fragment)?;
        }

        S::new().absorb(key_fragment.as_slice())?.squeeze(segment)?;
        Ok(())
    }
}
