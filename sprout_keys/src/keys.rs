//! Sprout key types.
//!
//! "The receiving key sk_enc, the incoming viewing key ivk = (apk,
//! sk_enc), and the shielded payment address addr_pk = (a_pk, pk_enc) are
//! derived from a_sk, as described in ['Sprout Key Components'][ps]
//!
//! Only the spending key, the paying key and the transmission key are
//! implemented here.
//!
//! [ps]: https://zips.z.cash/protocol/protocol.pdf#sproutkeycomponents

use std::fmt;

use rand_core::{CryptoRng, RngCore};
use sha2::Sha256;
use subtle::{Choice, ConstantTimeEq};
use x25519_dalek::PublicKey;

use crate::{
    address::PaymentAddress,
    error::Error,
    prf::{enc_prf_addr_inner, prf_addr_inner, KEY_LEN, PRF_ADDR_PAYING_KEY},
};

/// The bits of the first payload byte that a spending key may use.
///
/// The remaining four bits are reserved for PRF domain separation.
pub const SPENDING_KEY_FIRST_BYTE_MASK: u8 = 0x0f;

/// Returns `true` iff `payload` could be the payload of a spending key, that is,
/// it is non-empty and the high nibble of its first byte is clear.
///
/// This does not check the length; see [`SpendingKey::from_slice`].
pub fn validate_key(payload: &[u8]) -> bool {
    matches!(payload.first(), Some(b) if b & !SPENDING_KEY_FIRST_BYTE_MASK == 0)
}

/// A Sprout _spending key_ `a_sk`.
///
/// All other Sprout key types derive from the spending key. The high nibble of the
/// first byte is always zero.
#[derive(Clone)]
pub struct SpendingKey([u8; KEY_LEN]);

impl SpendingKey {
    /// Parses a spending key from its 32-byte payload.
    ///
    /// Returns [`Error::InvalidKey`] if the high nibble of the first byte is set.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Result<Self, Error> {
        if validate_key(&bytes) {
            Ok(SpendingKey(bytes))
        } else {
            Err(Error::InvalidKey)
        }
    }

    /// Parses a spending key from a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: KEY_LEN,
            actual: bytes.len(),
        })?;
        Self::from_bytes(bytes)
    }

    /// Builds a spending key from 32 uniformly random bytes by clearing the reserved
    /// bits.
    fn from_bytes_masked(mut bytes: [u8; KEY_LEN]) -> Self {
        bytes[0] &= SPENDING_KEY_FIRST_BYTE_MASK;
        SpendingKey(bytes)
    }

    /// Samples a new spending key from `rng`.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0; KEY_LEN];
        rng.fill_bytes(&mut bytes);
        Self::from_bytes_masked(bytes)
    }

    /// Derives a spending key from `seed` and `salt` with `rounds` iterations of
    /// PBKDF2-HMAC-SHA256.
    ///
    /// This is CPU-bound for any useful `rounds`; async callers should use
    /// [`create_key_from_seed`] instead of calling it directly.
    ///
    /// [`create_key_from_seed`]: crate::keygen::create_key_from_seed
    pub fn from_seed(seed: &[u8], salt: &[u8], rounds: u32) -> Self {
        let mut bytes = [0; KEY_LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(seed, salt, rounds, &mut bytes);
        Self::from_bytes_masked(bytes)
    }

    /// Returns the 32-byte payload of this key.
    pub fn to_bytes(&self) -> [u8; KEY_LEN] {
        self.0
    }

    /// Derives the paying key `a_pk = PRF^addr_{a_sk}(0)`.
    pub fn paying_key(&self) -> PayingKey {
        PayingKey(prf_addr_inner(&self.0, PRF_ADDR_PAYING_KEY))
    }

    /// Derives the transmission key `pk_enc`, the X25519 public key corresponding to
    /// `sk_enc = PRF^addr_{a_sk}(1)`.
    pub fn transmission_key(&self) -> TransmissionKey {
        TransmissionKey(PublicKey::from(enc_prf_addr_inner(&self.0)))
    }

    /// Derives the shielded payment address `(a_pk, pk_enc)` for this key.
    pub fn address(&self) -> PaymentAddress {
        PaymentAddress::from_parts(self.paying_key(), self.transmission_key())
    }
}

impl ConstantTimeEq for SpendingKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for SpendingKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SpendingKey {}

impl fmt::Debug for SpendingKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("SpendingKey").field(&"[REDACTED]").finish()
    }
}

/// A Sprout _paying key_ `a_pk`.
///
/// Derived from a Sprout spending key.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct PayingKey(pub [u8; 32]);

impl AsRef<[u8]> for PayingKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PayingKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("PayingKey")
            .field(&hex::encode(self.0))
            .finish()
    }
}

/// A Sprout _transmission key_ `pk_enc`, used to encrypt notes to an address.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct TransmissionKey(PublicKey);

impl TransmissionKey {
    /// Returns the encoding of this key as a Curve25519 u-coordinate.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }
}

impl From<[u8; 32]> for TransmissionKey {
    fn from(bytes: [u8; 32]) -> Self {
        TransmissionKey(PublicKey::from(bytes))
    }
}

impl From<TransmissionKey> for PublicKey {
    fn from(pk_enc: TransmissionKey) -> Self {
        pk_enc.0
    }
}

impl AsRef<[u8]> for TransmissionKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for TransmissionKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("TransmissionKey")
            .field(&hex::encode(self.0.as_bytes()))
            .finish()
    }
}

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing {
    use proptest::prelude::*;

    use super::{SpendingKey, SPENDING_KEY_FIRST_BYTE_MASK};

    prop_compose! {
        /// Generates spending keys that satisfy the high-nibble invariant.
        pub fn arb_spending_key()(
            mut bytes in prop::array::uniform32(any::<u8>()),
        ) -> SpendingKey {
            bytes[0] &= SPENDING_KEY_FIRST_BYTE_MASK;
            SpendingKey::from_bytes(bytes).unwrap()
        }
    }
}
