//! The Sprout address PRF.
//!
//! "PRF^addr_x(t) := SHA-256(1100 || [x]_252 || [t]_8 || [0]_248)"
//!
//! The leading `1100` bits separate PRF^addr from the other PRFs keyed by the same
//! spending key, which is why a spending key must leave the high nibble of its first
//! byte clear. See ['Sprout Key Components'][ps].
//!
//! [ps]: https://zips.z.cash/protocol/protocol.pdf#sproutkeycomponents

use sha2::{Digest, Sha256};
use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};

use crate::error::Error;

/// The length of a spending key payload, and of every PRF output.
pub const KEY_LEN: usize = 32;

/// The domain separator OR-ed into the first byte of the key.
pub const PRF_ADDR_DOMAIN: u8 = 0xc0;

/// `t` for deriving the paying key `a_pk`.
pub const PRF_ADDR_PAYING_KEY: u8 = 0;

/// `t` for deriving the receiving key `sk_enc`.
pub const PRF_ADDR_RECEIVING_KEY: u8 = 1;

/// Computes `PRF^addr_{a_sk}(t)`.
///
/// `a_sk` must be exactly [`KEY_LEN`] bytes and `t` must be one of
/// [`PRF_ADDR_PAYING_KEY`] or [`PRF_ADDR_RECEIVING_KEY`].
///
/// # Examples
///
/// ```
/// use sprout_keys::prf::{prf_addr, PRF_ADDR_PAYING_KEY};
///
/// let a_pk = prf_addr(&[0; 32], PRF_ADDR_PAYING_KEY).unwrap();
/// assert_eq!(
///     hex::encode(a_pk),
///     "0a0c3604edfa6c2e2e6513769007f37fda894c68c6d949fae2114940fbe9945a",
/// );
/// ```
pub fn prf_addr(a_sk: &[u8], t: u8) -> Result<[u8; 32], Error> {
    let a_sk = key_bytes(a_sk)?;
    match t {
        PRF_ADDR_PAYING_KEY | PRF_ADDR_RECEIVING_KEY => Ok(prf_addr_inner(a_sk, t)),
        _ => Err(Error::InvalidKeyType),
    }
}

/// Computes the transmission key `pk_enc` for `a_sk`.
///
/// This is the X25519 base-point multiple of `PRF^addr_{a_sk}(1)`, with the scalar
/// clamped as usual for X25519.
pub fn enc_prf_addr(a_sk: &[u8]) -> Result<[u8; 32], Error> {
    let a_sk = key_bytes(a_sk)?;
    Ok(enc_prf_addr_inner(a_sk))
}

pub(crate) fn prf_addr_inner(a_sk: &[u8; KEY_LEN], t: u8) -> [u8; 32] {
    let mut block = [0u8; 64];
    block[..KEY_LEN].copy_from_slice(a_sk);
    block[0] |= PRF_ADDR_DOMAIN;
    block[KEY_LEN] = t;

    Sha256::digest(block).into()
}

pub(crate) fn enc_prf_addr_inner(a_sk: &[u8; KEY_LEN]) -> [u8; 32] {
    x25519(
        prf_addr_inner(a_sk, PRF_ADDR_RECEIVING_KEY),
        X25519_BASEPOINT_BYTES,
    )
}

fn key_bytes(a_sk: &[u8]) -> Result<&[u8; KEY_LEN], Error> {
    a_sk.try_into().map_err(|_| Error::InvalidKeyLength {
        expected: KEY_LEN,
        actual: a_sk.len(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use sha2::{Digest, Sha256};
    use x25519_dalek::{PublicKey, StaticSecret};

    use super::{
        enc_prf_addr, prf_addr, KEY_LEN, PRF_ADDR_PAYING_KEY, PRF_ADDR_RECEIVING_KEY,
    };
    use crate::error::Error;

    struct TestVector {
        a_sk: [u8; 32],
        a_pk: &'static str,
        sk_enc: &'static str,
        pk_enc: &'static str,
    }

    fn vectors() -> Vec<TestVector> {
        let mut seq = [0u8; 32];
        for (i, b) in seq.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut ones = [0xff; 32];
        ones[0] = 0x0f;

        vec![
            TestVector {
                a_sk: [0; 32],
                a_pk: "0a0c3604edfa6c2e2e6513769007f37fda894c68c6d949fae2114940fbe9945a",
                sk_enc: "1e9475b593cf540519dc6644b2d1972f08858b5af65cb7ab74b81091c3468c8d",
                pk_enc: "3c12291303705b663144a9f9d2248bb1942aa4ae83b3cca980e15045b108707a",
            },
            TestVector {
                a_sk: seq,
                a_pk: "9a64fec6cae5bb3b105953fc6c3461daa1f19abca3acde77d25ff0ef186358a4",
                sk_enc: "3e6b13a00a2d1c4d889b7240feac4acc7f61f1eaf8a99fde3400de0b2b77efa7",
                pk_enc: "1a5b4850dddf0f32a3a6821f04ba4e208926f76c12dd97f56612285d06e41416",
            },
            TestVector {
                a_sk: ones,
                a_pk: "cc2975fd9d3d359b15251f00560867f8a903e8847388e0cd0cd2a5bcbc69285c",
                sk_enc: "aa6fc6f904d4a7a4a7fa5ee2a22a504b457a2a863b674dfeba85157af0324414",
                pk_enc: "0fe0d38b3c9edf080a0a2198ecbae112bf2fac1471cf2e266657108acd3b6425",
            },
        ]
    }

    #[test]
    fn zero_key_is_a_single_fixed_message() {
        let mut message = [0u8; 64];
        message[0] = 0xc0;
        assert_eq!(
            prf_addr(&[0; 32], PRF_ADDR_PAYING_KEY).unwrap(),
            <[u8; 32]>::from(Sha256::digest(message))
        );

        message[32] = 0x01;
        assert_eq!(
            prf_addr(&[0; 32], PRF_ADDR_RECEIVING_KEY).unwrap(),
            <[u8; 32]>::from(Sha256::digest(message))
        );
    }

    #[test]
    fn test_vectors() {
        for tv in vectors() {
            assert_eq!(
                hex::encode(prf_addr(&tv.a_sk, PRF_ADDR_PAYING_KEY).unwrap()),
                tv.a_pk
            );
            assert_eq!(
                hex::encode(prf_addr(&tv.a_sk, PRF_ADDR_RECEIVING_KEY).unwrap()),
                tv.sk_enc
            );
            assert_eq!(hex::encode(enc_prf_addr(&tv.a_sk).unwrap()), tv.pk_enc);
        }
    }

    #[test]
    fn rejects_wrong_lengths() {
        for len in [0, 1, 31, 33, 64] {
            let a_sk = vec![0u8; len];
            assert_matches!(
                prf_addr(&a_sk, PRF_ADDR_PAYING_KEY),
                Err(Error::InvalidKeyLength { expected: KEY_LEN, actual }) if actual == len
            );
            assert_matches!(
                enc_prf_addr(&a_sk),
                Err(Error::InvalidKeyLength { expected: KEY_LEN, actual }) if actual == len
            );
        }
    }

    #[test]
    fn rejects_unknown_tags() {
        for t in [2, 0x80, 0xff] {
            assert_matches!(prf_addr(&[0; 32], t), Err(Error::InvalidKeyType));
        }
    }

    proptest! {
        #[test]
        fn enc_prf_addr_is_base_point_multiple(a_sk in prop::array::uniform32(any::<u8>())) {
            let sk_enc = prf_addr(&a_sk, PRF_ADDR_RECEIVING_KEY).unwrap();
            let expected = PublicKey::from(&StaticSecret::from(sk_enc));
            prop_assert_eq!(enc_prf_addr(&a_sk).unwrap(), expected.to_bytes());
        }

        #[test]
        fn prf_addr_is_deterministic(a_sk in prop::array::uniform32(any::<u8>())) {
            prop_assert_eq!(
                prf_addr(&a_sk, PRF_ADDR_PAYING_KEY).unwrap(),
                prf_addr(&a_sk, PRF_ADDR_PAYING_KEY).unwrap()
            );
            prop_assert_ne!(
                prf_addr(&a_sk, PRF_ADDR_PAYING_KEY).unwrap(),
                prf_addr(&a_sk, PRF_ADDR_RECEIVING_KEY).unwrap()
            );
        }

        #[test]
        fn domain_bits_are_absorbed(a_sk in prop::array::uniform32(any::<u8>())) {
            // The two high bits are forced on, so they never change the output.
            let mut marked = a_sk;
            marked[0] |= 0xc0;
            prop_assert_eq!(
                prf_addr(&a_sk, PRF_ADDR_PAYING_KEY).unwrap(),
                prf_addr(&marked, PRF_ADDR_PAYING_KEY).unwrap()
            );
        }
    }
}
