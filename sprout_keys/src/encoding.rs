//! Encoding and decoding functions for Sprout spending keys and shielded payment
//! addresses.
//!
//! Both use Base58Check over a two-byte version prefix followed by the raw key
//! material. The prefixes are defined in [`sprout_protocol::constants`].

use sprout_protocol::{constants::B58_PREFIX_LEN, NetworkConstants};

use crate::{
    address::{PaymentAddress, ADDRESS_BODY_LEN},
    error::Error,
    keys::SpendingKey,
};

/// The length of a Base58Check-encoded Sprout shielded payment address.
pub const ADDRESS_ENCODED_LEN: usize = 95;

fn encode_b58(prefix: &[u8; B58_PREFIX_LEN], data: &[u8]) -> String {
    let mut decoded = Vec::with_capacity(B58_PREFIX_LEN + data.len());
    decoded.extend_from_slice(prefix);
    decoded.extend_from_slice(data);
    bs58::encode(decoded).with_check().into_string()
}

/// Decodes a Base58Check string and splits off its version prefix.
fn decode_b58(s: &str) -> Result<([u8; B58_PREFIX_LEN], Vec<u8>), Error> {
    let mut decoded = bs58::decode(s).with_check(None).into_vec()?;
    if decoded.len() < B58_PREFIX_LEN {
        return Err(Error::InvalidKeyType);
    }

    let payload = decoded.split_off(B58_PREFIX_LEN);
    let mut prefix = [0; B58_PREFIX_LEN];
    prefix.copy_from_slice(&decoded);
    Ok((prefix, payload))
}

/// A trait for encoding and decoding Sprout shielded payment addresses.
pub trait AddressCodec<P>
where
    Self: std::marker::Sized,
{
    type Error;

    /// Encode a Sprout shielded payment address.
    ///
    /// # Arguments
    /// * `params` - The network the address is to be used on.
    fn encode(&self, params: &P) -> String;

    /// Decodes a Sprout shielded payment address from its string representation.
    ///
    /// # Arguments
    /// * `params` - The network the address is to be used on.
    /// * `address` - The string representation of the address.
    fn decode(params: &P, address: &str) -> Result<Self, Self::Error>;
}

impl<P: NetworkConstants> AddressCodec<P> for PaymentAddress {
    type Error = Error;

    fn encode(&self, params: &P) -> String {
        encode_payment_address(&params.b58_sprout_address_prefix(), self)
    }

    fn decode(params: &P, address: &str) -> Result<Self, Error> {
        decode_payment_address(&params.b58_sprout_address_prefix(), address)
    }
}

/// Writes a [`SpendingKey`] as a Base58Check-encoded string.
///
/// # Examples
///
/// ```
/// use sprout_keys::{encoding::encode_spending_key, keys::SpendingKey};
/// use sprout_protocol::constants::mainnet::B58_SPROUT_SPENDING_KEY_PREFIX;
///
/// let sk = SpendingKey::from_bytes([0; 32]).unwrap();
/// assert_eq!(
///     encode_spending_key(&B58_SPROUT_SPENDING_KEY_PREFIX, &sk),
///     "SKxny894fJe2rmZjeuoE6GVfNkWoXfPp8337VrLLNWG56FfQtuS1",
/// );
/// ```
pub fn encode_spending_key(prefix: &[u8; B58_PREFIX_LEN], sk: &SpendingKey) -> String {
    encode_b58(prefix, &sk.to_bytes())
}

/// Decodes a [`SpendingKey`] from a Base58Check-encoded string.
///
/// The payload is validated before the prefix is compared, so a well-formed key for
/// the wrong network fails with [`Error::InvalidKeyHeader`] while a malformed key fails
/// with [`Error::InvalidKeyLength`] or [`Error::InvalidKey`] regardless of its prefix.
pub fn decode_spending_key(prefix: &[u8; B58_PREFIX_LEN], s: &str) -> Result<SpendingKey, Error> {
    let (actual, payload) = decode_b58(s)?;
    let sk = SpendingKey::from_slice(&payload)?;

    if actual != *prefix {
        return Err(Error::InvalidKeyHeader {
            expected: *prefix,
            actual,
        });
    }

    Ok(sk)
}

/// Writes a [`PaymentAddress`] as a Base58Check-encoded string.
///
/// # Examples
///
/// ```
/// use sprout_keys::{address::PaymentAddress, encoding::encode_payment_address};
/// use sprout_protocol::constants::testnet::B58_SPROUT_ADDRESS_PREFIX;
///
/// let addr = PaymentAddress::from_bytes(&[0; 64]);
/// assert_eq!(
///     encode_payment_address(&B58_SPROUT_ADDRESS_PREFIX, &addr),
///     "ztJ1EWLKcGwF2S4NA17pAJVdco8Sdkz4AQPxt1cLTEfNuyNswJJc2BbBqYrsRZsp31xbVZwhF7c7a2L9jsF3p3ZwRWpqqyS",
/// );
/// ```
pub fn encode_payment_address(prefix: &[u8; B58_PREFIX_LEN], addr: &PaymentAddress) -> String {
    encode_b58(prefix, &addr.to_bytes())
}

/// Decodes a [`PaymentAddress`] from a Base58Check-encoded string.
pub fn decode_payment_address(
    prefix: &[u8; B58_PREFIX_LEN],
    s: &str,
) -> Result<PaymentAddress, Error> {
    let (actual, body) = decode_b58(s)?;

    if actual != *prefix {
        return Err(Error::InvalidKeyHeader {
            expected: *prefix,
            actual,
        });
    }

    let body: [u8; ADDRESS_BODY_LEN] = body
        .try_into()
        .map_err(|body: Vec<u8>| Error::InvalidAddressLength(B58_PREFIX_LEN + body.len()))?;
    Ok(PaymentAddress::from_bytes(&body))
}
