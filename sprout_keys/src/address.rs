//! Sprout shielded payment addresses.

use sprout_protocol::{Network, NetworkConstants};
use tracing::{debug, trace};

use crate::{
    encoding::{decode_spending_key, encode_payment_address, ADDRESS_ENCODED_LEN},
    error::Error,
    keys::{PayingKey, TransmissionKey},
};

/// The length of the raw `a_pk || pk_enc` encoding of an address.
pub const ADDRESS_BODY_LEN: usize = 64;

/// A Sprout shielded payment address `addr_pk = (a_pk, pk_enc)`.
///
/// Defined in the [Zcash Protocol Specification section 5.6.3][sproutpaymentaddrencoding].
///
/// [sproutpaymentaddrencoding]: https://zips.z.cash/protocol/protocol.pdf#sproutpaymentaddrencoding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentAddress {
    paying_key: PayingKey,
    transmission_key: TransmissionKey,
}

impl PaymentAddress {
    /// Constructs an address from its components.
    pub fn from_parts(paying_key: PayingKey, transmission_key: TransmissionKey) -> Self {
        PaymentAddress {
            paying_key,
            transmission_key,
        }
    }

    /// Parses an address from `a_pk || pk_enc`.
    ///
    /// Every 64-byte string is a valid Sprout address encoding.
    pub fn from_bytes(bytes: &[u8; ADDRESS_BODY_LEN]) -> Self {
        let mut a_pk = [0; 32];
        let mut pk_enc = [0; 32];
        a_pk.copy_from_slice(&bytes[..32]);
        pk_enc.copy_from_slice(&bytes[32..]);

        PaymentAddress {
            paying_key: PayingKey(a_pk),
            transmission_key: TransmissionKey::from(pk_enc),
        }
    }

    /// Returns `a_pk || pk_enc`.
    pub fn to_bytes(&self) -> [u8; ADDRESS_BODY_LEN] {
        let mut bytes = [0; ADDRESS_BODY_LEN];
        bytes[..32].copy_from_slice(&self.paying_key.0);
        bytes[32..].copy_from_slice(&self.transmission_key.to_bytes());
        bytes
    }

    /// Returns the paying key `a_pk`.
    pub fn paying_key(&self) -> &PayingKey {
        &self.paying_key
    }

    /// Returns the transmission key `pk_enc`.
    pub fn transmission_key(&self) -> &TransmissionKey {
        &self.transmission_key
    }
}

/// Converts a Base58Check-encoded spending key into the Base58Check encoding of its
/// shielded payment address on `network`.
///
/// The key must carry the spending key prefix of `network`; a key for another network
/// fails with [`Error::InvalidKeyHeader`].
///
/// # Examples
///
/// ```
/// use sprout_keys::address::convert_key_to_address;
///
/// let zaddr = convert_key_to_address(
///     "SKxny894fJe2rmZjeuoE6GVfNkWoXfPp8337VrLLNWG56FfQtuS1",
///     "mainnet",
/// )
/// .unwrap();
/// assert_eq!(
///     zaddr,
///     "zc9YKkBCXuZNokRuYKrfrp6rvLxCEeJGbYKYvy9ssWGtDTqcfpFvdiNefVwwUcrw5eFTp4VT9ZM66h9gGgyxXVuJ1eZFbHD",
/// );
/// ```
pub fn convert_key_to_address(encoded_key: &str, network: &str) -> Result<String, Error> {
    let network: Network = network.parse()?;
    let sk = decode_spending_key(&network.b58_sprout_spending_key_prefix(), encoded_key)
        .inspect_err(|e| {
            if let Error::InvalidKeyHeader { actual, .. } = e {
                debug!(
                    expected = %network,
                    actual = ?Network::from_spending_key_prefix(*actual),
                    "Spending key was encoded for another network"
                );
            }
        })?;
    trace!("Decoded spending key for {}", network);

    let zaddr = encode_payment_address(&network.b58_sprout_address_prefix(), &sk.address());
    if zaddr.len() != ADDRESS_ENCODED_LEN {
        return Err(Error::InvalidAddressLength(zaddr.len()));
    }

    debug!(%network, %zaddr, "Derived Sprout address");
    Ok(zaddr)
}
