//! Constants for the Zcash main network.

/// The prefix for a Base58Check-encoded mainnet Sprout spending key.
///
/// Defined in the [Zcash Protocol Specification section 5.6.5][sproutspendingkeyencoding].
/// Encoded keys start with "SK".
///
/// [sproutspendingkeyencoding]: https://zips.z.cash/protocol/protocol.pdf#sproutspendingkeyencoding
pub const B58_SPROUT_SPENDING_KEY_PREFIX: [u8; 2] = [0xab, 0x36];

/// The prefix for a Base58Check-encoded mainnet Sprout shielded payment address.
///
/// Defined in the [Zcash Protocol Specification section 5.6.3][sproutpaymentaddrencoding].
/// Encoded addresses start with "zc".
///
/// [sproutpaymentaddrencoding]: https://zips.z.cash/protocol/protocol.pdf#sproutpaymentaddrencoding
pub const B58_SPROUT_ADDRESS_PREFIX: [u8; 2] = [0x16, 0x9a];
