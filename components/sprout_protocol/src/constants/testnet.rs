//! Constants for the Zcash test network.

/// The prefix for a Base58Check-encoded testnet Sprout spending key.
///
/// Encoded keys start with "ST".
pub const B58_SPROUT_SPENDING_KEY_PREFIX: [u8; 2] = [0xac, 0x08];

/// The prefix for a Base58Check-encoded testnet Sprout shielded payment address.
///
/// Encoded addresses start with "zt".
pub const B58_SPROUT_ADDRESS_PREFIX: [u8; 2] = [0x16, 0xb6];
