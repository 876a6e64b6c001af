//! Network-specific Sprout constants.

pub mod mainnet;
pub mod testnet;

/// The length in bytes of every Base58Check version prefix used by Sprout encodings.
pub const B58_PREFIX_LEN: usize = 2;
