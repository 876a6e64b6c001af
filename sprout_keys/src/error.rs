//! Errors returned by key creation and address derivation.

use std::error;
use std::fmt;

use bs58::decode::Error as Bs58Error;
use sprout_protocol::InvalidNetwork;

/// The reasons a Sprout key or address operation can fail.
///
/// Every variant is a deterministic validation failure; retrying with the same inputs
/// produces the same error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The network identifier is neither `"mainnet"` nor `"testnet"`.
    InvalidNetwork(String),
    /// The spending key payload has one of the four high bits of its first byte set.
    InvalidKey,
    /// The spending key payload is not exactly 32 bytes long.
    InvalidKeyLength { expected: usize, actual: usize },
    /// The input is not a well-formed buffer for the requested operation.
    InvalidKeyType,
    /// The string is not valid Base58Check.
    InvalidEncoding(Bs58Error),
    /// The decoded version prefix does not belong to the requested network.
    InvalidKeyHeader { expected: [u8; 2], actual: [u8; 2] },
    /// An encoded address had an unexpected length.
    InvalidAddressLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNetwork(id) => write!(
                f,
                "Invalid network choice {:?}: expected \"mainnet\" or \"testnet\"",
                id
            ),
            Error::InvalidKey => write!(f, "Invalid spending key"),
            Error::InvalidKeyLength { expected, actual } => write!(
                f,
                "Invalid key length: expected {} bytes, got {}",
                expected, actual
            ),
            Error::InvalidKeyType => write!(f, "Invalid key instance"),
            Error::InvalidEncoding(e) => write!(f, "Invalid Base58Check encoding: {}", e),
            Error::InvalidKeyHeader { expected, actual } => write!(
                f,
                "Invalid spending key header: expected {}, got {}",
                hex::encode(expected),
                hex::encode(actual)
            ),
            Error::InvalidAddressLength(len) => write!(f, "Invalid zaddr length {}", len),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidEncoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidNetwork> for Error {
    fn from(e: InvalidNetwork) -> Self {
        Error::InvalidNetwork(e.0)
    }
}

impl From<Bs58Error> for Error {
    fn from(e: Bs58Error) -> Self {
        Error::InvalidEncoding(e)
    }
}
