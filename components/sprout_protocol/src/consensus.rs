//! Network parameters.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::constants::{mainnet, testnet};

/// The network identifier accepted for the production network.
pub const MAINNET_ID: &str = "mainnet";

/// The network identifier accepted for the test network.
pub const TESTNET_ID: &str = "testnet";

/// The Zcash network that a key or address is intended for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    /// Zcash Mainnet.
    Main,
    /// Zcash Testnet.
    Test,
}

/// Every network with a [`NetworkProfile`], in table order.
pub const NETWORKS: [Network; 2] = [Network::Main, Network::Test];

/// Constants associated with a given Zcash network.
pub trait NetworkConstants: Clone {
    /// Returns the Base58Check version prefix for Sprout spending keys.
    fn b58_sprout_spending_key_prefix(&self) -> [u8; 2];

    /// Returns the Base58Check version prefix for Sprout shielded payment addresses.
    fn b58_sprout_address_prefix(&self) -> [u8; 2];
}

impl NetworkConstants for Network {
    fn b58_sprout_spending_key_prefix(&self) -> [u8; 2] {
        match self {
            Network::Main => mainnet::B58_SPROUT_SPENDING_KEY_PREFIX,
            Network::Test => testnet::B58_SPROUT_SPENDING_KEY_PREFIX,
        }
    }

    fn b58_sprout_address_prefix(&self) -> [u8; 2] {
        match self {
            Network::Main => mainnet::B58_SPROUT_ADDRESS_PREFIX,
            Network::Test => testnet::B58_SPROUT_ADDRESS_PREFIX,
        }
    }
}

impl Network {
    /// Returns the identifier string for this network.
    pub const fn id(&self) -> &'static str {
        match self {
            Network::Main => MAINNET_ID,
            Network::Test => TESTNET_ID,
        }
    }

    /// Returns the header bytes used by this network's encodings.
    pub const fn profile(&self) -> NetworkProfile {
        match self {
            Network::Main => NetworkProfile::MAINNET,
            Network::Test => NetworkProfile::TESTNET,
        }
    }

    /// Returns the network whose spending keys carry the given prefix, if any.
    pub fn from_spending_key_prefix(prefix: [u8; 2]) -> Option<Self> {
        NETWORKS
            .into_iter()
            .find(|net| net.b58_sprout_spending_key_prefix() == prefix)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Network {
    type Err = InvalidNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MAINNET_ID => Ok(Network::Main),
            TESTNET_ID => Ok(Network::Test),
            _ => Err(InvalidNetwork(s.into())),
        }
    }
}

/// The pair of Base58Check headers that distinguishes one network's encodings
/// from another's.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkProfile {
    /// Prepended to a spending key payload before encoding.
    pub key_prefix: [u8; 2],
    /// Prepended to `a_pk || pk_enc` before encoding.
    pub addr_prefix: [u8; 2],
}

impl NetworkProfile {
    /// The Mainnet headers.
    pub const MAINNET: NetworkProfile = NetworkProfile {
        key_prefix: mainnet::B58_SPROUT_SPENDING_KEY_PREFIX,
        addr_prefix: mainnet::B58_SPROUT_ADDRESS_PREFIX,
    };

    /// The Testnet headers.
    pub const TESTNET: NetworkProfile = NetworkProfile {
        key_prefix: testnet::B58_SPROUT_SPENDING_KEY_PREFIX,
        addr_prefix: testnet::B58_SPROUT_ADDRESS_PREFIX,
    };

    /// Looks up the profile for a network identifier.
    ///
    /// Exactly `"mainnet"` and `"testnet"` are recognized; matching is
    /// case-sensitive and does not trim whitespace.
    pub fn lookup(network_id: &str) -> Result<Self, InvalidNetwork> {
        network_id.parse::<Network>().map(|net| net.profile())
    }
}

impl fmt::Debug for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkProfile")
            .field("key_prefix", &hex::encode(self.key_prefix))
            .field("addr_prefix", &hex::encode(self.addr_prefix))
            .finish()
    }
}

/// Returns `true` iff `network_id` names a supported network.
pub fn validate_network(network_id: &str) -> bool {
    network_id.parse::<Network>().is_ok()
}

/// The error returned when a network identifier is not recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidNetwork(pub String);

impl fmt::Display for InvalidNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid network choice {:?}: expected \"{}\" or \"{}\"",
            self.0, MAINNET_ID, TESTNET_ID
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidNetwork {}

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing {
    use proptest::prelude::*;

    use super::{Network, NETWORKS};

    /// Selects one of the supported networks.
    pub fn arb_network() -> impl Strategy<Value = Network> {
        proptest::sample::select(NETWORKS.to_vec())
    }
}
