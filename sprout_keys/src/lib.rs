//! *A crate for Sprout key and address derivation.*
//!
//! `sprout_keys` creates Sprout spending keys, either from the operating system's CSPRNG
//! or by stretching a seed, and derives the shielded payment address that belongs to a
//! spending key:
//!
//! ```text
//! a_sk ──PRF^addr(·, 0)──────────────────▶ a_pk ─┐
//!   └───PRF^addr(·, 1)──▶ sk_enc ──X25519──▶ pk_enc ─┴─▶ Base58Check(prefix || a_pk || pk_enc)
//! ```
//!
//! The string-level entry points are [`create_key`], [`create_key_from_seed`] and
//! [`convert_key_to_address`]. The typed API in [`keys`], [`address`] and [`encoding`]
//! exposes the same derivation without the Base58Check round trips.
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

pub mod address;
pub mod encoding;
pub mod error;
pub mod keygen;
pub mod keys;
pub mod prf;

pub use address::convert_key_to_address;
pub use error::Error;
pub use keygen::{create_key, create_key_from_seed};
pub use keys::validate_key;
pub use sprout_protocol::{validate_network, Network, NetworkProfile};

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing {
    pub use crate::keys::testing::arb_spending_key;
    pub use sprout_protocol::consensus::testing::arb_network;
}
