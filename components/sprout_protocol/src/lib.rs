//! *A crate for Sprout network constants.*
//!
//! `sprout_protocol` contains the Base58Check version prefixes that distinguish Sprout
//! spending keys and shielded payment addresses on the Zcash main and test networks,
//! and the immutable [`NetworkProfile`] table built from them.
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

#[cfg_attr(test, macro_use)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod consensus;
pub mod constants;

pub use consensus::{validate_network, InvalidNetwork, Network, NetworkConstants, NetworkProfile};
