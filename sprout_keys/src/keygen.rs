//! Creation of new Base58Check-encoded Sprout spending keys.

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use sprout_protocol::{Network, NetworkConstants};
use tracing::debug;

use crate::{encoding::encode_spending_key, error::Error, keys::SpendingKey};

/// The PBKDF2 iteration count used by [`create_key_from_seed`].
///
/// Keys derived by earlier wallets from a seed were stretched with 18 rounds (the
/// result of evaluating `2 ^ 16` as a bitwise XOR), and reproducing them requires the
/// same count. New deployments that do not need to regenerate such keys should call
/// [`create_key_from_seed_with_rounds`] with [`RECOMMENDED_SEED_ROUNDS`].
pub const LEGACY_SEED_ROUNDS: u32 = 18;

/// A PBKDF2 iteration count of 2^16.
pub const RECOMMENDED_SEED_ROUNDS: u32 = 1 << 16;

/// Creates a new random spending key for `network`, encoded as Base58Check.
///
/// Randomness is drawn from the operating system's CSPRNG.
pub fn create_key(network: &str) -> Result<String, Error> {
    create_key_with_rng(network, &mut OsRng)
}

/// Creates a new random spending key for `network` using the given CSPRNG.
pub fn create_key_with_rng<R: RngCore + CryptoRng>(
    network: &str,
    rng: &mut R,
) -> Result<String, Error> {
    let network: Network = network.parse()?;
    let sk = SpendingKey::random(rng);

    debug!(%network, "Created random Sprout spending key");
    Ok(encode_spending_key(
        &network.b58_sprout_spending_key_prefix(),
        &sk,
    ))
}

/// Deterministically derives a spending key for `network` from `seed` and `salt`,
/// encoded as Base58Check.
///
/// Uses [`LEGACY_SEED_ROUNDS`] iterations of PBKDF2-HMAC-SHA256; see
/// [`create_key_from_seed_with_rounds`].
pub async fn create_key_from_seed(
    network: &str,
    seed: &[u8],
    salt: &[u8],
) -> Result<String, Error> {
    create_key_from_seed_with_rounds(network, seed, salt, LEGACY_SEED_ROUNDS).await
}

/// Deterministically derives a spending key for `network` from `seed` and `salt` with
/// `rounds` iterations of PBKDF2-HMAC-SHA256, encoded as Base58Check.
///
/// The network is validated before any stretching starts. Stretching runs on Tokio's
/// blocking thread pool so the calling task's worker thread stays free, which means
/// this must be awaited from within a Tokio runtime.
///
/// Stretching cannot be cancelled: if the returned future is dropped, the blocking task
/// still runs to completion and its output is discarded.
pub async fn create_key_from_seed_with_rounds(
    network: &str,
    seed: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<String, Error> {
    let network: Network = network.parse()?;

    let seed = seed.to_vec();
    let salt = salt.to_vec();
    let sk = match tokio::task::spawn_blocking(move || SpendingKey::from_seed(&seed, &salt, rounds))
        .await
    {
        Ok(sk) => sk,
        // Key stretching has no error path, so a failed join is a panic inside PBKDF2.
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    };

    debug!(%network, rounds, "Derived Sprout spending key from seed");
    Ok(encode_spending_key(
        &network.b58_sprout_spending_key_prefix(),
        &sk,
    ))
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaChaRng;
    use rand_core::SeedableRng;
    use sprout_protocol::constants::{mainnet, testnet};

    use super::{
        create_key, create_key_from_seed, create_key_from_seed_with_rounds, create_key_with_rng,
        RECOMMENDED_SEED_ROUNDS,
    };
    use crate::{address::convert_key_to_address, error::Error, keys::validate_key};

    fn decode(s: &str) -> Vec<u8> {
        bs58::decode(s).with_check(None).into_vec().unwrap()
    }

    #[test]
    fn legacy_round_count() {
        assert_eq!(super::LEGACY_SEED_ROUNDS, 2 ^ 16);
        assert_eq!(RECOMMENDED_SEED_ROUNDS, 65_536);
    }

    #[test]
    fn create_key_has_network_prefix() {
        for (network, prefix) in [
            ("mainnet", mainnet::B58_SPROUT_SPENDING_KEY_PREFIX),
            ("testnet", testnet::B58_SPROUT_SPENDING_KEY_PREFIX),
        ] {
            for _ in 0..20 {
                let key = create_key(network).unwrap();
                let decoded = decode(&key);
                assert_eq!(decoded.len(), 34);
                assert_eq!(decoded[..2], prefix);
                assert!(validate_key(&decoded[2..]));

                assert!(convert_key_to_address(&key, network).is_ok());
            }
        }
    }

    #[test]
    fn create_key_mainnet_round_trip() {
        let decoded = decode(&create_key("mainnet").unwrap());
        assert_eq!(decoded[..2], [0xab, 0x36]);
        assert_eq!(decoded[2] & 0xf0, 0);
        assert_eq!(decoded[2..].len(), 32);
    }

    #[test]
    fn create_key_rejects_unknown_network() {
        assert_eq!(
            create_key("zcash"),
            Err(Error::InvalidNetwork("zcash".into()))
        );
    }

    #[test]
    fn create_key_with_rng_is_deterministic() {
        let a = create_key_with_rng("testnet", &mut ChaChaRng::seed_from_u64(7)).unwrap();
        let b = create_key_with_rng("testnet", &mut ChaChaRng::seed_from_u64(7)).unwrap();
        let c = create_key_with_rng("testnet", &mut ChaChaRng::seed_from_u64(8)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("ST"));
    }

    #[tokio::test]
    async fn create_key_from_seed_vectors() {
        let seed = b"correct horse battery staple";

        assert_eq!(
            create_key_from_seed("mainnet", seed, b"zcash").await.as_deref(),
            Ok("SKxsVEBNeJ2CNtBs8Jm1KcFic39yXWkoRqWNs21oWWAgsxE5eNuu")
        );
        assert_eq!(
            create_key_from_seed("testnet", seed, b"zcash").await.as_deref(),
            Ok("ST15pGsdMFNDwCTuEgVM9ubdEM7JL2dmK5jFUFUFmFn6KaoWRTuX")
        );
        assert_eq!(
            create_key_from_seed_with_rounds("mainnet", seed, b"zcash", RECOMMENDED_SEED_ROUNDS)
                .await
                .as_deref(),
            Ok("SKxu3gQdRgns7tykY8mGdCcyc4GJnzgMq3VJL1GzwDok3Y9Xifry")
        );
    }

    #[tokio::test]
    async fn create_key_from_seed_is_deterministic() {
        let first = create_key_from_seed("testnet", b"seed", b"salt").await.unwrap();
        let second = create_key_from_seed("testnet", b"seed", b"salt").await.unwrap();
        let other_salt = create_key_from_seed("testnet", b"seed", b"pepper")
            .await
            .unwrap();
        assert_eq!(first, second);
        assert_ne!(first, other_salt);
    }

    #[tokio::test]
    async fn create_key_from_seed_derives_address() {
        let key = create_key_from_seed("mainnet", b"correct horse battery staple", b"zcash")
            .await
            .unwrap();
        assert_eq!(
            convert_key_to_address(&key, "mainnet").as_deref(),
            Ok("zcLZTDcsneQasxvBCeU3ob9cdew8BaoZaZtWPPVg9S4JDvGTAsBuDvVWYGFCBzjnN2q4NrAn2K3fHE2F9PGUTEDTomhZ7xF")
        );
    }

    #[tokio::test]
    async fn create_key_from_seed_rejects_unknown_network() {
        assert_eq!(
            create_key_from_seed("", b"seed", b"salt").await,
            Err(Error::InvalidNetwork(String::new()))
        );
    }
}
