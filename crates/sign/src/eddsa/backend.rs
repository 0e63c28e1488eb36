//! One-time initialization of the Ed25519 backend
//!
//! The backend is brought up once per process. Concurrent first callers block
//! on the same `OnceCell` and all observe the single outcome. A failed
//! initialization is cached, so every later operation reports the same fatal
//! error instead of running on an unverified backend.

use ed25519_dalek::{Signer, SigningKey};
use once_cell::sync::OnceCell;

use super::constants::{ALGORITHM, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SEED_LEN, SIGNATURE_LEN};
use crate::error::{Error, Result};

/// Sizes published by the backend once it is initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Params {
    pub private_key_len: usize,
    pub public_key_len: usize,
    pub signature_len: usize,
}

static BACKEND: OnceCell<Result<Ed25519Params>> = OnceCell::new();

const SELF_TEST_SEED: [u8; SEED_LEN] = [0x5a; SEED_LEN];
const SELF_TEST_MESSAGE: &[u8] = b"natrium backend self-test";

/// Initialize the backend, or return the outcome of the first initialization.
///
/// Safe to call any number of times from any number of threads. Every
/// operation in this module calls it before touching key material.
///
/// # Errors
///
/// Returns [`Error::Initialization`] if the backend failed its start-up
/// self-test. The error is fatal and permanent for this process.
pub fn init() -> Result<&'static Ed25519Params> {
    init_with(&BACKEND, self_test)
}

/// Run `check` into `cell` on first use and hand back the cached outcome.
pub(crate) fn init_with<'a>(
    cell: &'a OnceCell<Result<Ed25519Params>>,
    check: fn() -> Result<()>,
) -> Result<&'a Ed25519Params> {
    cell.get_or_init(|| start(check)).as_ref().map_err(Clone::clone)
}

fn start(check: fn() -> Result<()>) -> Result<Ed25519Params> {
    match check() {
        Ok(()) => {
            let params = Ed25519Params {
                private_key_len: PRIVATE_KEY_LEN,
                public_key_len: PUBLIC_KEY_LEN,
                signature_len: SIGNATURE_LEN,
            };
            tracing::debug!(
                algorithm = ALGORITHM,
                private_key_len = params.private_key_len,
                public_key_len = params.public_key_len,
                signature_len = params.signature_len,
                "signature backend initialized"
            );
            Ok(params)
        }
        Err(err) => {
            tracing::error!(algorithm = ALGORITHM, error = %err, "signature backend failed to initialize");
            Err(err)
        }
    }
}

/// Pairwise-consistency check: expand a fixed seed, round-trip the key pair
/// encoding, sign, verify, and make sure a tampered signature is rejected.
fn self_test() -> Result<()> {
    let signing_key = SigningKey::from_bytes(&SELF_TEST_SEED);

    let restored = SigningKey::from_keypair_bytes(&signing_key.to_keypair_bytes())
        .map_err(|e| init_error(format!("key pair encoding rejected: {}", e)))?;
    let verifying_key = restored.verifying_key();
    if verifying_key != signing_key.verifying_key() {
        return Err(init_error("public key derivation is not deterministic"));
    }

    let signature = restored
        .try_sign(SELF_TEST_MESSAGE)
        .map_err(|e| init_error(format!("signing failed: {}", e)))?;
    verifying_key
        .verify_strict(SELF_TEST_MESSAGE, &signature)
        .map_err(|e| init_error(format!("verification of a fresh signature failed: {}", e)))?;

    let mut tampered = signature.to_bytes();
    tampered[SIGNATURE_LEN - 1] ^= 0x01;
    let tampered = ed25519_dalek::Signature::from_bytes(&tampered);
    if verifying_key
        .verify_strict(SELF_TEST_MESSAGE, &tampered)
        .is_ok()
    {
        return Err(init_error("a tampered signature was accepted"));
    }

    Ok(())
}

fn init_error(details: impl Into<String>) -> Error {
    Error::Initialization {
        algorithm: ALGORITHM,
        details: details.into(),
    }
}
