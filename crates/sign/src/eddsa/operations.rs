//! Key generation, public-key derivation, signing and verification
//!
//! Every function brings the backend up through [`init`] first and delegates
//! the curve arithmetic to `ed25519_dalek`.

use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::backend::init;
use super::constants::{ALGORITHM, SEED_LEN};
use super::keys::{Ed25519PrivateKey, Ed25519PublicKey};
use super::signature::Ed25519Signature;
use crate::error::{Error, Result};

/// Generate a private key from the operating system's CSPRNG.
///
/// # Errors
///
/// [`Error::KeyGeneration`] if the entropy source fails. The error is fatal:
/// no key, weak or otherwise, is returned.
pub fn generate_key() -> Result<Ed25519PrivateKey> {
    generate_key_with(&mut OsRng)
}

/// Generate a private key from a caller-supplied CSPRNG.
pub fn generate_key_with<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Ed25519PrivateKey> {
    init()?;

    let mut seed = Zeroizing::new([0u8; SEED_LEN]);
    if let Err(e) = rng.try_fill_bytes(&mut seed[..]) {
        tracing::error!(algorithm = ALGORITHM, error = %e, "entropy source failed during key generation");
        return Err(Error::KeyGeneration {
            algorithm: ALGORITHM,
            details: format!("entropy source failed: {}", e),
        });
    }

    let signing_key = SigningKey::from_bytes(&seed);
    Ok(Ed25519PrivateKey::from_signing_key(&signing_key))
}

/// Derive the public key of `private_key`. Pure and deterministic.
///
/// # Errors
///
/// [`Error::InvalidKey`] if the key's embedded public half does not match its
/// seed, i.e. the key material is corrupted.
pub fn derive_public_key(private_key: &Ed25519PrivateKey) -> Result<Ed25519PublicKey> {
    init()?;

    let signing_key = private_key.to_signing_key()?;
    Ok(Ed25519PublicKey(signing_key.verifying_key().to_bytes()))
}

/// Produce a detached signature over `message`.
///
/// Signing is deterministic: the nonce is derived from the key and the
/// message, so the same inputs always give the same signature.
pub fn sign(private_key: &Ed25519PrivateKey, message: &[u8]) -> Result<Ed25519Signature> {
    init()?;

    let signing_key = private_key.to_signing_key()?;
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| Error::SignatureGeneration {
            algorithm: ALGORITHM,
            details: e.to_string(),
        })?;

    Ok(Ed25519Signature(signature.to_bytes()))
}

/// Verify a detached signature given as raw bytes.
///
/// A signature of the wrong length (including an empty one) fails with
/// [`Error::InvalidSignatureSize`]; a mismatch fails with
/// [`Error::Verification`]. Both satisfy
/// [`Error::is_verification_failure`].
pub fn verify(public_key: &Ed25519PublicKey, message: &[u8], signature: &[u8]) -> Result<()> {
    init()?;

    let signature = Ed25519Signature::from_slice(signature).map_err(|e| {
        tracing::trace!(
            algorithm = ALGORITHM,
            message_len = message.len(),
            signature_len = signature.len(),
            "signature rejected: wrong length"
        );
        e
    })?;

    verify_detached(public_key, message, &signature)
}

/// Verify an already length-checked signature.
pub fn verify_signature(
    public_key: &Ed25519PublicKey,
    message: &[u8],
    signature: &Ed25519Signature,
) -> Result<()> {
    init()?;

    verify_detached(public_key, message, signature)
}

fn verify_detached(
    public_key: &Ed25519PublicKey,
    message: &[u8],
    signature: &Ed25519Signature,
) -> Result<()> {
    let verifying_key = VerifyingKey::from_bytes(&public_key.0)
        .map_err(|_| rejected("public key is not a valid curve point", message.len()))?;
    let signature = ed25519_dalek::Signature::from_bytes(&signature.0);

    // Strict verification also refuses small-order keys and non-canonical s.
    verifying_key
        .verify_strict(message, &signature)
        .map_err(|_| rejected("signature does not match message and public key", message.len()))
}

fn rejected(details: &str, message_len: usize) -> Error {
    tracing::trace!(
        algorithm = ALGORITHM,
        message_len,
        reason = details,
        "signature rejected"
    );
    Error::Verification {
        algorithm: ALGORITHM,
        details: details.to_string(),
    }
}
