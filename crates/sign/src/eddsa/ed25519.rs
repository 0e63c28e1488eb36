//! `natrium_api` trait implementations for Ed25519

use natrium_api::{
    Error as ApiError, Result as ApiResult, Signature as SignatureTrait, SignatureDerive,
    SignatureSerialize,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::constants::{ALGORITHM, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SEED_LEN, SIGNATURE_LEN};
use super::keys::{Ed25519PrivateKey, Ed25519PublicKey};
use super::operations;
use super::signature::Ed25519Signature;

/// Ed25519 signature scheme
pub struct Ed25519;

impl SignatureTrait for Ed25519 {
    type PublicKey = Ed25519PublicKey;
    type SecretKey = Ed25519PrivateKey;
    type SignatureData = Ed25519Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        ALGORITHM
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let secret_key = operations::generate_key_with(rng)?;
        let public_key = operations::derive_public_key(&secret_key)?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        Ok(operations::sign(secret_key, message)?)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        Ok(operations::verify_signature(public_key, message, signature)?)
    }
}

impl SignatureSerialize for Ed25519 {
    const PUBLIC_KEY_SIZE: usize = PUBLIC_KEY_LEN;
    const SECRET_KEY_SIZE: usize = PRIVATE_KEY_LEN;
    const SIGNATURE_SIZE: usize = SIGNATURE_LEN;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.to_bytes().to_vec()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        Ok(Ed25519PublicKey::from_bytes(bytes)?)
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> Zeroizing<Vec<u8>> {
        key.to_bytes_zeroizing()
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        let key = Ed25519PrivateKey::from_bytes(bytes)?;
        // Reject corrupted key material at the import boundary.
        key.to_signing_key()?;
        Ok(key)
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.to_bytes().to_vec()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        Ok(Ed25519Signature::from_slice(bytes)?)
    }
}

impl SignatureDerive for Ed25519 {
    const MIN_SEED_SIZE: usize = SEED_LEN;

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        if seed.len() != SEED_LEN {
            return Err(ApiError::InvalidLength {
                context: "Ed25519 seed",
                expected: SEED_LEN,
                actual: seed.len(),
            });
        }

        let mut bytes = Zeroizing::new([0u8; SEED_LEN]);
        bytes.copy_from_slice(seed);

        let secret_key = Ed25519PrivateKey::from_seed(&bytes);
        let public_key = operations::derive_public_key(&secret_key)?;
        Ok((public_key, secret_key))
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        Ok(operations::derive_public_key(secret_key)?)
    }
}
