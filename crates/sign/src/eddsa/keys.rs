//! Ed25519 key types

use core::fmt;

use ed25519_dalek::SigningKey;
use natrium_internal::constant_time::ct_eq;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::constants::{PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SEED_LEN};
use super::operations;
use super::signature::Ed25519Signature;
use crate::error::{Error, Result};

/// Ed25519 private key: the 32-byte seed followed by the 32-byte public key.
///
/// The bytes are wiped when the value is dropped. `Debug` never prints them;
/// `Display` does, with a `dsaprv:` prefix, and exists for explicit
/// diagnostics only. Private keys are not serde-serializable.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ed25519PrivateKey {
    bytes: [u8; PRIVATE_KEY_LEN],
}

impl Ed25519PrivateKey {
    /// Generate a fresh private key from `rng`.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`Error::KeyGeneration`] if the RNG fails.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        operations::generate_key_with(rng)
    }

    /// Deterministically expand a 32-byte seed into a private key.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self::from_signing_key(&signing_key)
    }

    /// Import a private key, checking only its length.
    ///
    /// Whether the embedded public key belongs to the seed is checked when the
    /// key is used.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(Error::InvalidKeySize {
                expected: PRIVATE_KEY_LEN,
                actual: bytes.len(),
            });
        }

        let mut key = Self {
            bytes: [0u8; PRIVATE_KEY_LEN],
        };
        key.bytes.copy_from_slice(bytes);
        Ok(key)
    }

    /// Export the raw key bytes in a buffer that is wiped on drop.
    pub fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.to_vec())
    }

    /// Derive the public key.
    pub fn public_key(&self) -> Result<Ed25519PublicKey> {
        operations::derive_public_key(self)
    }

    /// Produce a detached signature over `message`.
    pub fn sign(&self, message: &[u8]) -> Result<Ed25519Signature> {
        operations::sign(self, message)
    }

    pub(crate) fn from_signing_key(signing_key: &SigningKey) -> Self {
        Self {
            bytes: signing_key.to_keypair_bytes(),
        }
    }

    /// Rebuild the backend signing key. Fails if the public half does not
    /// match the seed.
    pub(crate) fn to_signing_key(&self) -> Result<SigningKey> {
        SigningKey::from_keypair_bytes(&self.bytes).map_err(|_| {
            Error::InvalidKey("private key is corrupted: public half does not match seed".into())
        })
    }
}

impl PartialEq for Ed25519PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.bytes, &other.bytes)
    }
}

impl Eq for Ed25519PrivateKey {}

impl fmt::Debug for Ed25519PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519PrivateKey[REDACTED]")
    }
}

impl fmt::Display for Ed25519PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = Zeroizing::new(hex::encode(&self.bytes));
        write!(f, "dsaprv:{}", hex.as_str())
    }
}

/// Ed25519 public key (32 bytes)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey(pub(crate) [u8; PUBLIC_KEY_LEN]);

impl Ed25519PublicKey {
    /// Import a public key, checking its length.
    ///
    /// Whether the bytes encode a valid curve point is checked by
    /// verification, which rejects invalid points as a failed verification.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; PUBLIC_KEY_LEN] =
            bytes.try_into().map_err(|_| Error::InvalidKeySize {
                expected: PUBLIC_KEY_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }

    /// Parse a public key from hex. Accepts an optional `0x` prefix.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes = hex::decode(hex)
            .map_err(|e| Error::Deserialization(format!("public key hex decode error: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Check a detached signature over `message`.
    ///
    /// Any signature length other than [`super::SIGNATURE_LEN`] is a failed
    /// verification, not a panic.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        operations::verify(self, message, signature)
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PUBLIC_KEY_LEN]> for Ed25519PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dsapub:{}", self.to_hex())
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
