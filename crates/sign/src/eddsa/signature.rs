//! Detached Ed25519 signature

use core::fmt;

use super::constants::SIGNATURE_LEN;
use crate::error::{Error, Result};

/// Ed25519 signature (64 bytes: R || s)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ed25519Signature(pub(crate) [u8; SIGNATURE_LEN]);

impl Ed25519Signature {
    /// Import a signature, checking its length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SIGNATURE_LEN] =
            bytes.try_into().map_err(|_| Error::InvalidSignatureSize {
                expected: SIGNATURE_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SIGNATURE_LEN]> for Ed25519Signature {
    fn from(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Signature({})", hex::encode(self.0))
    }
}
