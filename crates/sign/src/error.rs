//! Error types for the signature crate

use thiserror::Error;

use crate::eddsa::ALGORITHM;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Key bytes of the wrong length
    #[error("Invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    /// Signature bytes of the wrong length
    #[error("Invalid signature size: expected {expected}, got {actual}")]
    InvalidSignatureSize { expected: usize, actual: usize },

    /// Key material the backend refuses, e.g. a private key whose public half
    /// does not belong to its seed
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Key generation failed
    #[error("{algorithm} key generation failed: {details}")]
    KeyGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Signature generation failed
    #[error("{algorithm} signature generation failed: {details}")]
    SignatureGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Verification failed
    #[error("{algorithm} verification failed: {details}")]
    Verification {
        algorithm: &'static str,
        details: String,
    },

    /// The backend could not be brought up
    #[error("{algorithm} initialization failed: {details}")]
    Initialization {
        algorithm: &'static str,
        details: String,
    },

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl Error {
    /// True for the two outcomes callers treat as "signature invalid": a
    /// cryptographic mismatch and a signature of the wrong length.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            Error::Verification { .. } | Error::InvalidSignatureSize { .. }
        )
    }

    /// True for failures that must not be retried or papered over: the
    /// backend could not produce key material or a signature, or never
    /// initialized.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::KeyGeneration { .. }
                | Error::SignatureGeneration { .. }
                | Error::Initialization { .. }
        )
    }
}

// Convert to api::Error, tagging every variant with the algorithm name
impl From<Error> for natrium_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidKeySize { expected, actual } => natrium_api::Error::InvalidLength {
                context: ALGORITHM,
                expected,
                actual,
            },
            Error::InvalidSignatureSize { expected, actual } => {
                natrium_api::Error::InvalidSignature {
                    context: ALGORITHM,
                    message: format!(
                        "Invalid signature size: expected {}, got {}",
                        expected, actual
                    ),
                }
            }
            Error::InvalidKey(msg) => natrium_api::Error::InvalidKey {
                context: ALGORITHM,
                message: msg,
            },
            Error::KeyGeneration { algorithm, details } => {
                natrium_api::Error::RandomGenerationError {
                    context: algorithm,
                    message: format!("Key generation failed: {}", details),
                }
            }
            Error::SignatureGeneration { algorithm, details } => natrium_api::Error::Other {
                context: algorithm,
                message: format!("Signature generation failed: {}", details),
            },
            Error::Verification { algorithm, details } => natrium_api::Error::InvalidSignature {
                context: algorithm,
                message: details,
            },
            Error::Initialization { algorithm, details } => natrium_api::Error::Other {
                context: algorithm,
                message: format!("Initialization failed: {}", details),
            },
            Error::Deserialization(s) => natrium_api::Error::SerializationError {
                context: ALGORITHM,
                message: s,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
