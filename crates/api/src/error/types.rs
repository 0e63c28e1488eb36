//! Error type definitions for cryptographic operations

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid signature error. Covers both malformed signatures and
    /// signatures that fail cryptographic verification.
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::SerializationError { message, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Add a message to an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::SerializationError { context, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// Whether this error reports a rejected signature rather than a
    /// malfunction. Callers treat it as "invalid" and carry on.
    pub fn is_invalid_signature(&self) -> bool {
        matches!(self, Self::InvalidSignature { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::SerializationError { context, message } => {
                write!(f, "Serialization error: {}: {}", context, message)
            }
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
