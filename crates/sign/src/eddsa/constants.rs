//! Ed25519 sizes, fixed by the backend.

/// Private key length: 32-byte seed followed by the 32-byte public key
pub const PRIVATE_KEY_LEN: usize = ed25519_dalek::KEYPAIR_LENGTH;

/// Public key length (compressed Edwards point)
pub const PUBLIC_KEY_LEN: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

/// Detached signature length (R || s)
pub const SIGNATURE_LEN: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Seed length accepted by deterministic key derivation
pub const SEED_LEN: usize = ed25519_dalek::SECRET_KEY_LENGTH;

pub(crate) const ALGORITHM: &str = "Ed25519";
