//! EdDSA (Ed25519) digital signatures, RFC 8032
//!
//! Key generation, public-key derivation, detached signing and verification.
//! The curve arithmetic is delegated to `ed25519_dalek`; this module owns the
//! key and signature types, the one-time backend initialization and the error
//! classification.
//!
//! # Example
//!
//! ```
//! use natrium_sign::eddsa;
//!
//! # fn main() -> natrium_sign::error::Result<()> {
//! let private_key = eddsa::generate_key()?;
//! let public_key = private_key.public_key()?;
//!
//! let signature = private_key.sign(b"hello")?;
//! assert!(public_key.verify(b"hello", signature.as_ref()).is_ok());
//!
//! let err = public_key.verify(b"hellp", signature.as_ref()).unwrap_err();
//! assert!(err.is_verification_failure());
//! # Ok(())
//! # }
//! ```
//!
//! # Secret hygiene
//!
//! [`Ed25519PrivateKey`] wipes its bytes on drop and redacts them from
//! `Debug`. Exported copies come back in a `Zeroizing` buffer. Avoid
//! formatting private keys with `Display` outside of local debugging.

mod backend;
mod constants;
mod ed25519;
mod keys;
mod operations;
#[cfg(feature = "serde")]
mod serialization;
mod signature;

pub use backend::{init, Ed25519Params};
pub(crate) use constants::ALGORITHM;
pub use constants::{PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SEED_LEN, SIGNATURE_LEN};
pub use ed25519::Ed25519;
pub use keys::{Ed25519PrivateKey, Ed25519PublicKey};
pub use operations::{
    derive_public_key, generate_key, generate_key_with, sign, verify, verify_signature,
};
pub use signature::Ed25519Signature;
