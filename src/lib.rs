//! # natrium
//!
//! Ed25519 digital signatures: key generation, public-key derivation,
//! detached signing and verification.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! natrium = "0.1"
//! ```
//!
//! ## Features
//!
//! - `serde` (default): JSON/serde support for public keys and signatures
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`natrium-api`]: Error type and signature traits
//! - [`natrium-internal`]: Constant-time helpers
//! - [`natrium-sign`]: The Ed25519 implementation
//!
//! ## Example
//!
//! ```
//! use natrium::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let private_key = natrium::sign::eddsa::generate_key()?;
//! let public_key = private_key.public_key()?;
//! let signature = private_key.sign(b"hello")?;
//!
//! public_key.verify(b"hello", signature.as_ref())?;
//! assert!(public_key.verify(b"hellp", signature.as_ref()).is_err());
//!
//! // The same operations through the generic trait
//! let (pk, sk) = Ed25519::keypair(&mut rand::rngs::OsRng)?;
//! let sig = Ed25519::sign(b"hello", &sk)?;
//! Ed25519::verify(b"hello", &sig, &pk)?;
//! # Ok(())
//! # }
//! ```

// Core re-exports (always available)
pub use natrium_api as api;
pub use natrium_internal as internal;
pub use natrium_sign as sign;

/// Common imports for natrium users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureDerive, SignatureSerialize};

    // Re-export the Ed25519 types
    pub use crate::sign::eddsa::{
        Ed25519, Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature,
    };

    // Re-export zeroize for custom secret containers
    pub use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
}
