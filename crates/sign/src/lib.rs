//! Digital Signature Schemes
//!
//! This crate implements Ed25519 detached signatures on top of an audited
//! backend. It supports exactly one scheme.

pub mod eddsa;
pub mod error;

pub use eddsa::{
    Ed25519, Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature, PRIVATE_KEY_LEN,
    PUBLIC_KEY_LEN, SIGNATURE_LEN,
};
pub use error::{Error, Result};
