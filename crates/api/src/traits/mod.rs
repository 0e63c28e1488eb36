//! Trait definitions for natrium primitives

pub mod signature;

pub use signature::{Signature, SignatureDerive, SignatureSerialize};
