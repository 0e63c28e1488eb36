//! Public API traits and types for the natrium library
//!
//! This crate provides the public API surface for the natrium ecosystem: the
//! signature trait definitions and the error type shared by every crate.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{Signature, SignatureDerive, SignatureSerialize};

// Re-export trait modules for direct access
pub use traits::signature;
