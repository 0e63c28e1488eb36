//! Internal utilities for the natrium library
//!
//! Not part of the stable API. Only natrium crates should depend on it.

pub mod constant_time;
