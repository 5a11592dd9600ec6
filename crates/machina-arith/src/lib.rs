//! # machina-arith
//!
//! Word-sized exact arithmetic for the Machina polynomial engine.
//!
//! This crate provides:
//! - Precomputed fast-division descriptors (`Magic`, `SignedMagic`)
//! - 128-bit word primitives and overflow-checked operations
//! - The coefficient ring Z/pZ for a runtime word-sized prime (`Zp64`)
//!
//! ## Performance Notes
//!
//! - A `Magic` descriptor is built once per modulus and turns every
//!   `x mod p` in the hot loops into a multiply-high and a subtract
//! - `Zp64` is a `Copy` value; share it freely, never rebuild it per call

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod magic;
pub mod word;
pub mod zp;

#[cfg(test)]
mod proptests;

pub use error::ArithError;
pub use magic::{Magic, SignedMagic};
pub use zp::Zp64;
