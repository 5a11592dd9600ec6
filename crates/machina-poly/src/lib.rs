//! # machina-poly
//!
//! Dense univariate polynomial arithmetic over word-sized coefficients.
//!
//! This crate provides:
//! - `PolyZp64`: polynomials over Z/pZ for a runtime word-sized prime
//! - `PolyZ64`: the signed word-sized integer sibling
//! - Classical, Karatsuba and dedicated squaring kernels with safe and
//!   reduce-at-the-end accumulation
//! - The canonical textual form with a round-tripping parser
//!
//! ## Mutation Discipline
//!
//! Operations mutate `self` and return `&mut Self` for chaining; clone
//! first to preserve an operand. Every value handed back satisfies the
//! degree invariant and, over Z/pZ, keeps all coefficients in `[0, p)`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod kernel;
pub mod parse;
pub mod z64;
pub mod zp64;

#[cfg(test)]
mod proptests;

pub use parse::ParseError;
pub use z64::PolyZ64;
pub use zp64::PolyZp64;
