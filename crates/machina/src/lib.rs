//! # Machina
//!
//! Exact symbolic computation over univariate polynomials with word-sized
//! coefficients, in Z/pZ and Z.
//!
//! Machina is the arithmetic substrate for higher-level polynomial
//! algebra: GCDs, factorization and ring towers all amortize onto the
//! dense kernels in this workspace.
//!
//! ## Quick Start
//!
//! ```rust
//! use machina::prelude::*;
//!
//! let ring = Zp64::new(17);
//! let mut a = PolyZp64::parse(ring, "1+2x^1+x^2").unwrap();
//! a.square().monic();
//! assert_eq!(a.evaluate(1), ring.normalize(16));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use machina_arith as arith;
pub use machina_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use machina_arith::{ArithError, Magic, SignedMagic, Zp64};
    pub use machina_poly::{ParseError, PolyZ64, PolyZp64};
}
