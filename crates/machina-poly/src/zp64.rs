//! Dense univariate polynomials over word-sized Z/pZ.
//!
//! Coefficients are stored in ascending degree order in a buffer that
//! grows geometrically and never shrinks; `degree` points at the last
//! nonzero coefficient (or 0 for the zero polynomial, whose `data[0]` is
//! also 0, so `data[degree]` is always a valid read). Every coefficient of
//! a value handed back to a caller lies in `[0, p)`.
//!
//! All operations mutate `self` and return `&mut Self` for chaining,
//! except where specifically stated; callers that need the operand
//! preserved clone first.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use machina_arith::Zp64;

use crate::kernel;
use crate::parse::{parse_signed_terms, ParseError};
use crate::z64::PolyZ64;

/// A dense univariate polynomial over Z/pZ with word-sized coefficients.
#[derive(Clone, Debug)]
pub struct PolyZp64 {
    ring: Zp64,
    data: Vec<u64>,
    degree: usize,
}

impl PolyZp64 {
    /// Creates a polynomial from signed coefficients in ascending degree
    /// order, canonicalizing each into the ring.
    #[must_use]
    pub fn from_signed(ring: Zp64, coeffs: &[i64]) -> Self {
        let data: Vec<u64> = coeffs.iter().map(|&c| ring.normalize(c)).collect();
        Self::from_raw(ring, data)
    }

    /// Creates a polynomial from residues already in `[0, p)`.
    #[must_use]
    pub fn from_raw(ring: Zp64, mut data: Vec<u64>) -> Self {
        debug_assert!(data.iter().all(|&c| c < ring.modulus()));
        if data.is_empty() {
            data.push(0);
        }
        let degree = data.len() - 1;
        let mut poly = Self { ring, data, degree };
        poly.fix_degree();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(ring: Zp64) -> Self {
        Self {
            ring,
            data: vec![0],
            degree: 0,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(ring: Zp64) -> Self {
        Self::constant(ring, 1)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(ring: Zp64, value: u64) -> Self {
        Self {
            ring,
            data: vec![ring.normalize_u64(value)],
            degree: 0,
        }
    }

    /// Creates the monomial `coefficient * x^degree`.
    #[must_use]
    pub fn monomial(ring: Zp64, coefficient: u64, degree: usize) -> Self {
        let mut data = vec![0; degree + 1];
        data[degree] = ring.normalize_u64(coefficient);
        Self::from_raw(ring, data)
    }

    /// Parses the canonical textual form into the given ring.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on malformed input.
    pub fn parse(ring: Zp64, input: &str) -> Result<Self, ParseError> {
        let terms = parse_signed_terms(input)?;
        let mut poly = Self::zero(ring);
        for (coefficient, exponent) in terms {
            poly.add_monomial(ring.normalize(coefficient), exponent);
        }
        Ok(poly)
    }

    // -----------------------------------------------------------------
    // accessors
    // -----------------------------------------------------------------

    /// Returns the ring this polynomial lives in.
    #[inline]
    #[must_use]
    pub const fn ring(&self) -> Zp64 {
        self.ring
    }

    /// Returns the degree; the zero polynomial has degree 0.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the coefficient of `x^i`; positions past the buffer read
    /// as zero.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> u64 {
        self.data.get(i).copied().unwrap_or(0)
    }

    /// Returns the leading coefficient.
    #[inline]
    #[must_use]
    pub fn lc(&self) -> u64 {
        self.data[self.degree]
    }

    /// Returns the constant coefficient.
    #[inline]
    #[must_use]
    pub fn cc(&self) -> u64 {
        self.data[0]
    }

    /// Returns the coefficients `data[0..=degree]`.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u64] {
        &self.data[..=self.degree]
    }

    /// Returns true for the zero polynomial.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data[self.degree] == 0
    }

    /// Returns true for the constant polynomial 1.
    #[inline]
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.degree == 0 && self.data[0] == 1
    }

    /// Returns true when the degree is 0.
    #[inline]
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.degree == 0
    }

    /// Returns true when the leading coefficient is 1.
    #[inline]
    #[must_use]
    pub fn is_monic(&self) -> bool {
        self.lc() == 1
    }

    /// Returns true when the constant coefficient is 1.
    #[inline]
    #[must_use]
    pub fn is_unit_cc(&self) -> bool {
        self.cc() == 1
    }

    /// Returns true when only the leading coefficient may be nonzero.
    #[must_use]
    pub fn is_monomial(&self) -> bool {
        self.data[..self.degree].iter().all(|&c| c == 0)
    }

    /// Position of the first nonzero coefficient; `degree` for the zero
    /// polynomial.
    #[must_use]
    pub fn first_nonzero_index(&self) -> usize {
        self.data[..=self.degree]
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(self.degree)
    }

    // -----------------------------------------------------------------
    // shape
    // -----------------------------------------------------------------

    /// Grows the buffer to fit exponent `desired_degree` and raises
    /// `degree` to it if currently smaller, so the caller can write in
    /// place through a trusted path (followed by [`Self::fix_degree`]).
    pub fn ensure_capacity(&mut self, desired_degree: usize) -> &mut Self {
        if self.degree < desired_degree {
            self.degree = desired_degree;
        }
        if self.data.len() < desired_degree + 1 {
            self.data.resize(desired_degree + 1, 0);
        }
        self
    }

    /// Scans down from `degree` past zeros, lowers `degree` accordingly
    /// and zeroes the vacated positions. Idempotent.
    pub fn fix_degree(&mut self) -> &mut Self {
        let mut i = self.degree;
        while i > 0 && self.data[i] == 0 {
            i -= 1;
        }
        if i != self.degree {
            self.degree = i;
            self.data[i + 1..].fill(0);
        }
        self
    }

    /// Resets to the zero polynomial, keeping the buffer.
    pub fn to_zero(&mut self) -> &mut Self {
        self.data[..=self.degree].fill(0);
        self.degree = 0;
        self
    }

    /// Makes `self` a copy of `other`, reusing the buffer.
    pub fn set_from(&mut self, other: &Self) -> &mut Self {
        self.ring = other.ring;
        self.data.clear();
        self.data.extend_from_slice(other.data());
        self.degree = other.degree;
        self
    }

    /// Divides by `x^offset`, discarding the low `offset` terms; an
    /// offset past the degree yields zero.
    pub fn shift_left(&mut self, offset: usize) -> &mut Self {
        if offset == 0 {
            return self;
        }
        if offset > self.degree {
            return self.to_zero();
        }
        self.data.copy_within(offset..=self.degree, 0);
        self.data[self.degree - offset + 1..=self.degree].fill(0);
        self.degree -= offset;
        self
    }

    /// Multiplies by `x^offset`.
    pub fn shift_right(&mut self, offset: usize) -> &mut Self {
        if offset == 0 {
            return self;
        }
        let degree = self.degree;
        self.ensure_capacity(offset + degree);
        self.data.copy_within(0..=degree, offset);
        self.data[..offset].fill(0);
        // the zero polynomial shifts to itself
        self.fix_degree()
    }

    /// Zeroes every position above `new_degree`.
    pub fn truncate(&mut self, new_degree: usize) -> &mut Self {
        if new_degree >= self.degree {
            return self;
        }
        self.data[new_degree + 1..=self.degree].fill(0);
        self.degree = new_degree;
        self.fix_degree()
    }

    /// Reverses the coefficients of `data[0..=degree]` in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.data[..=self.degree].reverse();
        self.fix_degree()
    }

    // -----------------------------------------------------------------
    // ring operations
    // -----------------------------------------------------------------

    /// Adds `coefficient * x^exponent`.
    pub fn add_monomial(&mut self, coefficient: u64, exponent: usize) -> &mut Self {
        let c = self.ring.normalize_u64(coefficient);
        if c == 0 {
            return self;
        }
        self.ensure_capacity(exponent);
        self.data[exponent] = self.ring.add(self.data[exponent], c);
        self.fix_degree()
    }

    /// Adds 1.
    pub fn increment(&mut self) -> &mut Self {
        self.add_monomial(1, 0)
    }

    /// Subtracts 1.
    pub fn decrement(&mut self) -> &mut Self {
        let c = self.ring.negate(self.ring.normalize_u64(1));
        self.add_monomial(c, 0)
    }

    /// Adds `other` coefficient-wise.
    ///
    /// # Panics
    ///
    /// Panics if the operands live in different rings.
    pub fn add(&mut self, other: &Self) -> &mut Self {
        self.check_same_ring(other);
        if other.is_zero() {
            return self;
        }
        if self.is_zero() {
            return self.set_from(other);
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            self.data[i] = self.ring.add(self.data[i], other.data[i]);
        }
        self.fix_degree()
    }

    /// Subtracts `other` coefficient-wise.
    ///
    /// # Panics
    ///
    /// Panics if the operands live in different rings.
    pub fn subtract(&mut self, other: &Self) -> &mut Self {
        self.check_same_ring(other);
        if other.is_zero() {
            return self;
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            self.data[i] = self.ring.sub(self.data[i], other.data[i]);
        }
        self.fix_degree()
    }

    /// Subtracts `factor * x^exponent * other`, the pseudo-division
    /// workhorse.
    ///
    /// # Panics
    ///
    /// Panics if the operands live in different rings.
    pub fn subtract_shifted(&mut self, other: &Self, factor: u64, exponent: usize) -> &mut Self {
        self.check_same_ring(other);
        let factor = self.ring.normalize_u64(factor);
        if factor == 0 || other.is_zero() {
            return self;
        }
        self.ensure_capacity(other.degree + exponent);
        for i in 0..=other.degree {
            let t = self.ring.mul(factor, other.data[i]);
            self.data[i + exponent] = self.ring.sub(self.data[i + exponent], t);
        }
        self.fix_degree()
    }

    /// Adds `factor * other`.
    ///
    /// # Panics
    ///
    /// Panics if the operands live in different rings.
    pub fn add_mul(&mut self, other: &Self, factor: u64) -> &mut Self {
        self.check_same_ring(other);
        let factor = self.ring.normalize_u64(factor);
        if factor == 0 || other.is_zero() {
            return self;
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            let t = self.ring.mul(factor, other.data[i]);
            self.data[i] = self.ring.add(self.data[i], t);
        }
        self.fix_degree()
    }

    /// Negates every coefficient.
    pub fn negate(&mut self) -> &mut Self {
        for c in &mut self.data[..=self.degree] {
            *c = self.ring.negate(*c);
        }
        self
    }

    /// Multiplies every coefficient by a scalar.
    pub fn scale(&mut self, factor: u64) -> &mut Self {
        let factor = self.ring.normalize_u64(factor);
        if factor == 0 {
            return self.to_zero();
        }
        if factor == 1 {
            return self;
        }
        // a unit scalar keeps the leading coefficient nonzero
        for c in &mut self.data[..=self.degree] {
            *c = self.ring.mul(*c, factor);
        }
        self
    }

    /// Divides by the leading coefficient. The zero polynomial is
    /// returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the leading coefficient is not invertible, which cannot
    /// happen for a prime modulus.
    pub fn monic(&mut self) -> &mut Self {
        if self.is_zero() {
            return self;
        }
        let lc_inv = self
            .ring
            .inv(self.lc())
            .expect("leading coefficient must be invertible");
        self.scale(lc_inv)
    }

    /// Multiplies by `other`, dispatching on operand shape and the ring's
    /// accumulator guard.
    ///
    /// # Panics
    ///
    /// Panics if the operands live in different rings.
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        self.check_same_ring(other);
        if self.is_zero() {
            return self;
        }
        if other.is_zero() {
            return self.to_zero();
        }
        if other.is_constant() {
            return self.scale(other.cc());
        }
        if self.is_constant() {
            let c = self.cc();
            self.set_from(other);
            return self.scale(c);
        }
        let result = kernel::multiply_mod(&self.ring, self.data(), other.data());
        self.degree = result.len() - 1;
        self.data = result;
        self.fix_degree()
    }

    /// Squares in place through the dedicated kernel path.
    pub fn square(&mut self) -> &mut Self {
        if self.is_zero() || self.is_one() {
            return self;
        }
        let result = kernel::square_mod(&self.ring, self.data());
        self.degree = result.len() - 1;
        self.data = result;
        self.fix_degree()
    }

    /// Raises to the power `exp` by square-and-multiply; `pow(0)` yields
    /// the one of the ring.
    pub fn pow(&mut self, mut exp: u64) -> &mut Self {
        if exp == 0 {
            let one = Self::one(self.ring);
            return self.set_from(&one);
        }
        if exp == 1 {
            return self;
        }
        let mut base = self.clone();
        let mut acc = Self::one(self.ring);
        loop {
            if exp & 1 == 1 {
                acc.multiply(&base);
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base.square();
        }
        self.set_from(&acc)
    }

    /// Replaces `self` with its formal derivative.
    pub fn derivative(&mut self) -> &mut Self {
        if self.is_constant() {
            return self.to_zero();
        }
        let degree = self.degree;
        for i in 1..=degree {
            self.data[i - 1] = self.ring.mul(self.data[i], self.ring.normalize_u64(i as u64));
        }
        self.data[degree] = 0;
        self.degree = degree - 1;
        // the characteristic may kill the new leading term
        self.fix_degree()
    }

    /// Evaluates at `point` by Horner's method. Pure.
    #[must_use]
    pub fn evaluate(&self, point: u64) -> u64 {
        let x = self.ring.normalize_u64(point);
        let mut result = 0u64;
        for &c in self.data[..=self.degree].iter().rev() {
            result = self.ring.add(self.ring.mul(result, x), c);
        }
        result
    }

    /// Content over a field: the leading coefficient (every nonzero
    /// content is a unit), 0 for the zero polynomial.
    #[must_use]
    pub fn content(&self) -> u64 {
        self.lc()
    }

    /// Primitive part over a field: the identity, since the content is
    /// always a unit for a prime modulus.
    pub fn primitive_part(&mut self) -> &mut Self {
        self
    }

    // -----------------------------------------------------------------
    // conversions
    // -----------------------------------------------------------------

    /// Lifts the residues into the word-sized integer variant.
    #[must_use]
    pub fn to_z(&self) -> PolyZ64 {
        let coeffs: Vec<i64> = self.data().iter().map(|&c| c as i64).collect();
        PolyZ64::from_coeffs(&coeffs)
    }

    /// Lifts into the integer variant with residues mapped to the
    /// symmetric range `(-p/2, p/2]`.
    #[must_use]
    pub fn to_symmetric_z(&self) -> PolyZ64 {
        let p = self.ring.modulus();
        let half = p / 2;
        let coeffs: Vec<i64> = self
            .data()
            .iter()
            .map(|&c| {
                if c <= half {
                    c as i64
                } else {
                    c as i64 - p as i64
                }
            })
            .collect();
        PolyZ64::from_coeffs(&coeffs)
    }

    fn check_same_ring(&self, other: &Self) {
        assert_eq!(
            self.ring.modulus(),
            other.ring.modulus(),
            "operands must share a modulus"
        );
    }
}

impl PartialEq for PolyZp64 {
    fn eq(&self, other: &Self) -> bool {
        self.ring == other.ring && self.degree == other.degree && self.data() == other.data()
    }
}

impl Eq for PolyZp64 {}

impl PartialOrd for PolyZp64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PolyZp64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ring
            .modulus()
            .cmp(&other.ring.modulus())
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| {
                for i in (0..=self.degree).rev() {
                    match self.data[i].cmp(&other.data[i]) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                }
                Ordering::Equal
            })
    }
}

impl Hash for PolyZp64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ring.modulus().hash(state);
        self.data().hash(state);
    }
}

impl fmt::Display for PolyZp64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::parse::write_canonical(f, self.data().iter().map(|&c| i128::from(c)))
    }
}
