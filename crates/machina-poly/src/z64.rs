//! Dense univariate polynomials over word-sized Z.
//!
//! The integer sibling of the Z/pZ type: same storage and mutation
//! discipline, coefficients in signed 64-bit words. Ring operations that
//! can overflow a word are checked and fail fast; on failure the operand
//! is left either unchanged or zero, never half-written.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use machina_arith::{word, ArithError, SignedMagic, Zp64};
use num_traits::{One, Zero};

use crate::parse::{parse_signed_terms, ParseError};
use crate::zp64::PolyZp64;

/// A dense univariate polynomial over Z with word-sized coefficients.
#[derive(Clone, Debug)]
pub struct PolyZ64 {
    data: Vec<i64>,
    degree: usize,
}

impl PolyZ64 {
    /// Creates a polynomial from coefficients in ascending degree order.
    #[must_use]
    pub fn from_coeffs(coeffs: &[i64]) -> Self {
        Self::from_vec(coeffs.to_vec())
    }

    /// Creates a polynomial taking ownership of the coefficient buffer.
    #[must_use]
    pub fn from_vec(mut data: Vec<i64>) -> Self {
        if data.is_empty() {
            data.push(0);
        }
        let degree = data.len() - 1;
        let mut poly = Self { data, degree };
        poly.fix_degree();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            data: vec![0],
            degree: 0,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(value: i64) -> Self {
        Self {
            data: vec![value],
            degree: 0,
        }
    }

    /// Creates the monomial `coefficient * x^degree`.
    #[must_use]
    pub fn monomial(coefficient: i64, degree: usize) -> Self {
        let mut data = vec![0; degree + 1];
        data[degree] = coefficient;
        Self::from_vec(data)
    }

    // -----------------------------------------------------------------
    // accessors
    // -----------------------------------------------------------------

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
    pub fn get(&self, i: usize) -> i64 {
        self.data.get(i).copied().unwrap_or(0)
    }

    /// Returns the leading coefficient.
    #[inline]
    #[must_use]
    pub fn lc(&self) -> i64 {
        self.data[self.degree]
    }

    /// Returns the constant coefficient.
    #[inline]
    #[must_use]
    pub fn cc(&self) -> i64 {
        self.data[0]
    }

    /// Returns the coefficients `data[0..=degree]`.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[i64] {
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

    /// Returns the sign of the leading coefficient.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.lc().cmp(&0) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Largest coefficient by absolute value.
    #[must_use]
    pub fn max_abs_coefficient(&self) -> i64 {
        self.data()
            .iter()
            .map(|c| c.unsigned_abs())
            .max()
            .unwrap_or(0) as i64
    }

    /// L1 norm: the sum of absolute coefficients.
    #[must_use]
    pub fn norm1(&self) -> f64 {
        self.data().iter().map(|&c| (c.unsigned_abs()) as f64).sum()
    }

    /// L2 norm, rounded up.
    #[must_use]
    pub fn norm2(&self) -> f64 {
        let sum: f64 = self.data().iter().map(|&c| (c as f64) * (c as f64)).sum();
        sum.sqrt().ceil()
    }

    // -----------------------------------------------------------------
    // shape
    // -----------------------------------------------------------------

    /// Grows the buffer to fit exponent `desired_degree`, raising
    /// `degree` to it if currently smaller.
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
        self.data.clear();
        self.data.extend_from_slice(other.data());
        self.degree = other.degree;
        self
    }

    /// Divides by `x^offset`, discarding the low `offset` terms.
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
    // content
    // -----------------------------------------------------------------

    /// Gcd of the absolute coefficient values; 0 for the zero
    /// polynomial, `|cc|` for a nonzero constant.
    #[must_use]
    pub fn content(&self) -> i64 {
        word::slice_gcd(&self.data, 0, self.degree + 1)
    }

    /// Divides through by the content, normalizing the leading
    /// coefficient to a positive sign.
    pub fn primitive_part(&mut self) -> &mut Self {
        let mut content = self.content();
        if content == 0 {
            return self;
        }
        if self.lc() < 0 {
            content = -content;
        }
        if content == -1 {
            return self.negate();
        }
        self.divide_by_content(content)
    }

    /// Divides through by the content, preserving the sign of the
    /// leading coefficient.
    pub fn primitive_part_same_sign(&mut self) -> &mut Self {
        let content = self.content();
        if content == 0 {
            return self;
        }
        self.divide_by_content(content)
    }

    fn divide_by_content(&mut self, content: i64) -> &mut Self {
        if content == 1 {
            return self;
        }
        let magic = SignedMagic::new(content);
        for c in &mut self.data[..=self.degree] {
            *c = magic.div(*c);
        }
        self
    }

    // -----------------------------------------------------------------
    // ring operations
    // -----------------------------------------------------------------

    /// Negates every coefficient.
    pub fn negate(&mut self) -> &mut Self {
        for c in &mut self.data[..=self.degree] {
            *c = c.wrapping_neg();
        }
        self
    }

    /// Adds `coefficient * x^exponent`.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is zeroed.
    pub fn try_add_monomial(
        &mut self,
        coefficient: i64,
        exponent: usize,
    ) -> Result<&mut Self, ArithError> {
        if coefficient == 0 {
            return Ok(self);
        }
        self.ensure_capacity(exponent);
        match word::safe_add(self.data[exponent], coefficient) {
            Ok(v) => self.data[exponent] = v,
            Err(e) => {
                self.to_zero();
                return Err(e);
            }
        }
        Ok(self.fix_degree())
    }

    /// Adds `other` coefficient-wise.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is zeroed.
    pub fn try_add(&mut self, other: &Self) -> Result<&mut Self, ArithError> {
        if other.is_zero() {
            return Ok(self);
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            match word::safe_add(self.data[i], other.data[i]) {
                Ok(v) => self.data[i] = v,
                Err(e) => {
                    self.to_zero();
                    return Err(e);
                }
            }
        }
        Ok(self.fix_degree())
    }

    /// Subtracts `other` coefficient-wise.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is zeroed.
    pub fn try_subtract(&mut self, other: &Self) -> Result<&mut Self, ArithError> {
        if other.is_zero() {
            return Ok(self);
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            match word::safe_sub(self.data[i], other.data[i]) {
                Ok(v) => self.data[i] = v,
                Err(e) => {
                    self.to_zero();
                    return Err(e);
                }
            }
        }
        Ok(self.fix_degree())
    }

    /// Subtracts `factor * x^exponent * other`.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is zeroed.
    pub fn try_subtract_shifted(
        &mut self,
        other: &Self,
        factor: i64,
        exponent: usize,
    ) -> Result<&mut Self, ArithError> {
        if factor == 0 || other.is_zero() {
            return Ok(self);
        }
        self.ensure_capacity(other.degree + exponent);
        for i in 0..=other.degree {
            let step = word::safe_mul(factor, other.data[i])
                .and_then(|t| word::safe_sub(self.data[i + exponent], t));
            match step {
                Ok(v) => self.data[i + exponent] = v,
                Err(e) => {
                    self.to_zero();
                    return Err(e);
                }
            }
        }
        Ok(self.fix_degree())
    }

    /// Adds `factor * other`.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is zeroed.
    pub fn try_add_mul(&mut self, other: &Self, factor: i64) -> Result<&mut Self, ArithError> {
        if factor == 0 || other.is_zero() {
            return Ok(self);
        }
        self.ensure_capacity(other.degree);
        for i in 0..=other.degree {
            let step = word::safe_mul(factor, other.data[i])
                .and_then(|t| word::safe_add(self.data[i], t));
            match step {
                Ok(v) => self.data[i] = v,
                Err(e) => {
                    self.to_zero();
                    return Err(e);
                }
            }
        }
        Ok(self.fix_degree())
    }

    /// Multiplies every coefficient by a scalar.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is zeroed.
    pub fn try_scale(&mut self, factor: i64) -> Result<&mut Self, ArithError> {
        if factor == 0 {
            return Ok(self.to_zero());
        }
        if factor == 1 {
            return Ok(self);
        }
        for i in 0..=self.degree {
            match word::safe_mul(self.data[i], factor) {
                Ok(v) => self.data[i] = v,
                Err(e) => {
                    self.to_zero();
                    return Err(e);
                }
            }
        }
        Ok(self)
    }

    /// Multiplies by `other` with the checked classical loop.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is unchanged.
    pub fn try_multiply(&mut self, other: &Self) -> Result<&mut Self, ArithError> {
        if self.is_zero() {
            return Ok(self);
        }
        if other.is_zero() {
            return Ok(self.to_zero());
        }
        let a = self.data();
        let b = other.data();
        let mut result = vec![0i64; a.len() + b.len() - 1];
        for (i, &c) in a.iter().enumerate() {
            if c != 0 {
                for (j, &d) in b.iter().enumerate() {
                    result[i + j] = word::safe_add(result[i + j], word::safe_mul(c, d)?)?;
                }
            }
        }
        self.degree = result.len() - 1;
        self.data = result;
        Ok(self.fix_degree())
    }

    /// Squares in place, diagonal terms once and off-diagonal doubled.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is unchanged.
    pub fn try_square(&mut self) -> Result<&mut Self, ArithError> {
        if self.is_zero() || self.is_one() {
            return Ok(self);
        }
        let a = self.data();
        let mut result = vec![0i64; 2 * a.len() - 1];
        for (i, &c) in a.iter().enumerate() {
            if c == 0 {
                continue;
            }
            result[2 * i] = word::safe_add(result[2 * i], word::safe_mul(c, c)?)?;
            for (j, &d) in a.iter().enumerate().skip(i + 1) {
                let t = word::safe_mul(2, word::safe_mul(c, d)?)?;
                result[i + j] = word::safe_add(result[i + j], t)?;
            }
        }
        self.degree = result.len() - 1;
        self.data = result;
        Ok(self.fix_degree())
    }

    /// Raises to the power `exp` by square-and-multiply.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is unchanged.
    pub fn try_pow(&mut self, mut exp: u64) -> Result<&mut Self, ArithError> {
        if exp == 0 {
            let one = Self::one();
            return Ok(self.set_from(&one));
        }
        if exp == 1 {
            return Ok(self);
        }
        let mut base = self.clone();
        let mut acc = Self::one();
        loop {
            if exp & 1 == 1 {
                acc.try_multiply(&base)?;
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base.try_square()?;
        }
        Ok(self.set_from(&acc))
    }

    /// Replaces `self` with its formal derivative.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`]; the operand is zeroed.
    pub fn try_derivative(&mut self) -> Result<&mut Self, ArithError> {
        if self.is_constant() {
            return Ok(self.to_zero());
        }
        let degree = self.degree;
        for i in 1..=degree {
            match word::safe_mul(self.data[i], i as i64) {
                Ok(v) => self.data[i - 1] = v,
                Err(e) => {
                    self.to_zero();
                    return Err(e);
                }
            }
        }
        self.data[degree] = 0;
        self.degree = degree - 1;
        Ok(self.fix_degree())
    }

    /// Evaluates at `point` by Horner's method. Pure.
    ///
    /// # Errors
    ///
    /// Fails with [`ArithError::Overflow`] when an intermediate does not
    /// fit in 64 bits.
    pub fn evaluate(&self, point: i64) -> Result<i64, ArithError> {
        let mut result = 0i64;
        for &c in self.data().iter().rev() {
            result = word::safe_add(word::safe_mul(result, point)?, c)?;
        }
        Ok(result)
    }

    /// Reduces every coefficient into the given ring, producing the
    /// Z/pZ sibling.
    #[must_use]
    pub fn modulus(&self, ring: Zp64) -> PolyZp64 {
        PolyZp64::from_signed(ring, self.data())
    }
}

impl PartialEq for PolyZ64 {
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree && self.data() == other.data()
    }
}

impl Eq for PolyZ64 {}

impl PartialOrd for PolyZ64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PolyZ64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree.cmp(&other.degree).then_with(|| {
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

impl Hash for PolyZ64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data().hash(state);
    }
}

impl fmt::Display for PolyZ64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::parse::write_canonical(f, self.data().iter().map(|&c| i128::from(c)))
    }
}

impl FromStr for PolyZ64 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let terms = parse_signed_terms(s)?;
        let mut poly = Self::zero();
        for (coefficient, exponent) in terms {
            poly.try_add_monomial(coefficient, exponent)
                .map_err(|_| ParseError::CoefficientOverflow)?;
        }
        Ok(poly)
    }
}

impl Zero for PolyZ64 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl One for PolyZ64 {
    fn one() -> Self {
        Self::one()
    }

    fn is_one(&self) -> bool {
        self.is_one()
    }
}

impl Add for PolyZ64 {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on coefficient overflow; use [`PolyZ64::try_add`] to
    /// recover instead.
    fn add(mut self, rhs: Self) -> Self {
        let _ = self.try_add(&rhs).expect("overflow in polynomial addition");
        self
    }
}

impl Sub for PolyZ64 {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on coefficient overflow; use [`PolyZ64::try_subtract`] to
    /// recover instead.
    fn sub(mut self, rhs: Self) -> Self {
        let _ = self
            .try_subtract(&rhs)
            .expect("overflow in polynomial subtraction");
        self
    }
}

impl Mul for PolyZ64 {
    type Output = Self;

    /// # Panics
    ///
    /// Panics on coefficient overflow; use [`PolyZ64::try_multiply`] to
    /// recover instead.
    fn mul(mut self, rhs: Self) -> Self {
        let _ = self
            .try_multiply(&rhs)
            .expect("overflow in polynomial multiplication");
        self
    }
}

impl Neg for PolyZ64 {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_and_primitive_part() {
        let mut a = PolyZ64::from_coeffs(&[6, -9, 15]);
        assert_eq!(a.content(), 3);
        a.primitive_part();
        assert_eq!(a.data(), &[2, -3, 5]);

        // negative lc: primitive part flips the sign
        let mut b = PolyZ64::from_coeffs(&[6, -9, -15]);
        b.primitive_part();
        assert_eq!(b.data(), &[-2, 3, 5]);
        assert!(b.lc() > 0);

        let mut c = PolyZ64::from_coeffs(&[6, -9, -15]);
        c.primitive_part_same_sign();
        assert_eq!(c.data(), &[2, -3, -5]);
    }

    #[test]
    fn test_content_conventions() {
        assert_eq!(PolyZ64::zero().content(), 0);
        assert_eq!(PolyZ64::constant(-7).content(), 7);
    }

    #[test]
    fn test_norms() {
        let a = PolyZ64::from_coeffs(&[3, -4]);
        assert_eq!(a.norm1(), 7.0);
        assert_eq!(a.norm2(), 5.0);
        assert_eq!(a.max_abs_coefficient(), 4);
    }

    #[test]
    fn test_checked_arithmetic() {
        let mut a = PolyZ64::from_coeffs(&[1, 2]);
        let b = PolyZ64::from_coeffs(&[3, 4]);
        a.try_multiply(&b).unwrap();
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        assert_eq!(a.data(), &[3, 10, 8]);

        let mut big = PolyZ64::constant(i64::MAX);
        assert_eq!(
            big.try_scale(2).unwrap_err(),
            ArithError::Overflow("mul")
        );
        assert!(big.is_zero()); // zeroed, not half-written
    }

    #[test]
    fn test_multiply_overflow_leaves_operand_unchanged() {
        let mut a = PolyZ64::constant(i64::MAX);
        let b = PolyZ64::from_coeffs(&[0, 3]);
        let before = a.clone();
        assert!(a.try_multiply(&b).is_err());
        assert_eq!(a, before);
    }

    #[test]
    fn test_square_matches_multiply() {
        let a = PolyZ64::from_coeffs(&[1, -2, 3, 0, 5]);
        let mut sq = a.clone();
        sq.try_square().unwrap();
        let mut mul = a.clone();
        mul.try_multiply(&a).unwrap();
        assert_eq!(sq, mul);
    }

    #[test]
    fn test_pow() {
        let mut a = PolyZ64::from_coeffs(&[1, 1]);
        a.try_pow(3).unwrap();
        assert_eq!(a.data(), &[1, 3, 3, 1]);

        let mut b = PolyZ64::zero();
        b.try_pow(0).unwrap();
        assert!(b.is_one());
    }

    #[test]
    fn test_evaluate() {
        let a = PolyZ64::from_coeffs(&[1, 2, 3]);
        assert_eq!(a.evaluate(2), Ok(17));
        assert_eq!(a.evaluate(-1), Ok(2));

        let big = PolyZ64::from_coeffs(&[0, i64::MAX]);
        assert!(big.evaluate(2).is_err());
    }

    #[test]
    fn test_modulus_bridge() {
        let ring = Zp64::new(59);
        let a = PolyZ64::from_coeffs(&[60, -1, 118]);
        let reduced = a.modulus(ring);
        assert_eq!(reduced.data(), &[1, 58]);
        assert_eq!(reduced.degree(), 1);
    }

    #[test]
    fn test_derivative() {
        let mut a = PolyZ64::from_coeffs(&[7, 1, 1, 1]);
        a.try_derivative().unwrap();
        assert_eq!(a.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_operator_sugar() {
        let a = PolyZ64::from_coeffs(&[1, 2]);
        let b = PolyZ64::from_coeffs(&[3, 4]);
        assert_eq!((a.clone() + b.clone()).data(), &[4, 6]);
        assert_eq!((b.clone() - a.clone()).data(), &[2, 2]);
        assert_eq!((a * b).data(), &[3, 10, 8]);
        assert_eq!((-PolyZ64::from_coeffs(&[1, -2])).data(), &[-1, 2]);
    }

    #[test]
    fn test_shape_round_trips() {
        let mut a = PolyZ64::from_coeffs(&[5, 2, 1]);
        a.shift_right(3).shift_left(3);
        assert_eq!(a.data(), &[5, 2, 1]);
        a.reverse().reverse();
        assert_eq!(a.data(), &[5, 2, 1]);
    }

    #[test]
    fn test_zero_and_one_traits() {
        assert!(<PolyZ64 as Zero>::zero().is_zero());
        assert!(<PolyZ64 as One>::one().is_one());
    }
}
