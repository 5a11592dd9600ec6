//! The canonical textual form: parser and printer.
//!
//! Grammar: `term (('+'|'-') term)*` where
//! `term = coef | coef '*'? var ('^' exp)? | var ('^' exp)?`,
//! whitespace ignored. The `*` is optional so the printer's output
//! re-parses; round trip is an identity up to insignificant whitespace.

use std::fmt;

use thiserror::Error;

/// An error from the polynomial text parser.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input held no terms.
    #[error("empty polynomial string")]
    Empty,

    /// A character that fits no production.
    #[error("unexpected character {0:?} at position {1}")]
    UnexpectedChar(char, usize),

    /// A coefficient that is not a valid 64-bit integer.
    #[error("invalid coefficient at position {0}")]
    BadCoefficient(usize),

    /// An exponent that is missing or out of range.
    #[error("invalid exponent at position {0}")]
    BadExponent(usize),

    /// Two different variable letters in one polynomial.
    #[error("mixed variables {0:?} and {1:?}")]
    MixedVariables(char, char),

    /// Accumulated terms overflowed a word-sized coefficient.
    #[error("coefficient sum does not fit in 64 bits")]
    CoefficientOverflow,
}

/// Parses the canonical grammar into `(coefficient, exponent)` terms.
///
/// Terms are returned in input order and may repeat exponents; the caller
/// folds them into its coefficient ring.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first offending position.
pub fn parse_signed_terms(input: &str) -> Result<Vec<(i64, usize)>, ParseError> {
    let bytes = input.as_bytes();
    let mut pos = 0usize;
    skip_ws(bytes, &mut pos);
    if pos == bytes.len() {
        return Err(ParseError::Empty);
    }

    let mut terms = Vec::new();
    let mut variable: Option<u8> = None;
    let mut first = true;
    while pos < bytes.len() {
        let negative = match bytes[pos] {
            b'+' => {
                pos += 1;
                false
            }
            b'-' => {
                pos += 1;
                true
            }
            c if first => {
                // the leading term may omit its sign
                if !c.is_ascii_digit() && !c.is_ascii_alphabetic() {
                    return Err(ParseError::UnexpectedChar(c as char, pos));
                }
                false
            }
            c => return Err(ParseError::UnexpectedChar(c as char, pos)),
        };
        skip_ws(bytes, &mut pos);

        let mut coefficient: Option<i64> = None;
        if pos < bytes.len() && bytes[pos].is_ascii_digit() {
            let start = pos;
            let value = read_number(bytes, &mut pos).ok_or(ParseError::BadCoefficient(start))?;
            let value = i64::try_from(value).map_err(|_| ParseError::BadCoefficient(start))?;
            coefficient = Some(value);
            skip_ws(bytes, &mut pos);
        }

        let mut explicit_star = false;
        if pos < bytes.len() && bytes[pos] == b'*' {
            if coefficient.is_none() {
                return Err(ParseError::UnexpectedChar('*', pos));
            }
            explicit_star = true;
            pos += 1;
            skip_ws(bytes, &mut pos);
        }

        let mut exponent = 0usize;
        let mut has_variable = false;
        if pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            let v = bytes[pos];
            match variable {
                None => variable = Some(v),
                Some(w) if w == v => {}
                Some(w) => return Err(ParseError::MixedVariables(w as char, v as char)),
            }
            pos += 1;
            has_variable = true;
            skip_ws(bytes, &mut pos);
            if pos < bytes.len() && bytes[pos] == b'^' {
                pos += 1;
                skip_ws(bytes, &mut pos);
                let start = pos;
                let value = read_number(bytes, &mut pos).ok_or(ParseError::BadExponent(start))?;
                exponent =
                    usize::try_from(value).map_err(|_| ParseError::BadExponent(start))?;
                skip_ws(bytes, &mut pos);
            } else {
                exponent = 1;
            }
        } else if explicit_star {
            return Err(ParseError::BadExponent(pos));
        }

        if coefficient.is_none() && !has_variable {
            let c = bytes.get(pos).map_or(' ', |&c| c as char);
            return Err(ParseError::UnexpectedChar(c, pos));
        }

        let magnitude = coefficient.unwrap_or(1);
        terms.push((if negative { -magnitude } else { magnitude }, exponent));
        first = false;
        skip_ws(bytes, &mut pos);
    }
    Ok(terms)
}

fn skip_ws(bytes: &[u8], pos: &mut usize) {
    while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
}

/// Reads a decimal run; `None` on no digits or u64 overflow.
fn read_number(bytes: &[u8], pos: &mut usize) -> Option<u64> {
    let start = *pos;
    let mut value: u64 = 0;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(bytes[*pos] - b'0'))?;
        *pos += 1;
    }
    if *pos == start {
        None
    } else {
        Some(value)
    }
}

/// Writes coefficients in the canonical form `c0+c1x^1+...`: zero terms
/// skipped, unit coefficients elided on non-constant terms, negative
/// coefficients carrying their own sign.
pub(crate) fn write_canonical<I>(f: &mut fmt::Formatter<'_>, coeffs: I) -> fmt::Result
where
    I: Iterator<Item = i128>,
{
    let mut empty = true;
    for (i, c) in coeffs.enumerate() {
        if c == 0 {
            continue;
        }
        if i != 0 && c == 1 {
            if !empty {
                f.write_str("+")?;
            }
            write!(f, "x^{i}")?;
        } else {
            if c >= 0 && !empty {
                f.write_str("+")?;
            }
            write!(f, "{c}")?;
            if i != 0 {
                write!(f, "x^{i}")?;
            }
        }
        empty = false;
    }
    if empty {
        f.write_str("0")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::z64::PolyZ64;
    use crate::zp64::PolyZp64;
    use machina_arith::Zp64;

    #[test]
    fn test_parse_basic() {
        let p: PolyZ64 = "1+2x^1+3x^2".parse().unwrap();
        assert_eq!(p.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_parse_with_stars_and_whitespace() {
        let p: PolyZ64 = " 2 * x ^ 3 - x + 7 ".parse().unwrap();
        assert_eq!(p.data(), &[7, -1, 0, 2]);
    }

    #[test]
    fn test_parse_implicit_unit_and_bare_variable() {
        let p: PolyZ64 = "x^4-x".parse().unwrap();
        assert_eq!(p.data(), &[0, -1, 0, 0, 1]);

        let q: PolyZ64 = "-x".parse().unwrap();
        assert_eq!(q.data(), &[0, -1]);
    }

    #[test]
    fn test_parse_repeated_exponents_fold() {
        let p: PolyZ64 = "x+x+1".parse().unwrap();
        assert_eq!(p.data(), &[1, 2]);
    }

    #[test]
    fn test_parse_constant_and_zero() {
        let p: PolyZ64 = "42".parse().unwrap();
        assert_eq!(p.data(), &[42]);

        let z: PolyZ64 = "0".parse().unwrap();
        assert!(z.is_zero());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<PolyZ64>(), Err(ParseError::Empty));
        assert_eq!("   ".parse::<PolyZ64>(), Err(ParseError::Empty));
        assert!(matches!(
            "1++2".parse::<PolyZ64>(),
            Err(ParseError::UnexpectedChar('+', _))
        ));
        assert!(matches!(
            "x^".parse::<PolyZ64>(),
            Err(ParseError::BadExponent(_))
        ));
        assert!(matches!(
            "2*3".parse::<PolyZ64>(),
            Err(ParseError::BadExponent(_))
        ));
        assert!(matches!(
            "x+y".parse::<PolyZ64>(),
            Err(ParseError::MixedVariables('x', 'y'))
        ));
        assert!(matches!(
            "99999999999999999999".parse::<PolyZ64>(),
            Err(ParseError::BadCoefficient(_))
        ));
    }

    #[test]
    fn test_display_canonical() {
        assert_eq!(PolyZ64::zero().to_string(), "0");
        assert_eq!(PolyZ64::from_coeffs(&[-1, 0, 1]).to_string(), "-1+x^2");
        assert_eq!(PolyZ64::from_coeffs(&[3, 1, 2]).to_string(), "3+x^1+2x^2");
        assert_eq!(PolyZ64::from_coeffs(&[0, -2]).to_string(), "-2x^1");
    }

    #[test]
    fn test_round_trip_z() {
        for text in ["0", "1", "-1+x^2", "3+x^1+2x^2", "5x^1+2x^2+x^3"] {
            let poly: PolyZ64 = text.parse().unwrap();
            assert_eq!(poly.to_string(), text);
        }
        // and the other direction, through non-canonical spellings
        for text in ["2*x^2 + 1", "x + x^2", "-3"] {
            let poly: PolyZ64 = text.parse().unwrap();
            let reparsed: PolyZ64 = poly.to_string().parse().unwrap();
            assert_eq!(poly, reparsed);
        }
    }

    #[test]
    fn test_round_trip_zp() {
        let ring = Zp64::new(17);
        let poly = PolyZp64::from_signed(ring, &[5, -1, 0, 16, 2]);
        let text = poly.to_string();
        let reparsed = PolyZp64::parse(ring, &text).unwrap();
        assert_eq!(poly, reparsed);
    }

    #[test]
    fn test_parse_into_ring_normalizes() {
        let ring = Zp64::new(17);
        let poly = PolyZp64::parse(ring, "-x^2+20").unwrap();
        assert_eq!(poly.data(), &[3, 0, 16]);
    }
}
