//! Type inference for scalar tokens.
//!
//! Classification order: `null` → `true`/`false` → quoted string → integer →
//! decimal. Anything else, including exponent notation such as `1e3`, is an
//! [`JsonError::InvalidLiteral`]. Trailing whitespace after a token is ignored.

use std::fmt;

use crate::error::{JsonError, Result};

/// One classified scalar. Strings borrow from the document and keep their
/// escape sequences exactly as written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(&'a str),
}

impl Scalar<'_> {
    /// Human-readable kind name, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "boolean",
            Scalar::Integer(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::String(_) => "string",
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Integer(n) => write!(f, "{n}"),
            // Integral floats keep a `.0` so they do not read as integers.
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

/// Classify a scalar token.
///
/// `token` must start at the first character of the literal; trailing
/// whitespace is allowed. A quoted token yields its content with the quotes
/// stripped.
pub fn classify(token: &str) -> Result<Scalar<'_>> {
    let trimmed = token.trim_end_matches([' ', '\n', '\r', '\t']);

    match trimmed {
        "null" => return Ok(Scalar::Null),
        "true" => return Ok(Scalar::Bool(true)),
        "false" => return Ok(Scalar::Bool(false)),
        _ => {}
    }

    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        return Ok(Scalar::String(&trimmed[1..trimmed.len() - 1]));
    }

    let (negative, digits) = split_sign(trimmed);
    match digits.split_once('.') {
        None if is_digits(digits) => parse_integer(trimmed).map(Scalar::Integer),
        Some((int_part, frac_part))
            if (int_part.is_empty() || is_digits(int_part)) && is_digits(frac_part) =>
        {
            scale(trimmed, int_part, frac_part, negative).map(Scalar::Float)
        }
        _ => Err(JsonError::InvalidLiteral {
            literal: trimmed.to_string(),
        }),
    }
}

/// Parse `[+-]?[0-9]+` into an `i64`.
///
/// Digits accumulate left to right with overflow checking; the sign is applied
/// last. `i64::MIN` is representable.
pub fn parse_integer(literal: &str) -> Result<i64> {
    let (negative, digits) = split_sign(literal);
    if !is_digits(digits) {
        return Err(JsonError::InvalidLiteral {
            literal: literal.to_string(),
        });
    }
    let overflow = || JsonError::IntegerOverflow {
        literal: literal.to_string(),
    };

    let mut magnitude: u64 = 0;
    for b in digits.bytes() {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(b - b'0')))
            .ok_or_else(overflow)?;
    }

    if negative {
        0i64.checked_sub_unsigned(magnitude).ok_or_else(overflow)
    } else {
        i64::try_from(magnitude).map_err(|_| overflow())
    }
}

/// Parse `[+-]?[0-9]*\.[0-9]+` into an `f64`. Exponents are not supported.
///
/// A literal with so many significant digits that their sum overflows `f64`
/// is an [`JsonError::InvalidLiteral`].
pub fn parse_decimal(literal: &str) -> Result<f64> {
    let (negative, digits) = split_sign(literal);
    match digits.split_once('.') {
        Some((int_part, frac_part))
            if (int_part.is_empty() || is_digits(int_part)) && is_digits(frac_part) =>
        {
            scale(literal, int_part, frac_part, negative)
        }
        _ => Err(JsonError::InvalidLiteral {
            literal: literal.to_string(),
        }),
    }
}

/// Accumulate every digit as one integer, then scale down by ten per
/// fractional digit and apply the sign.
///
/// Trailing zeros of the fraction are dropped first since they change neither
/// the value nor the scale. The division is split into steps of at most
/// 10^308 so a long fraction does not divide by infinity.
fn scale(literal: &str, int_part: &str, frac_part: &str, negative: bool) -> Result<f64> {
    let frac_part = frac_part.trim_end_matches('0');
    let mut result = 0.0f64;
    for b in int_part.bytes().chain(frac_part.bytes()) {
        result = result * 10.0 + f64::from(b - b'0');
    }
    if !result.is_finite() {
        return Err(JsonError::InvalidLiteral {
            literal: literal.to_string(),
        });
    }

    let mut remaining = frac_part.len();
    while remaining > 0 {
        let step = remaining.min(MAX_POW10);
        result /= 10f64.powi(step as i32);
        remaining -= step;
    }
    Ok(if negative { -result } else { result })
}

/// Largest power of ten an `f64` holds.
const MAX_POW10: usize = 308;

fn split_sign(literal: &str) -> (bool, &str) {
    if let Some(rest) = literal.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = literal.strip_prefix('+') {
        (false, rest)
    } else {
        (false, literal)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
