//! Number literal parsing for the string path.
//!
//! Integer text follows the usual source-code literal rules: an optional sign, then an
//! optional base prefix (`0x`, `0o`, `0b`, or a bare leading `0` for octal), then digits
//! that may be grouped with `_`. A separator must sit between two digits or directly
//! after a base prefix.
//!
//! Float text is either a decimal literal, handled by the standard library, or a
//! hexadecimal literal with a mandatory binary exponent (`0x1.8p1`).

use std::borrow::Cow;

use crate::error::ParseFailure;

/// A parsed integer literal, kept as a sign and a magnitude.
///
/// Keeping the sign apart lets every `u128` and every `i128` literal be represented;
/// narrowing to the target type is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLiteral {
    negative: bool,
    magnitude: u128,
}

impl IntLiteral {
    /// Returns `true` if the literal is below zero. `-0` is not negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.negative && self.magnitude != 0
    }

    /// The absolute value of the literal.
    #[must_use]
    pub fn magnitude(self) -> u128 {
        self.magnitude
    }

    /// The literal as an `i128`, or `None` if it lies outside of `i128`.
    #[must_use]
    pub fn to_i128(self) -> Option<i128> {
        if self.negative {
            0_i128.checked_sub_unsigned(self.magnitude)
        } else {
            i128::try_from(self.magnitude).ok()
        }
    }

    /// The literal as a `u128`, or `None` if it is negative.
    #[must_use]
    pub fn to_u128(self) -> Option<u128> {
        (!self.is_negative()).then_some(self.magnitude)
    }
}

/// Parse a base-agnostic integer literal.
///
/// # Errors
/// Returns [`ParseFailure::Int`] for empty input, invalid digits or a magnitude above
/// `u128::MAX`, [`ParseFailure::Separator`] for a misplaced `_`, and
/// [`ParseFailure::Sign`] for a sign that does not lead the literal.
pub fn parse_int_literal(text: &str) -> Result<IntLiteral, ParseFailure> {
    let (negative, unsigned) = split_sign(text);

    let (radix, digits, prefixed) = split_radix(unsigned);
    let digits = strip_separators(digits, prefixed)?;
    if digits.starts_with(['+', '-']) {
        return Err(ParseFailure::Sign);
    }

    Ok(IntLiteral {
        negative,
        magnitude: u128::from_str_radix(&digits, radix)?,
    })
}

/// Parse a hexadecimal float literal such as `0x1p4` or `-0x1.8p1`.
///
/// Returns `None` if `text` carries no `0x` prefix, leaving it to the decimal parser.
/// Mantissa digits beyond the precision of an `f64` are truncated.
pub(crate) fn parse_hex_float(text: &str) -> Option<Result<f64, ParseFailure>> {
    let (negative, unsigned) = split_sign(text);
    match split_radix(unsigned) {
        (16, body, _) => Some(hex_float_magnitude(body).map(|m| if negative { -m } else { m })),
        _ => None,
    }
}

fn hex_float_magnitude(body: &str) -> Result<f64, ParseFailure> {
    let body = strip_separators(body, true)?;
    let (mantissa, exponent) = body
        .split_once(['p', 'P'])
        .ok_or(ParseFailure::HexFloat)?;
    let exponent: i32 = exponent.parse()?;

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(ParseFailure::HexFloat);
    }

    let mut bits: u64 = 0;
    let mut scale = exponent;
    for (index, ch) in whole.chars().chain(fraction.chars()).enumerate() {
        let digit = ch.to_digit(16).ok_or(ParseFailure::HexFloat)?;
        let in_fraction = index >= whole.len();
        if bits >> 60 == 0 {
            bits = bits << 4 | u64::from(digit);
            if in_fraction {
                scale = scale.saturating_sub(4);
            }
        } else if !in_fraction {
            scale = scale.saturating_add(4);
        }
    }

    if bits == 0 {
        return Ok(0.0);
    }
    // Two steps keep 2^scale from under- or overflowing before the mantissa is applied.
    let half = scale / 2;
    Ok(bits as f64 * 2_f64.powi(half) * 2_f64.powi(scale - half))
}

/// Returns `true` for `inf` and `infinity` in any case, with an optional sign.
pub(crate) fn is_infinity_literal(text: &str) -> bool {
    let (_, unsigned) = split_sign(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Split a base prefix off `text`, returning the radix, the remaining digits and whether
/// a prefix was present.
fn split_radix(text: &str) -> (u32, &str, bool) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &text[2..], true),
            b'o' | b'O' => return (8, &text[2..], true),
            b'b' | b'B' => return (2, &text[2..], true),
            _ => return (8, &text[1..], true),
        }
    }

    (10, text, false)
}

fn strip_separators(digits: &str, prefixed: bool) -> Result<Cow<'_, str>, ParseFailure> {
    if !digits.contains('_') {
        return Ok(Cow::Borrowed(digits));
    }

    let mut stripped = String::with_capacity(digits.len());
    let mut separator_allowed = prefixed;
    let mut trailing_separator = false;
    for ch in digits.chars() {
        if ch == '_' {
            if !separator_allowed {
                return Err(ParseFailure::Separator);
            }
            separator_allowed = false;
            trailing_separator = true;
        } else {
            stripped.push(ch);
            separator_allowed = true;
            trailing_separator = false;
        }
    }

    if trailing_separator {
        return Err(ParseFailure::Separator);
    }
    Ok(Cow::Owned(stripped))
}
