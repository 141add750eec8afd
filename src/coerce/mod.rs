//! Coercion of dynamically-typed values into numbers.
//!
//! Three generic entry points cover the three families of numeric targets:
//!
//! - [`to_int`] - signed integers (`i8` ... `i128`, `isize`)
//! - [`to_uint`] - unsigned integers (`u8` ... `u128`, `usize`), rejecting negative sources
//! - [`to_float`] - `f32` and `f64`
//!
//! All three share the same dispatch over the resolved [`Value`]:
//!
//! | Source                | Result                                                   |
//! |-----------------------|----------------------------------------------------------|
//! | absent / null chain   | zero                                                     |
//! | `bool`                | `1` for `true`, `0` for `false`                          |
//! | primitive number      | numeric conversion, float → int truncates toward zero    |
//! | string                | parsed as an integer or float literal                    |
//! | [`crate::JsonNumber`] | its text takes the string path                           |
//! | anything else         | [`Error::Unsupported`]                                   |
//!
//! A value that does not fit into the target fails with [`Error::OutOfRange`] instead of
//! wrapping around.
//!
//! The [`Coerce`] trait picks the matching entry point from the target type, which is what
//! the generic holders build on.
//!
//! # Examples
//!
//! ```rust
//! use coerce::{to_float, to_int, to_uint, Coerce, ErrorKind, Value};
//!
//! assert_eq!(to_int::<i32>(&Value::from("0x10"))?, 16);
//! assert_eq!(to_float::<f64>(&Value::from(true))?, 1.0);
//! assert_eq!(u8::coerce(&Value::from(7.9_f64))?, 7);
//!
//! let err = to_uint::<u64>(&Value::from(-8.31_f32)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NegativeNumberNotPermitted);
//! # Ok::<(), coerce::Error>(())
//! ```

mod float;
mod int;
mod literal;
mod uint;

pub use float::to_float;
pub use int::to_int;
pub use literal::{parse_int_literal, IntLiteral};
pub use uint::to_uint;

use std::{fmt, num::ParseFloatError, str::FromStr};

use num_traits::{Float, NumCast, PrimInt, Signed, ToPrimitive, Unsigned};

use crate::{error::ParseFailure, value::Value, Error, Result};

/// Signed integer targets of [`to_int`].
pub trait SignedInt: Coerce + PrimInt + Signed {}

impl<T> SignedInt for T where T: Coerce + PrimInt + Signed {}

/// Unsigned integer targets of [`to_uint`].
pub trait UnsignedInt: Coerce + PrimInt + Unsigned {}

impl<T> UnsignedInt for T where T: Coerce + PrimInt + Unsigned {}

/// Floating point targets of [`to_float`].
pub trait FloatTarget: Coerce + Float + FromStr<Err = ParseFloatError> {}

impl<T> FloatTarget for T where T: Coerce + Float + FromStr<Err = ParseFloatError> {}

/// A numeric type that values can be coerced into.
///
/// Implemented for every primitive integer and float type. Signed integers go through
/// [`to_int`], unsigned integers through [`to_uint`] and floats through [`to_float`].
pub trait Coerce: Sized + Copy + fmt::Display + 'static {
    /// Coerce `value` into `Self`.
    ///
    /// # Errors
    /// Returns the error of the coercion function selected for `Self`.
    fn coerce(value: &Value) -> Result<Self>;

    /// Name of the target type, as reported in errors.
    #[must_use]
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! impl_coerce {
    ($coerce_fn:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Coerce for $ty {
                fn coerce(value: &Value) -> Result<Self> {
                    $coerce_fn(value)
                }
            }
        )+
    };
}

impl_coerce!(to_int => i8, i16, i32, i64, i128, isize);
impl_coerce!(to_uint => u8, u16, u32, u64, u128, usize);
impl_coerce!(to_float => f32, f64);

/// Name under which the JSON-number wrapper is reported.
pub(crate) const JSON_NUMBER: &str = "json.Number";

/// Convert a resolved primitive number into `T`.
///
/// Non-numeric sources fail with [`Error::Unsupported`], numbers that `T` can not
/// represent with [`Error::OutOfRange`].
pub(crate) fn cast_number<T: Coerce + NumCast>(value: &Value) -> Result<T> {
    let cast = match value {
        Value::I8(number) => T::from(*number),
        Value::I16(number) => T::from(*number),
        Value::I32(number) => T::from(*number),
        Value::I64(number) => T::from(*number),
        Value::Isize(number) => T::from(*number),
        Value::U8(number) => T::from(*number),
        Value::U16(number) => T::from(*number),
        Value::U32(number) => T::from(*number),
        Value::U64(number) => T::from(*number),
        Value::Usize(number) => T::from(*number),
        Value::F32(number) => T::from(*number),
        Value::F64(number) => T::from(*number),
        _ => return Err(unsupported::<T>(value)),
    };

    cast.ok_or_else(|| out_of_range::<T>(value.to_string(), value.type_name()))
}

/// Parse integer `text` on behalf of target `T`.
///
/// `type_name` names the source (`string` or `json.Number`) in errors.
pub(crate) fn parse_integer<T: Coerce>(text: &str, type_name: &'static str) -> Result<IntLiteral> {
    parse_int_literal(text).map_err(|source| parse_error::<T>(text, type_name, source))
}

/// Narrow a parsed integer literal into `T`.
///
/// `None` stands for a literal that was already found to be out of range.
pub(crate) fn narrow<T, N>(parsed: Option<N>, text: &str, type_name: &str) -> Result<T>
where
    T: Coerce + NumCast,
    N: ToPrimitive,
{
    parsed
        .and_then(|number| T::from(number))
        .ok_or_else(|| out_of_range::<T>(text.to_string(), type_name))
}

/// The text and reported type name of a string or JSON-number source.
pub(crate) fn textual(value: &Value) -> Option<(&str, &'static str)> {
    match value {
        Value::String(text) => Some((text.as_str(), "string")),
        Value::Json(number) => Some((number.as_str(), JSON_NUMBER)),
        _ => None,
    }
}

pub(crate) fn unsupported<T: Coerce>(value: &Value) -> Error {
    Error::Unsupported {
        value: value.to_string(),
        type_name: value.type_name().to_string(),
        target: T::type_name(),
    }
}

pub(crate) fn out_of_range<T: Coerce>(value: String, type_name: &str) -> Error {
    Error::OutOfRange {
        value,
        type_name: type_name.to_string(),
        target: T::type_name(),
    }
}

pub(crate) fn negative<T: Coerce>(value: String, type_name: &str) -> Error {
    Error::NegativeNumber {
        value,
        type_name: type_name.to_string(),
        target: T::type_name(),
    }
}

pub(crate) fn parse_error<T: Coerce>(
    text: &str,
    type_name: &'static str,
    source: impl Into<ParseFailure>,
) -> Error {
    Error::Parse {
        input: text.to_string(),
        type_name,
        target: T::type_name(),
        source: source.into(),
    }
}
