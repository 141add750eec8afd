use super::{cast_number, narrow, negative, parse_integer, textual, UnsignedInt};
use crate::{Result, Value};

/// Coerce `value` into the unsigned integer type `T`.
///
/// Follows the same rules as [`crate::to_int`], except that a numerically negative
/// source never wraps around: negative integers, negative floats, and strings or JSON
/// numbers holding a negative literal are rejected. `-0` and `-0.0` count as zero.
///
/// # Errors
/// - [`crate::Error::NegativeNumber`] if the source is below zero
/// - [`crate::Error::Parse`] if a string or JSON number is not an integer literal
/// - [`crate::Error::OutOfRange`] if the number does not fit into `T`
/// - [`crate::Error::Unsupported`] for any other kind of value
///
/// # Examples
///
/// ```rust
/// use coerce::{to_uint, ErrorKind, Value};
///
/// assert_eq!(to_uint::<u32>(&Value::from("0x10"))?, 16);
/// assert_eq!(to_uint::<u8>(&Value::from(false))?, 0);
///
/// let err = to_uint::<u32>(&Value::from("-1")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NegativeNumberNotPermitted);
/// # Ok::<(), coerce::Error>(())
/// ```
pub fn to_uint<T: UnsignedInt>(value: &Value) -> Result<T> {
    let Some(value) = value.resolve() else {
        return Ok(T::zero());
    };

    if let Value::Bool(flag) = value {
        return Ok(if *flag { T::one() } else { T::zero() });
    }

    if let Some((text, type_name)) = textual(value) {
        let literal = parse_integer::<T>(text, type_name)?;
        if literal.is_negative() {
            return Err(negative::<T>(text.to_string(), type_name));
        }
        return narrow(literal.to_u128(), text, type_name);
    }

    if value.is_negative() {
        return Err(negative::<T>(value.to_string(), value.type_name()));
    }

    cast_number(value)
}
