use super::{cast_number, narrow, parse_integer, textual, SignedInt};
use crate::{Result, Value};

/// Coerce `value` into the signed integer type `T`.
///
/// References are followed first; an absent value yields `0`. Booleans become `1` or
/// `0`, primitive numbers are converted (floats truncate toward zero), and strings or
/// JSON numbers are parsed as integer literals with an optional `0x`, `0o`, `0b` or
/// leading-`0` base prefix.
///
/// # Errors
/// - [`crate::Error::Parse`] if a string or JSON number is not an integer literal
/// - [`crate::Error::OutOfRange`] if the number does not fit into `T`
/// - [`crate::Error::Unsupported`] for any other kind of value
///
/// # Examples
///
/// ```rust
/// use coerce::{to_int, Value};
///
/// assert_eq!(to_int::<i64>(&Value::from("8"))?, 8);
/// assert_eq!(to_int::<i8>(&Value::from(-8.31_f64))?, -8);
/// assert_eq!(to_int::<i16>(&Value::Null)?, 0);
/// assert!(to_int::<i8>(&Value::from(300_u16)).is_err());
/// # Ok::<(), coerce::Error>(())
/// ```
pub fn to_int<T: SignedInt>(value: &Value) -> Result<T> {
    let Some(value) = value.resolve() else {
        return Ok(T::zero());
    };

    if let Value::Bool(flag) = value {
        return Ok(if *flag { T::one() } else { T::zero() });
    }

    match textual(value) {
        Some((text, type_name)) => {
            let literal = parse_integer::<T>(text, type_name)?;
            narrow(literal.to_i128(), text, type_name)
        }
        None => cast_number(value),
    }
}
