use super::{
    cast_number,
    literal::{is_infinity_literal, parse_hex_float},
    out_of_range, parse_error, textual, FloatTarget,
};
use crate::{Result, Value};

/// Coerce `value` into the floating point type `T`.
///
/// Follows the same dispatch as [`crate::to_int`], but strings and JSON numbers are
/// parsed as float literals (`1.5`, `-2e10`, `0x1.8p1`, `inf`, `NaN`, ...) and integer
/// sources are rounded to the nearest representable value. Negative numbers are
/// accepted.
///
/// Infinity is only produced from an infinite source or an `inf`/`infinity` literal.
/// A finite number too large for `T` is out of range.
///
/// # Errors
/// - [`crate::Error::Parse`] if a string or JSON number is not a float literal
/// - [`crate::Error::OutOfRange`] if a finite number overflows `T`
/// - [`crate::Error::Unsupported`] for any other kind of value
///
/// # Examples
///
/// ```rust
/// use coerce::{to_float, JsonNumber, Value};
///
/// assert_eq!(to_float::<f64>(&Value::from("-8.31"))?, -8.31);
/// assert_eq!(to_float::<f64>(&Value::from("0x1.8p1"))?, 3.0);
/// assert_eq!(to_float::<f32>(&Value::from(JsonNumber::new("8.0")))?, 8.0);
/// assert_eq!(to_float::<f64>(&Value::Null)?, 0.0);
/// assert!(to_float::<f32>(&Value::from(1e300_f64)).is_err());
/// # Ok::<(), coerce::Error>(())
/// ```
pub fn to_float<T: FloatTarget>(value: &Value) -> Result<T> {
    let Some(value) = value.resolve() else {
        return Ok(T::zero());
    };

    if let Value::Bool(flag) = value {
        return Ok(if *flag { T::one() } else { T::zero() });
    }

    match textual(value) {
        Some((text, type_name)) => {
            let parsed = parse_float::<T>(text, type_name)?;
            if parsed.is_infinite() && !is_infinity_literal(text) {
                return Err(out_of_range::<T>(text.to_string(), type_name));
            }
            Ok(parsed)
        }
        None => {
            let cast = cast_number::<T>(value)?;
            if cast.is_infinite() && !is_infinite(value) {
                return Err(out_of_range::<T>(value.to_string(), value.type_name()));
            }
            Ok(cast)
        }
    }
}

fn parse_float<T: FloatTarget>(text: &str, type_name: &'static str) -> Result<T> {
    match parse_hex_float(text) {
        Some(parsed) => {
            let parsed = parsed.map_err(|source| parse_error::<T>(text, type_name, source))?;
            T::from(parsed).ok_or_else(|| out_of_range::<T>(text.to_string(), type_name))
        }
        None => text
            .parse::<T>()
            .map_err(|source| parse_error::<T>(text, type_name, source)),
    }
}

fn is_infinite(value: &Value) -> bool {
    match value {
        Value::F32(number) => number.is_infinite(),
        Value::F64(number) => number.is_infinite(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test::*, Error, ErrorKind, JsonNumber, ParseFailure};

    #[test]
    fn test_eight_from_every_kind() {
        for input in eight_inputs() {
            assert_eq!(to_float::<f32>(&input).unwrap(), 8.0, "f32 from {input:?}");
            assert_eq!(to_float::<f64>(&input).unwrap(), 8.0, "f64 from {input:?}");
        }
        assert_eq!(
            to_float::<f64>(&Value::from(JsonNumber::new("8.0"))).unwrap(),
            8.0
        );
    }

    #[test]
    fn test_negative_accepted() {
        for input in negative_eight_inputs() {
            assert_eq!(to_float::<f64>(&input).unwrap(), -8.0, "from {input:?}");
        }
    }

    #[test]
    fn test_fractions() {
        assert_eq!(to_float::<f32>(&Value::from(8.31_f32)).unwrap(), 8.31_f32);
        assert_eq!(to_float::<f64>(&Value::from(8.31_f64)).unwrap(), 8.31_f64);
        // f32 -> f64 keeps the f32 rounding error.
        assert_eq!(
            to_float::<f64>(&Value::from(-8.31_f32)).unwrap(),
            f64::from(-8.31_f32)
        );
        assert_eq!(to_float::<f64>(&Value::from("-8.31")).unwrap(), -8.31);
        assert_eq!(to_float::<f64>(&Value::from("1e3")).unwrap(), 1000.0);
    }

    #[test]
    fn test_special_literals() {
        assert_eq!(to_float::<f64>(&Value::from("inf")).unwrap(), f64::INFINITY);
        assert_eq!(
            to_float::<f32>(&Value::from("-infinity")).unwrap(),
            f32::NEG_INFINITY
        );
        assert!(to_float::<f64>(&Value::from("NaN")).unwrap().is_nan());
        assert_eq!(to_float::<f64>(&Value::from("+Inf")).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_hex_literals() {
        assert_eq!(to_float::<f64>(&Value::from("0x1p4")).unwrap(), 16.0);
        assert_eq!(to_float::<f64>(&Value::from("0x1.8p1")).unwrap(), 3.0);
        assert_eq!(to_float::<f32>(&Value::from("-0x1p-2")).unwrap(), -0.25);
        assert_eq!(
            to_float::<f64>(&Value::from(JsonNumber::new("0x1.8p1"))).unwrap(),
            3.0
        );
        assert_eq!(
            to_float::<f64>(&Value::from("0x1.fffffffffffffp1023")).unwrap(),
            f64::MAX
        );
    }

    #[test]
    fn test_overflowing_text() {
        for (text, target) in [("1e400", "f64"), ("-1e400", "f64"), ("0x1p1024", "f64")] {
            match to_float::<f64>(&Value::from(text)) {
                Err(Error::OutOfRange {
                    value,
                    type_name,
                    target: name,
                }) => {
                    assert_eq!(value, text);
                    assert_eq!(type_name, "string");
                    assert_eq!(name, target);
                }
                other => panic!("unexpected result for {text:?}: {other:?}"),
            }
        }

        let err = to_float::<f32>(&Value::from("1e300")).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { target: "f32", .. }), "{err}");
        assert_eq!(err.kind(), ErrorKind::InvalidParam);
        assert!(to_float::<f32>(&Value::from(JsonNumber::new("1e39"))).is_err());
        assert!(to_float::<f32>(&Value::from("0x1p128")).is_err());

        // Values that only underflow stay finite.
        assert_eq!(to_float::<f64>(&Value::from("1e-400")).unwrap(), 0.0);
        assert_eq!(to_float::<f32>(&Value::from("3.4e38")).unwrap(), 3.4e38_f32);
    }

    #[test]
    fn test_narrowing_overflow() {
        match to_float::<f32>(&Value::from(1e300_f64)) {
            Err(Error::OutOfRange {
                value,
                type_name,
                target,
            }) => {
                assert_eq!(value, Value::from(1e300_f64).to_string());
                assert_eq!(type_name, "f64");
                assert_eq!(target, "f32");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(to_float::<f32>(&Value::from(-f64::MAX)).is_err());

        // Non-finite sources keep their value.
        assert_eq!(
            to_float::<f32>(&Value::from(f64::INFINITY)).unwrap(),
            f32::INFINITY
        );
        assert_eq!(
            to_float::<f32>(&Value::from(f64::NEG_INFINITY)).unwrap(),
            f32::NEG_INFINITY
        );
        assert!(to_float::<f32>(&Value::from(f64::NAN)).unwrap().is_nan());
        assert_eq!(
            to_float::<f32>(&Value::from(f64::from(f32::MAX))).unwrap(),
            f32::MAX
        );
    }

    #[test]
    fn test_bool_and_absent() {
        assert_eq!(to_float::<f64>(&Value::from(true)).unwrap(), 1.0);
        assert_eq!(to_float::<f64>(&Value::from(false)).unwrap(), 0.0);
        assert_eq!(to_float::<f32>(&Value::Null).unwrap(), 0.0);
        assert_eq!(to_float::<f32>(&Value::null_ref()).unwrap(), 0.0);
    }

    #[test]
    fn test_large_integers() {
        assert_eq!(
            to_float::<f64>(&Value::from(u64::MAX)).unwrap(),
            18_446_744_073_709_551_615_f64
        );
        assert_eq!(to_float::<f64>(&Value::from(i64::MIN)).unwrap(), -9.223_372_036_854_776e18);
    }

    #[test]
    fn test_failures() {
        match to_float::<f64>(&Value::from("test")) {
            Err(Error::Parse {
                input,
                type_name,
                target,
                ..
            }) => {
                assert_eq!(input, "test");
                assert_eq!(type_name, "string");
                assert_eq!(target, "f64");
            }
            other => panic!("unexpected {other:?}"),
        }

        // A hexadecimal mantissa needs its binary exponent.
        assert!(matches!(
            to_float::<f64>(&Value::from("0x10")),
            Err(Error::Parse {
                source: ParseFailure::HexFloat,
                ..
            })
        ));

        let err = to_float::<f32>(&unknown()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParam);
        assert!(matches!(err, Error::Unsupported { .. }));
    }
}
