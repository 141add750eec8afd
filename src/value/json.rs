//! Textual JSON numbers.
//!
//! A [`JsonNumber`] keeps a number exactly as it was written in a JSON document, so that
//! large integers and precise decimals survive until a caller picks the numeric type to
//! coerce them into.

use std::{fmt, str::FromStr};

use crate::{to_float, to_int, Result, Value};

/// A JSON number preserved in its textual form.
///
/// Coercing a `JsonNumber` re-runs the string path of the coercion functions on its
/// text, so `"8"`, `"-8"` and `"8.0"` behave exactly like the equivalent strings.
///
/// # Examples
///
/// ```rust
/// use coerce::JsonNumber;
///
/// let number: JsonNumber = "42".parse()?;
/// assert_eq!(number.as_str(), "42");
/// assert_eq!(number.to_i64().unwrap(), 42);
/// assert_eq!(number.to_f64().unwrap(), 42.0);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonNumber(String);

impl JsonNumber {
    /// Wrap `text` without validating it.
    ///
    /// Malformed text is reported when the number is coerced.
    ///
    /// ## Arguments
    /// * `text` - The textual form of the number
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        JsonNumber(text.into())
    }

    /// The number exactly as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the number as an `i64`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Parse`] if the text is not an integer literal, or
    /// [`crate::Error::OutOfRange`] if it does not fit.
    pub fn to_i64(&self) -> Result<i64> {
        to_int(&Value::Json(self.clone()))
    }

    /// Interpret the number as an `f64`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Parse`] if the text is not a float literal.
    pub fn to_f64(&self) -> Result<f64> {
        to_float(&Value::Json(self.clone()))
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses `text` with the JSON number grammar.
impl FromStr for JsonNumber {
    type Err = serde_json::Error;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        let number: serde_json::Number = serde_json::from_str(text)?;
        Ok(JsonNumber::from(number))
    }
}

impl From<serde_json::Number> for JsonNumber {
    fn from(number: serde_json::Number) -> Self {
        JsonNumber(number.to_string())
    }
}

impl From<&serde_json::Number> for JsonNumber {
    fn from(number: &serde_json::Number) -> Self {
        JsonNumber(number.to_string())
    }
}

impl From<&str> for JsonNumber {
    fn from(text: &str) -> Self {
        JsonNumber::new(text)
    }
}

impl From<String> for JsonNumber {
    fn from(text: String) -> Self {
        JsonNumber(text)
    }
}

impl AsRef<str> for JsonNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_from_serde_json() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"a": 8, "b": -8, "c": 8.0}"#).unwrap();
        let number = |key: &str| match &value[key] {
            serde_json::Value::Number(number) => JsonNumber::from(number),
            other => panic!("expected a number, got {other}"),
        };

        let a = number("a");
        let b = number("b");
        let c = number("c");

        assert_eq!(a.as_str(), "8");
        assert_eq!(b.as_str(), "-8");
        assert_eq!(c.as_str(), "8.0");
    }

    #[test]
    fn test_parse_validates_grammar() {
        assert_eq!("12".parse::<JsonNumber>().unwrap().as_str(), "12");
        assert_eq!("-1.5e3".parse::<JsonNumber>().unwrap().to_f64().unwrap(), -1500.0);
        assert!("0x10".parse::<JsonNumber>().is_err());
        assert!("eight".parse::<JsonNumber>().is_err());
        assert!("\"8\"".parse::<JsonNumber>().is_err());
    }

    #[test]
    fn test_conversions() {
        let number = JsonNumber::new("-8");
        assert_eq!(number.to_i64().unwrap(), -8);
        assert_eq!(number.to_f64().unwrap(), -8.0);
        assert_eq!(number.to_string(), "-8");

        let fraction = JsonNumber::new("8.25");
        assert_eq!(fraction.to_f64().unwrap(), 8.25);
        assert_eq!(fraction.to_i64().unwrap_err().kind(), ErrorKind::InvalidParam);
    }

    #[test]
    fn test_unvalidated_text() {
        let number = JsonNumber::from("abc");
        assert_eq!(number.as_ref(), "abc");
        assert!(number.to_i64().is_err());
        assert_eq!(number.as_str(), "abc");
    }
}
