use std::num::{ParseFloatError, ParseIntError};

use strum::{EnumCount, EnumIter, IntoStaticStr};
use thiserror::Error;

/// Classification of every [`Error`] this library can return.
///
/// Callers that only care about *why* a coercion failed, and not about the
/// diagnostic payload, match on the kind instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr)]
pub enum ErrorKind {
    /// The source value has an unsupported type, could not be parsed, or does
    /// not fit into the requested target type.
    InvalidParam,
    /// The source value is negative and the target type is unsigned.
    NegativeNumberNotPermitted,
}

/// The reason a textual value could not be parsed into a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The integer literal was rejected.
    #[error("{0}")]
    Int(#[from] ParseIntError),

    /// The floating point literal was rejected.
    #[error("{0}")]
    Float(#[from] ParseFloatError),

    /// A `_` digit separator appeared somewhere other than between two digits
    /// or directly after a base prefix.
    #[error("misplaced digit separator")]
    Separator,

    /// A sign appeared somewhere other than at the very start of the literal.
    #[error("misplaced sign")]
    Sign,

    /// A hexadecimal float literal has an invalid mantissa or lacks its `p` exponent.
    #[error("invalid hexadecimal float literal")]
    HexFloat,
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant carries the offending value and the name of its source type so that a failed
/// coercion can be diagnosed without access to the original input. Use [`Error::kind`] to
/// classify an error.
///
/// # Error Categories
///
/// ## Invalid parameters
/// - [`Error::Unsupported`] - The source type cannot be coerced into a number
/// - [`Error::Parse`] - A textual value is not a valid number literal
/// - [`Error::OutOfRange`] - The value does not fit into the target type
///
/// ## Sign violations
/// - [`Error::NegativeNumber`] - A negative value was coerced into an unsigned target
///
/// ## Holders
/// - [`Error::Holder`] - Re-setting a holder from a string failed
///
/// # Examples
///
/// ```rust
/// use coerce::{to_uint, Error, ErrorKind, Value};
///
/// match to_uint::<u32>(&Value::from(-3_i64)) {
///     Err(Error::NegativeNumber { value, type_name, .. }) => {
///         assert_eq!(value, "-3");
///         assert_eq!(type_name, "i64");
///     }
///     other => panic!("unexpected result {:?}", other),
/// }
///
/// let err = to_uint::<u32>(&Value::from("nope")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidParam);
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The source value has a type that can not be coerced into a number.
    ///
    /// # Fields
    ///
    /// * `value` - Debug rendering of the offending value
    /// * `type_name` - Name of the offending value's type
    /// * `target` - Name of the requested numeric type
    #[error("invalid parameter - unable to cast {value} of type {type_name} to {target}")]
    Unsupported {
        /// Debug rendering of the offending value
        value: String,
        /// Name of the offending value's type
        type_name: String,
        /// Name of the requested numeric type
        target: &'static str,
    },

    /// A textual value could not be parsed as a number literal.
    #[error("invalid parameter - unable to cast {input:?} of type {type_name} to {target}: {source}")]
    Parse {
        /// The text that failed to parse
        input: String,
        /// Name of the source type (`string` or `json.Number`)
        type_name: &'static str,
        /// Name of the requested numeric type
        target: &'static str,
        /// The underlying parse failure
        #[source]
        source: ParseFailure,
    },

    /// The value is valid, but can not be represented by the target type.
    #[error("invalid parameter - {value} of type {type_name} is out of range for {target}")]
    OutOfRange {
        /// Rendering of the offending value
        value: String,
        /// Name of the offending value's type
        type_name: String,
        /// Name of the requested numeric type
        target: &'static str,
    },

    /// The value is negative, but the target type is unsigned.
    #[error("negative numbers not permitted - {value} of type {type_name} can not become {target}")]
    NegativeNumber {
        /// Rendering of the offending value
        value: String,
        /// Name of the offending value's type
        type_name: String,
        /// Name of the requested numeric type
        target: &'static str,
    },

    /// Setting a holder from a string failed.
    ///
    /// The holder keeps its previous value. The wrapped error describes the failed coercion.
    #[error("{type_name} holder rejected the new value: {source}")]
    Holder {
        /// Name of the holder's numeric type
        type_name: &'static str,
        /// The coercion error that caused the failure
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Classify this error.
    ///
    /// Holder errors report the kind of the coercion error they wrap.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unsupported { .. } | Error::Parse { .. } | Error::OutOfRange { .. } => {
                ErrorKind::InvalidParam
            }
            Error::NegativeNumber { .. } => ErrorKind::NegativeNumberNotPermitted,
            Error::Holder { source, .. } => source.kind(),
        }
    }

    /// Returns `true` if this error was caused by a negative value and an unsigned target.
    #[must_use]
    pub fn is_negative_number(&self) -> bool {
        self.kind() == ErrorKind::NegativeNumberNotPermitted
    }
}
