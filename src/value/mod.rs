//! Dynamically-typed input values.
//!
//! [`Value`] is the tagged variant every coercion function accepts. It covers the
//! primitive numbers, booleans, text, textual JSON numbers, links to other values, and
//! an explicit absent case. Values of any other Rust type are captured as
//! [`Value::Opaque`], so they can still be reported in an error.
//!
//! # Key Components
//!
//! - [`Value`]: the input variant
//! - [`ValueKind`]: its discriminant, with the type names used in error messages
//! - [`JsonNumber`]: a JSON number kept in textual form
//!
//! # Reference chains
//!
//! A [`Value::Ref`] either links to another value or is a null reference. Coercion
//! always works on [`Value::resolve`], which follows links until it reaches a concrete
//! value and reports `None` when the chain ends in null.
//!
//! ```rust
//! use coerce::{to_int, Value};
//!
//! let chain = Value::reference(Value::reference(8_u16));
//! assert_eq!(to_int::<i64>(&chain)?, 8);
//!
//! let dangling = Value::reference(Value::null_ref());
//! assert!(dangling.resolve().is_none());
//! assert_eq!(to_int::<i64>(&dangling)?, 0);
//! # Ok::<(), coerce::Error>(())
//! ```

mod json;
mod kind;

pub use json::JsonNumber;
pub use kind::ValueKind;

use std::fmt;

/// A dynamically-typed value that can be coerced into a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// platform isize
    Isize(isize),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// platform usize
    Usize(usize),
    /// 32-bit floating point
    F32(f32),
    /// 64-bit floating point
    F64(f64),
    /// Text
    String(String),
    /// JSON number in textual form
    Json(JsonNumber),
    /// Link to another value; `None` is a null reference
    Ref(Option<Box<Value>>),
    /// A value of any other type
    Opaque {
        /// Fully qualified name of the captured type
        type_name: String,
        /// Debug rendering of the captured value
        repr: String,
    },
}

impl Value {
    /// Link to `target`.
    ///
    /// ## Arguments
    /// * `target` - The value the new reference points at
    #[must_use]
    pub fn reference(target: impl Into<Value>) -> Self {
        Value::Ref(Some(Box::new(target.into())))
    }

    /// A reference that points nowhere.
    #[must_use]
    pub fn null_ref() -> Self {
        Value::Ref(None)
    }

    /// Capture a value of a type that has no dedicated variant.
    ///
    /// Coercing the result always fails with [`crate::Error::Unsupported`], naming the
    /// captured type.
    ///
    /// ## Arguments
    /// * `value` - The value to capture
    #[must_use]
    pub fn opaque<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Value::Opaque {
            type_name: std::any::type_name::<T>().to_string(),
            repr: format!("{value:?}"),
        }
    }

    /// The kind of this value, without following references.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::I8(_) => ValueKind::I8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::Isize(_) => ValueKind::Isize,
            Value::U8(_) => ValueKind::U8,
            Value::U16(_) => ValueKind::U16,
            Value::U32(_) => ValueKind::U32,
            Value::U64(_) => ValueKind::U64,
            Value::Usize(_) => ValueKind::Usize,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::String(_) => ValueKind::String,
            Value::Json(_) => ValueKind::Json,
            Value::Ref(_) => ValueKind::Ref,
            Value::Opaque { .. } => ValueKind::Opaque,
        }
    }

    /// Name of this value's type, as reported in errors.
    ///
    /// Opaque values report the name of the captured type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Value::Opaque { type_name, .. } => type_name,
            other => other.kind().name(),
        }
    }

    /// Follow references until a concrete value is reached.
    ///
    /// Returns `None` if the value is [`Value::Null`], or if any link of the chain is a
    /// null reference.
    #[must_use]
    pub fn resolve(&self) -> Option<&Value> {
        let mut current = self;
        loop {
            match current {
                Value::Ref(Some(target)) => current = &**target,
                Value::Ref(None) | Value::Null => return None,
                concrete => return Some(concrete),
            }
        }
    }

    /// Returns `true` if the resolved value is numerically below zero.
    ///
    /// Only primitive numbers are inspected; text is not parsed. `-0.0` and `NaN` are not
    /// negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        let Some(value) = self.resolve() else {
            return false;
        };
        if !value.kind().is_signed() {
            return false;
        }

        match value {
            Value::I8(number) => *number < 0,
            Value::I16(number) => *number < 0,
            Value::I32(number) => *number < 0,
            Value::I64(number) => *number < 0,
            Value::Isize(number) => *number < 0,
            Value::F32(number) => *number < 0.0,
            Value::F64(number) => *number < 0.0,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::I8(value) => write!(f, "{}", value),
            Value::I16(value) => write!(f, "{}", value),
            Value::I32(value) => write!(f, "{}", value),
            Value::I64(value) => write!(f, "{}", value),
            Value::Isize(value) => write!(f, "{}", value),
            Value::U8(value) => write!(f, "{}", value),
            Value::U16(value) => write!(f, "{}", value),
            Value::U32(value) => write!(f, "{}", value),
            Value::U64(value) => write!(f, "{}", value),
            Value::Usize(value) => write!(f, "{}", value),
            Value::F32(value) => write!(f, "{}", value),
            Value::F64(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{:?}", value),
            Value::Json(value) => write!(f, "{}", value),
            Value::Ref(Some(target)) => write!(f, "&{}", target),
            Value::Ref(None) => write!(f, "&null"),
            Value::Opaque { repr, .. } => f.write_str(repr),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )+
    };
}

impl_from_primitive!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    JsonNumber => Json,
);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<serde_json::Number> for Value {
    fn from(value: serde_json::Number) -> Self {
        Value::Json(JsonNumber::from(value))
    }
}

/// `None` becomes [`Value::Null`].
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Arrays and objects have no numeric meaning and are captured as opaque values.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => Value::from(number),
            serde_json::Value::String(text) => Value::String(text),
            composite => Value::opaque(&composite),
        }
    }
}
