// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # coerce
//!
//! Coerce dynamically-typed values into signed integers, unsigned integers and floating
//! point numbers.
//!
//! Input arrives as a [`Value`]: a primitive number, a boolean, text, a JSON number kept
//! in textual form, a chain of references, or nothing at all. The generic functions
//! [`to_int`], [`to_uint`] and [`to_float`] turn it into the numeric type you ask for, or
//! into a classified [`Error`].
//!
//! ## Features
//!
//! - **Every primitive target** - `i8` through `i128`, `u8` through `u128`, `isize`, `usize`, `f32`, `f64`
//! - **Reference chains** - nested references are followed, a null link counts as absent
//! - **Literal parsing** - `0x`, `0o`, `0b` and leading-`0` base prefixes, `_` separators,
//!   hexadecimal floats such as `0x1.8p1`
//! - **No silent wrap-around** - negative sources never become unsigned, overflow is an error
//! - **JSON numbers** - textual numbers from `serde_json` keep their precision until coerced
//!
//! ## Quick Start
//!
//! ```rust
//! use coerce::prelude::*;
//!
//! assert_eq!(to_int::<i64>(&Value::from("8"))?, 8);
//! assert_eq!(to_uint::<u8>(&Value::from(true))?, 1);
//! assert_eq!(to_float::<f64>(&Value::Null)?, 0.0);
//!
//! let err = to_uint::<u32>(&Value::from(-8.31_f32)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NegativeNumberNotPermitted);
//! # Ok::<(), coerce::Error>(())
//! ```
//!
//! ### JSON input
//!
//! ```rust
//! use coerce::{to_float, to_uint, Value};
//!
//! let doc: serde_json::Value = serde_json::from_str(r#"{"port": 8080, "ratio": 0.25}"#)?;
//! let port: u16 = to_uint(&Value::from(doc["port"].clone()))?;
//! let ratio: f32 = to_float(&Value::from(doc["ratio"].clone()))?;
//! assert_eq!(port, 8080);
//! assert_eq!(ratio, 0.25);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Holders
//!
//! [`IntHolder`] and [`UintHolder`] own a coerced integer and can be re-set from text:
//!
//! ```rust
//! use coerce::UintHolder;
//!
//! let mut limit = UintHolder::new(10_u32);
//! limit.set("0x20")?;
//! assert_eq!(limit.to_string(), "32");
//! # Ok::<(), coerce::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). [`Error::kind`] classifies every
//! failure as either [`ErrorKind::InvalidParam`] or
//! [`ErrorKind::NegativeNumberNotPermitted`]:
//!
//! ```rust
//! use coerce::{to_int, Error, Value};
//!
//! match to_int::<i32>(&Value::from("eight")) {
//!     Ok(value) => println!("got {}", value),
//!     Err(Error::Parse { input, source, .. }) => println!("{:?} is not a number: {}", input, source),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use coerce::prelude::*;
///
/// let value = Value::reference(JsonNumber::new("12"));
/// assert_eq!(to_int::<i32>(&value)?, 12);
/// # Ok::<(), coerce::Error>(())
/// ```
pub mod prelude;

/// Dynamically-typed input values
///
/// # Key Types
///
/// - [`value::Value`] - The tagged variant accepted by every coercion function
/// - [`value::ValueKind`] - Discriminant of a value, with its reported type name
/// - [`value::JsonNumber`] - A JSON number kept in textual form
pub mod value;

/// Coercion of values into numbers
///
/// # Main Functions
///
/// - [`coerce::to_int`] - Coerce into a signed integer
/// - [`coerce::to_uint`] - Coerce into an unsigned integer
/// - [`coerce::to_float`] - Coerce into a floating point number
/// - [`coerce::parse_int_literal`] - Parse a base-agnostic integer literal
pub mod coerce;

/// Integer holders that keep their string origin
pub mod holder;

/// `coerce` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use coerce::{to_int, Result, Value};
///
/// fn retries(raw: &str) -> Result<i8> {
///     to_int(&Value::from(raw))
/// }
/// assert_eq!(retries("3").unwrap(), 3);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `coerce` Error type
///
/// The error type for all operations in this crate, classified by [`ErrorKind`].
pub use error::{Error, ErrorKind, ParseFailure};

pub use coerce::{
    parse_int_literal, to_float, to_int, to_uint, Coerce, FloatTarget, IntLiteral, SignedInt,
    UnsignedInt,
};
pub use holder::{IntHolder, UintHolder};
pub use value::{JsonNumber, Value, ValueKind};
