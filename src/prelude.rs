//! # coerce Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the coerce library. Import this module to get quick access to the coercion
//! functions, the input value type and the error types.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all coerce operations
pub use crate::Error;

/// Classification of errors
pub use crate::ErrorKind;

/// The result type used throughout coerce
pub use crate::Result;

// ================================================================================================
// Input Values
// ================================================================================================

/// Dynamically-typed input and its discriminant
pub use crate::value::{Value, ValueKind};

/// JSON number in textual form
pub use crate::value::JsonNumber;

// ================================================================================================
// Coercion
// ================================================================================================

/// Generic coercion functions
pub use crate::coerce::{to_float, to_int, to_uint};

/// Target-type driven coercion and the target families
pub use crate::coerce::{Coerce, FloatTarget, SignedInt, UnsignedInt};

// ================================================================================================
// Holders
// ================================================================================================

/// Integer holders
pub use crate::holder::{IntHolder, UintHolder};
