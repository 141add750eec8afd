//! Holders that keep a coerced integer next to its string origin.
//!
//! - [`IntHolder`] - any integer type, remembers the text it was set from
//! - [`UintHolder`] - unsigned integers only, remembers its type name
//!
//! Both own their value behind a `Box` and re-derive it from a string with `set`. A
//! failed `set` leaves the holder untouched and returns [`crate::Error::Holder`], whose
//! [`crate::Error::kind`] is the kind of the underlying coercion error.

mod int;
mod uint;

pub use int::IntHolder;
pub use uint::UintHolder;
