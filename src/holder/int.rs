use std::fmt;

use num_traits::PrimInt;

use crate::{Coerce, Error, Result, Value};

/// Holds an integer together with the text it was derived from.
///
/// Works for signed and unsigned targets alike; [`IntHolder::set`] coerces through
/// [`crate::to_int`] or [`crate::to_uint`] depending on the signedness of `T`.
///
/// # Examples
///
/// ```rust
/// use coerce::IntHolder;
///
/// let mut port = IntHolder::new(8080_u16, "8080");
/// port.set("0x1F90")?;
/// assert_eq!(port.value(), 8080);
/// assert_eq!(port.text(), "0x1F90");
/// assert_eq!(port.to_string(), "8080");
///
/// assert!(port.set("-1").is_err());
/// assert_eq!(port.text(), "0x1F90");
/// # Ok::<(), coerce::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntHolder<T> {
    item: Box<T>,
    text: String,
}

impl<T: Coerce + PrimInt> IntHolder<T> {
    /// Create a holder for `value`, recording `text` as its origin.
    ///
    /// `text` is kept verbatim and is not checked against `value`.
    ///
    /// ## Arguments
    /// * `value` - The initial value
    /// * `text` - The string the value was derived from
    #[must_use]
    pub fn new(value: T, text: impl Into<String>) -> Self {
        IntHolder {
            item: Box::new(value),
            text: text.into(),
        }
    }

    /// Create a holder by coercing `text`.
    ///
    /// # Errors
    /// Returns [`Error::Holder`] wrapping the coercion error if `text` is not a valid `T`.
    pub fn parse(text: &str) -> Result<Self> {
        let value = Self::coerce_text(text)?;
        Ok(Self::new(value, text))
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> T {
        *self.item
    }

    /// Borrow the current value.
    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Mutably borrow the current value.
    ///
    /// Changing the value this way leaves the recorded text untouched.
    pub fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    /// The text the current value was derived from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Name of the held integer type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        T::type_name()
    }

    /// Re-derive the value from `text`.
    ///
    /// On success both the value and the recorded text are replaced. On failure the
    /// holder is left unchanged.
    ///
    /// # Errors
    /// Returns [`Error::Holder`] wrapping the coercion error.
    pub fn set(&mut self, text: &str) -> Result<()> {
        let value = Self::coerce_text(text)?;
        self.item = Box::new(value);
        self.text = text.to_string();
        Ok(())
    }

    fn coerce_text(text: &str) -> Result<T> {
        T::coerce(&Value::from(text)).map_err(|source| Error::Holder {
            type_name: T::type_name(),
            source: Box::new(source),
        })
    }
}

impl<T: fmt::Display> fmt::Display for IntHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)
    }
}
