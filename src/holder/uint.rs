use std::fmt;

use crate::{to_uint, Error, Result, UnsignedInt, Value};

/// Holds an unsigned integer and the name of its type.
///
/// [`UintHolder::set`] coerces through [`crate::to_uint`], so negative input is
/// rejected instead of wrapping.
///
/// # Examples
///
/// ```rust
/// use coerce::{ErrorKind, UintHolder};
///
/// let mut workers = UintHolder::new(4_u32);
/// workers.set("16")?;
/// assert_eq!(workers.value(), 16);
///
/// let err = workers.set("-2").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NegativeNumberNotPermitted);
/// assert_eq!(workers.to_string(), "16");
/// # Ok::<(), coerce::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UintHolder<T> {
    item: Box<T>,
    type_name: &'static str,
}

impl<T: UnsignedInt> UintHolder<T> {
    /// Create a holder for `value`.
    ///
    /// ## Arguments
    /// * `value` - The initial value
    #[must_use]
    pub fn new(value: T) -> Self {
        UintHolder {
            item: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
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
    pub fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    /// Name of the held integer type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Re-derive the value from `text`.
    ///
    /// On failure the holder keeps its current value.
    ///
    /// # Errors
    /// Returns [`Error::Holder`] wrapping the error of [`crate::to_uint`].
    pub fn set(&mut self, text: &str) -> Result<()> {
        let value = to_uint::<T>(&Value::from(text)).map_err(|source| Error::Holder {
            type_name: self.type_name,
            source: Box::new(source),
        })?;

        self.item = Box::new(value);
        Ok(())
    }
}

impl<T: UnsignedInt + Default> Default for UintHolder<T> {
    fn default() -> Self {
        UintHolder::new(T::default())
    }
}

impl<T: fmt::Display> fmt::Display for UintHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)
    }
}
