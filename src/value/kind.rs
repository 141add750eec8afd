use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// The discriminant of a [`crate::Value`], without the payload.
///
/// The string form of each kind is the name used for the source type in error
/// messages: the Rust primitive name for numbers, `string` for text and
/// `json.Number` for the JSON-number wrapper.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    /// Absence of a value
    Null,
    /// `true` / `false`
    Bool,
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// platform isize
    Isize,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// platform usize
    Usize,
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
    /// Owned text
    String,
    /// Textual JSON number
    #[strum(serialize = "json.Number")]
    Json,
    /// Link to another value, possibly null
    #[strum(serialize = "ref")]
    Ref,
    /// Any other Rust value, kept as its type name and debug rendering
    Opaque,
}

impl ValueKind {
    /// Name of this kind as used in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns `true` for kinds that can hold a negative number.
    #[must_use]
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            ValueKind::I8
                | ValueKind::I16
                | ValueKind::I32
                | ValueKind::I64
                | ValueKind::Isize
                | ValueKind::F32
                | ValueKind::F64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_names() {
        assert_eq!(ValueKind::Null.name(), "null");
        assert_eq!(ValueKind::Bool.name(), "bool");
        assert_eq!(ValueKind::I8.name(), "i8");
        assert_eq!(ValueKind::Isize.name(), "isize");
        assert_eq!(ValueKind::U64.name(), "u64");
        assert_eq!(ValueKind::F32.name(), "f32");
        assert_eq!(ValueKind::String.name(), "string");
        assert_eq!(ValueKind::Json.name(), "json.Number");
        assert_eq!(ValueKind::Ref.name(), "ref");
        assert_eq!(ValueKind::Opaque.to_string(), "opaque");
    }

    #[test]
    fn test_kind_classes() {
        let signed = ValueKind::iter().filter(|k| k.is_signed()).count();
        assert_eq!(signed, 7);

        assert!(ValueKind::I16.is_signed());
        assert!(ValueKind::F64.is_signed());
        assert!(!ValueKind::U16.is_signed());
        assert!(!ValueKind::String.is_signed());
        assert!(!ValueKind::Json.is_signed());
        assert_eq!(ValueKind::COUNT, 18);
    }
}
