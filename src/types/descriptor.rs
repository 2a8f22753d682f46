//! Type descriptors handed out by the registry.

use std::fmt;

use emugen_core::builtins::UNKNOWN_TYPE_NAME;
use emugen_core::converters::VarConverter;

/// Unique, never reused type identifier.
///
/// Ids are assigned in declaration order starting at 0. `UNKNOWN` is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Id of the `UNKNOWN` builtin.
    pub const UNKNOWN: TypeId = TypeId(0);

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable binding of a type name to its id, converter and trace format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    id: TypeId,
    name: String,
    converter: &'static VarConverter,
    format: String,
}

impl TypeDescriptor {
    pub fn new(
        id: TypeId,
        name: impl Into<String>,
        converter: &'static VarConverter,
        format: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            converter,
            format: format.into(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared converter strategy for this type's width class.
    pub fn converter(&self) -> &'static VarConverter {
        self.converter
    }

    /// printf-style token for generated trace code (e.g. `%d`).
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Width class in bits.
    pub fn width(&self) -> u32 {
        self.converter.bits()
    }

    pub fn size_bytes(&self) -> usize {
        self.converter.size_bytes()
    }

    /// `true` for the fallback descriptor.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_TYPE_NAME
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id {}, {}-bit, {:?})",
            self.name,
            self.id,
            self.width(),
            self.format
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emugen_core::converters::{VAR0, VAR16};

    #[test]
    fn test_accessors() {
        let desc = TypeDescriptor::new(TypeId(9), "GLshort", &VAR16, "%hd");
        assert_eq!(desc.id(), TypeId(9));
        assert_eq!(desc.name(), "GLshort");
        assert_eq!(desc.format(), "%hd");
        assert_eq!(desc.width(), 16);
        assert_eq!(desc.size_bytes(), 2);
        assert!(std::ptr::eq(desc.converter(), &VAR16));
        assert!(!desc.is_unknown());
    }

    #[test]
    fn test_display() {
        let desc = TypeDescriptor::new(TypeId(0), "UNKNOWN", &VAR0, "0x%x");
        assert!(desc.is_unknown());
        assert_eq!(desc.to_string(), r#"UNKNOWN (id 0, 0-bit, "0x%x")"#);
    }
}
