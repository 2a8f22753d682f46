//! Builtin type vocabulary.
//!
//! These are the types every registry is seeded with, listed in the order ids are assigned. `UNKNOWN` comes first so it
//! always gets id 0; the registry relies on that to tell "already known" apart from "falls back to UNKNOWN".
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Int` is not `int`.
//! - `float` intentionally carries the `%d` format. Generated trace code prints the raw bits.
//!
//! ## Examples
//! ```rust
//! use emugen_core::builtins::{self, BuiltinTypeId};
//!
//! assert_eq!(builtins::from_str("char"), Some(BuiltinTypeId::Char));
//! assert_eq!(builtins::info_for(BuiltinTypeId::Short).width, 16);
//! assert_eq!(builtins::as_str(BuiltinTypeId::Unknown), "UNKNOWN");
//! ```

use crate::converters::{self, VarConverter};

/// Name of the fallback type returned for unregistered names.
pub const UNKNOWN_TYPE_NAME: &str = "UNKNOWN";

/// Stable identifier for builtin types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTypeId {
    Unknown,
    Void,
    Char,
    Int,
    Float,
    Short,
}

/// Metadata for a builtin type.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTypeInfo {
    pub id: BuiltinTypeId,
    pub canonical: &'static str,
    /// Bit-width class; always one of [`converters::SUPPORTED_WIDTHS`].
    pub width: u32,
    /// printf-style token for trace output.
    pub format: &'static str,
    pub description: &'static str,
}

impl BuiltinTypeInfo {
    /// The converter strategy for this type's width.
    pub fn converter(&self) -> &'static VarConverter {
        converters::for_width(i64::from(self.width)).expect("INVARIANT: builtin widths are supported")
    }
}

/// Registry of builtin types, in id-assignment order.
pub const BUILTIN_TYPES: &[BuiltinTypeInfo] = &[
    info(
        BuiltinTypeId::Unknown,
        UNKNOWN_TYPE_NAME,
        0,
        "0x%x",
        "Fallback for names the registry does not know.",
    ),
    info(BuiltinTypeId::Void, "void", 0, "0x%x", "No value."),
    info(BuiltinTypeId::Char, "char", 8, "%c", "8-bit character."),
    info(BuiltinTypeId::Int, "int", 32, "%d", "32-bit signed integer."),
    info(
        BuiltinTypeId::Float,
        "float",
        32,
        "%d",
        "32-bit float, traced as its integer bits.",
    ),
    info(BuiltinTypeId::Short, "short", 16, "%d", "16-bit signed integer."),
];

/// Resolve a spelling to a [`BuiltinTypeId`].
///
/// ## Returns
/// - `Some(BuiltinTypeId)` if `name` is a builtin spelling.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<BuiltinTypeId> {
    BUILTIN_TYPES.iter().find(|t| t.canonical == name).map(|t| t.id)
}

/// Return the canonical spelling for a builtin type.
pub fn as_str(id: BuiltinTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a builtin type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BuiltinTypeId) -> &'static BuiltinTypeInfo {
    BUILTIN_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("builtin type info missing")
}

const fn info(
    id: BuiltinTypeId,
    canonical: &'static str,
    width: u32,
    format: &'static str,
    description: &'static str,
) -> BuiltinTypeInfo {
    BuiltinTypeInfo {
        id,
        canonical,
        width,
        format,
        description,
    }
}
