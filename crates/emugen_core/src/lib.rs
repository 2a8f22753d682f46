//! Provide the fixed vocabulary the emugen type registry is built from.
//!
//! This crate is intentionally small and dependency-free. It holds two `'static` tables:
//! - the converter strategies, one per supported bit width, and
//! - the builtin types every registry starts with.
//!
//! ## Notes
//!
//! - No IO and no mutable state. The stateful registry lives in the `emugen` crate and only reads from here.

pub mod builtins;
pub mod converters;

pub use builtins::{BUILTIN_TYPES, BuiltinTypeId, BuiltinTypeInfo, UNKNOWN_TYPE_NAME};
pub use converters::{SUPPORTED_WIDTHS, VarConverter};
