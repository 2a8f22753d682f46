#![forbid(unsafe_code)]
//! emugen type registry
//!
//! Resolves the type names that appear in an emugen API description to descriptors the code generator uses when it
//! emits encoders, decoders and trace code. Built-in types are installed when a [`TypeRegistry`] is created;
//! project-specific types come from a definition file.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod types;

pub use emugen_core::{builtins, converters};
pub use types::{
    LoadConfig, LoadError, LoadReport, ParseError, ParseErrorKind, Redefinition, TypeDescriptor, TypeId, TypeRegistry,
};
