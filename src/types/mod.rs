//! Type-name registry for the code generator.
//!
//! Resolves a textual type name (`int`, `GLenum`, ...) to a [`TypeDescriptor`] carrying a unique id, the converter
//! strategy for its bit width, and the printf token used in generated trace code.
//!
//! ## Modules
//!
//! - `registry` - the [`TypeRegistry`] and its load/resolve operations
//! - `parser` - definition file line parser
//! - `descriptor` - [`TypeDescriptor`] and [`TypeId`]
//! - `config` - [`LoadConfig`]
//! - `error` - [`LoadError`], [`ParseError`] and [`Redefinition`] warnings

pub mod config;
pub mod descriptor;
pub mod error;
pub mod parser;
pub mod registry;

pub use config::LoadConfig;
pub use descriptor::{TypeDescriptor, TypeId};
pub use error::{LoadError, ParseError, ParseErrorKind, Redefinition};
pub use parser::TypeDefinition;
pub use registry::{LoadReport, TypeRegistry};
