//! The type registry.
//!
//! A [`TypeRegistry`] maps type names to [`TypeDescriptor`]s. It is seeded with the builtin types when constructed,
//! may be extended from definition files or programmatically, and then answers lookups for the code generator.
//!
//! ## Notes
//!
//! - Lookup never fails: unregistered names resolve to the `UNKNOWN` descriptor.
//! - Ids come from a single counter shared by builtins and loaded types, and are never reused. Redefining a name
//!   allocates a new id and the new descriptor shadows the old one.
//! - Mutation takes `&mut self`, so loading has to finish before the registry is shared for lookups.
//!
//! ## Examples
//! ```rust
//! use emugen::types::{LoadConfig, TypeId, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry.load_from_str("GLenum 32 0x%08x\n", &LoadConfig::default()).unwrap();
//!
//! assert_eq!(registry.resolve("GLenum").id(), TypeId(6));
//! assert!(registry.resolve("GLsync").is_unknown());
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use emugen_core::builtins::{BUILTIN_TYPES, UNKNOWN_TYPE_NAME};
use emugen_core::converters::VarConverter;

use super::config::LoadConfig;
use super::descriptor::{TypeDescriptor, TypeId};
use super::error::{LoadError, ParseError, ParseErrorKind, Redefinition};
use super::parser;

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Ids allocated by the load, in file order.
    pub defined: Vec<TypeId>,
    /// Definitions that replaced an already known type.
    pub redefinitions: Vec<Redefinition>,
}

impl LoadReport {
    /// Append another report, e.g. when loading several files into one registry.
    pub fn merge(&mut self, other: LoadReport) {
        self.defined.extend(other.defined);
        self.redefinitions.extend(other.redefinitions);
    }
}

/// Name to descriptor mapping with an id counter.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDescriptor>,
    next_id: u32,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry holding the builtin types, with ids 0 through 5.
    pub fn new() -> Self {
        let mut registry = Self {
            types: HashMap::with_capacity(BUILTIN_TYPES.len()),
            next_id: 0,
        };
        for info in BUILTIN_TYPES {
            registry.insert(info.canonical, info.converter(), info.format);
        }
        registry
    }

    /// Resolve a type name, falling back to `UNKNOWN`.
    pub fn resolve(&self, name: &str) -> &TypeDescriptor {
        self.types
            .get(name)
            .or_else(|| self.types.get(UNKNOWN_TYPE_NAME))
            .expect("INVARIANT: UNKNOWN is installed at construction and never removed")
    }

    /// Look up a type name without the `UNKNOWN` fallback.
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of names currently resolvable (shadowed descriptors are not counted).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The id the next definition will receive.
    pub fn next_id(&self) -> TypeId {
        TypeId(self.next_id)
    }

    /// Descriptors reachable by name, ordered by id.
    pub fn descriptors(&self) -> Vec<&TypeDescriptor> {
        let mut all: Vec<&TypeDescriptor> = self.types.values().collect();
        all.sort_by_key(|d| d.id());
        all
    }

    /// Declare a type programmatically.
    ///
    /// Follows the same rules as a definition line: the width must have a converter, and an already known name is
    /// replaced (with a warning) under a new id.
    ///
    /// ## Errors
    /// - [`ParseErrorKind::MissingName`] / [`ParseErrorKind::MissingFormat`] for empty strings.
    /// - [`ParseErrorKind::ContainsWhitespace`] if either string could not be written as a single token.
    /// - [`ParseErrorKind::UnsupportedWidth`] if `width` is not 0, 8, 16 or 32.
    pub fn define(&mut self, name: &str, width: i64, format: &str) -> Result<TypeId, ParseErrorKind> {
        if name.is_empty() {
            return Err(ParseErrorKind::MissingName);
        }
        if format.is_empty() {
            return Err(ParseErrorKind::MissingFormat);
        }
        if let Some(token) = [name, format].into_iter().find(|t| t.chars().any(char::is_whitespace)) {
            return Err(ParseErrorKind::ContainsWhitespace(token.to_string()));
        }
        let converter = parser::converter_for(width)?;
        let (id, _) = self.declare(name, converter, format, None, true);
        Ok(id)
    }

    /// Load definitions from a file with the default [`LoadConfig`].
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        self.load_from_file_with(path, &LoadConfig::default())
    }

    /// Load definitions from a file.
    ///
    /// ## Errors
    /// - [`LoadError::Open`] if the file cannot be opened; the registry is untouched.
    /// - [`LoadError::Read`] / [`LoadError::Parse`] abort at the failing line. Definitions from earlier lines stay
    ///   registered.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_from_file_with(&mut self, path: impl AsRef<Path>, config: &LoadConfig) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            tracing::error!(error = %source, "cannot open type definitions");
            LoadError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.load_from_reader(BufReader::new(file), config)
    }

    /// Load definitions from in-memory text.
    pub fn load_from_str(&mut self, source: &str, config: &LoadConfig) -> Result<LoadReport, LoadError> {
        self.load_from_reader(source.as_bytes(), config)
    }

    /// Load definitions from any buffered reader, one line at a time.
    #[tracing::instrument(skip_all)]
    pub fn load_from_reader<R: BufRead>(&mut self, mut reader: R, config: &LoadConfig) -> Result<LoadReport, LoadError> {
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            line_no += 1;
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| LoadError::Read { line: line_no, source })?;
            if read == 0 {
                break;
            }
            // Comments may carry any encoding; only definitions must be UTF-8.
            if parser::is_skippable_bytes(&buf) {
                continue;
            }
            let line = std::str::from_utf8(&buf).map_err(|err| LoadError::Read {
                line: line_no,
                source: io::Error::new(io::ErrorKind::InvalidData, err),
            })?;

            let parsed = parser::parse_line(line, config).map_err(|kind| ParseError { line: line_no, kind })?;
            let Some(def) = parsed else {
                continue;
            };

            let (id, redefinition) =
                self.declare(def.name, def.converter, def.format, Some(line_no), config.warn_on_redefinition);
            tracing::debug!(name = def.name, id = %id, width = def.width, format = def.format, "defined type");
            report.defined.push(id);
            report.redefinitions.extend(redefinition);
        }

        tracing::debug!(
            defined = report.defined.len(),
            redefined = report.redefinitions.len(),
            "loaded type definitions"
        );
        Ok(report)
    }

    /// Insert a definition, noting whether it replaces a known (non-`UNKNOWN`) type.
    fn declare(
        &mut self,
        name: &str,
        converter: &'static VarConverter,
        format: &str,
        line: Option<usize>,
        warn: bool,
    ) -> (TypeId, Option<Redefinition>) {
        let previous = self
            .types
            .get(name)
            .map(TypeDescriptor::id)
            .filter(|id| *id != TypeId::UNKNOWN);
        let id = self.insert(name, converter, format);

        let redefinition = previous.map(|previous| Redefinition {
            name: name.to_string(),
            line,
            previous,
            replacement: id,
        });
        if let Some(redefinition) = redefinition.as_ref().filter(|_| warn) {
            tracing::warn!(
                name = %redefinition.name,
                line = redefinition.line.map(|line| line as u64),
                previous = %redefinition.previous,
                replacement = %redefinition.replacement,
                "type is already known, the new definition is taken"
            );
        }
        (id, redefinition)
    }

    fn insert(&mut self, name: &str, converter: &'static VarConverter, format: &str) -> TypeId {
        let id = TypeId(self.next_id);
        self.next_id += 1;
        let descriptor = TypeDescriptor::new(id, name, converter, format);
        self.types.insert(name.to_string(), descriptor);
        id
    }
}
