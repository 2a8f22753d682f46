//! Errors and warnings produced while loading type definitions.
//!
//! Loading can fail in three distinct ways (the file cannot be opened, it cannot be read, or a line is malformed).
//! A redefinition is not an error: it is reported as a [`Redefinition`] and the new definition wins.

use std::fmt;
use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use super::TypeId;

/// What is wrong with a single definition line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("missing type name")]
    MissingName,

    #[error("missing type width")]
    MissingWidth,

    #[error("missing print-string")]
    MissingFormat,

    #[error("type width `{0}` is not a number")]
    InvalidWidth(String),

    #[error("unknown var width: {0}")]
    UnsupportedWidth(i64),

    #[error("`{0}` contains whitespace")]
    ContainsWhitespace(String),
}

/// A malformed definition line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("line {line}: {kind}")]
#[diagnostic(
    code(emugen::types::parse),
    help("each definition is `<name> <width> <printFormat>` and width is one of 0, 8, 16, 32")
)]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Failure to load a definition file.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("cannot open type definitions `{}`", .path.display())]
    #[diagnostic(code(emugen::types::open))]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read type definitions at line {line}")]
    #[diagnostic(code(emugen::types::read))]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl LoadError {
    /// `true` for malformed content, `false` for I/O failures.
    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse(_))
    }

    /// The line the failure happened on, if it happened while reading.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Open { .. } => None,
            LoadError::Read { line, .. } => Some(*line),
            LoadError::Parse(err) => Some(err.line),
        }
    }
}

/// A type name that was defined again while already known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redefinition {
    pub name: String,
    /// Definition line, `None` for programmatic definitions.
    pub line: Option<usize>,
    /// Id of the descriptor that is no longer reachable by name.
    pub previous: TypeId,
    pub replacement: TypeId,
}

impl fmt::Display for Redefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type `{}` is already known (id {})", self.name, self.previous)?;
        match self.line {
            Some(line) => write!(f, ", definition in line {line} is taken"),
            None => write!(f, ", new definition is taken"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_names_line_and_reason() {
        let err = ParseError {
            line: 4,
            kind: ParseErrorKind::UnsupportedWidth(7),
        };
        assert_eq!(err.to_string(), "line 4: unknown var width: 7");
    }

    #[test]
    fn test_load_error_classification() {
        let open = LoadError::Open {
            path: PathBuf::from("types.in"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(!open.is_parse());
        assert_eq!(open.line(), None);
        assert_eq!(open.to_string(), "cannot open type definitions `types.in`");

        let parse = LoadError::from(ParseError {
            line: 2,
            kind: ParseErrorKind::MissingFormat,
        });
        assert!(parse.is_parse());
        assert_eq!(parse.line(), Some(2));
        assert_eq!(parse.to_string(), "line 2: missing print-string");
    }

    #[test]
    fn test_diagnostic_codes() {
        let parse = LoadError::from(ParseError {
            line: 1,
            kind: ParseErrorKind::MissingName,
        });
        let code = parse.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("emugen::types::parse"));
        assert!(parse.help().is_some());
    }

    #[test]
    fn test_redefinition_display() {
        let warning = Redefinition {
            name: "int".to_string(),
            line: Some(3),
            previous: TypeId(3),
            replacement: TypeId(6),
        };
        assert_eq!(
            warning.to_string(),
            "type `int` is already known (id 3), definition in line 3 is taken"
        );
    }
}
