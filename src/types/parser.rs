//! Definition file line parser.
//!
//! A definition file is line oriented:
//!
//! ```text
//! # comment lines start with '#'
//! GLenum      32  0x%08x
//! GLboolean   8   %d
//! ```
//!
//! Each non-blank, non-comment line holds a name, a bit width and a printf token separated by runs of whitespace.
//! Tokens after the third are ignored. This module only turns one line into a [`TypeDefinition`]; the registry owns
//! line numbering and insertion.

use emugen_core::converters::{self, VarConverter};

use super::config::LoadConfig;
use super::error::ParseErrorKind;

/// A parsed definition line, borrowing from the line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition<'a> {
    pub name: &'a str,
    pub width: i64,
    pub converter: &'static VarConverter,
    pub format: &'a str,
}

/// Check whether a line carries no definition (blank or `#` comment).
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Byte-level [`is_skippable`], for lines that have not been decoded yet.
pub fn is_skippable_bytes(line: &[u8]) -> bool {
    let trimmed = line.trim_ascii();
    trimmed.is_empty() || trimmed.starts_with(b"#")
}

/// Parse one line of a definition file.
///
/// ## Returns
/// - `Ok(None)` for blank and comment lines.
/// - `Ok(Some(def))` for a well-formed definition.
/// - `Err(kind)` if a field is missing or the width has no converter.
pub fn parse_line<'a>(line: &'a str, config: &LoadConfig) -> Result<Option<TypeDefinition<'a>>, ParseErrorKind> {
    if is_skippable(line) {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let name = tokens.next().ok_or(ParseErrorKind::MissingName)?;
    let width_token = tokens.next().ok_or(ParseErrorKind::MissingWidth)?;
    let format = tokens.next().ok_or(ParseErrorKind::MissingFormat)?;

    let width = parse_width(width_token, config.lenient_width)?;
    let converter = converter_for(width)?;

    Ok(Some(TypeDefinition {
        name,
        width,
        converter,
        format,
    }))
}

/// Look up the converter for a width, reporting unsupported widths.
pub fn converter_for(width: i64) -> Result<&'static VarConverter, ParseErrorKind> {
    converters::for_width(width).ok_or(ParseErrorKind::UnsupportedWidth(width))
}

/// Parse a width token.
///
/// Strict mode requires the whole token to be a decimal integer. Lenient mode reads an optional sign and the leading
/// digits and ignores the rest, so `"abc"` is 0 and `"16bit"` is 16.
pub fn parse_width(token: &str, lenient: bool) -> Result<i64, ParseErrorKind> {
    if lenient {
        return Ok(leading_integer(token));
    }
    token
        .parse::<i64>()
        .map_err(|_| ParseErrorKind::InvalidWidth(token.to_string()))
}

fn leading_integer(token: &str) -> i64 {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    if negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> LoadConfig {
        LoadConfig::default()
    }

    fn lenient() -> LoadConfig {
        LoadConfig::default().with_lenient_width(true)
    }

    #[test]
    fn test_well_formed_line() {
        let def = parse_line("vec3 32 %f\n", &strict()).unwrap().unwrap();
        assert_eq!(def.name, "vec3");
        assert_eq!(def.width, 32);
        assert_eq!(def.converter.bits(), 32);
        assert_eq!(def.format, "%f");
    }

    #[test]
    fn test_whitespace_runs_and_tabs() {
        let def = parse_line("  GLenum \t\t 32    0x%08x  \r\n", &strict()).unwrap().unwrap();
        assert_eq!(def.name, "GLenum");
        assert_eq!(def.format, "0x%08x");
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let def = parse_line("GLint 32 %d trailing words", &strict()).unwrap().unwrap();
        assert_eq!(def.format, "%d");
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert_eq!(parse_line("", &strict()), Ok(None));
        assert_eq!(parse_line("   \t\n", &strict()), Ok(None));
        assert_eq!(parse_line("# comment", &strict()), Ok(None));
        assert_eq!(parse_line("    # indented comment 7 %d", &strict()), Ok(None));
    }

    #[test]
    fn test_skippable_bytes_ignore_encoding() {
        assert!(is_skippable_bytes(b"  # (c) 2011 \xa9 Android\r\n"));
        assert!(is_skippable_bytes(b" \t\n"));
        assert!(!is_skippable_bytes(b"GL\xa9 8 %c\n"));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(parse_line("GLint", &strict()), Err(ParseErrorKind::MissingWidth));
        assert_eq!(parse_line("GLint 32", &strict()), Err(ParseErrorKind::MissingFormat));
    }

    #[test]
    fn test_unsupported_width() {
        assert_eq!(
            parse_line("bad 7 %d", &strict()),
            Err(ParseErrorKind::UnsupportedWidth(7))
        );
        assert_eq!(
            parse_line("bad -8 %d", &strict()),
            Err(ParseErrorKind::UnsupportedWidth(-8))
        );
    }

    #[test]
    fn test_non_numeric_width_is_rejected_by_default() {
        assert_eq!(
            parse_line("GLfoo wide %d", &strict()),
            Err(ParseErrorKind::InvalidWidth("wide".to_string()))
        );
    }

    #[test]
    fn test_lenient_width_matches_atoi() {
        assert_eq!(parse_width("wide", true), Ok(0));
        assert_eq!(parse_width("16bit", true), Ok(16));
        assert_eq!(parse_width("-8", true), Ok(-8));
        assert_eq!(parse_width("+32", true), Ok(32));
        assert_eq!(parse_width("99999999999999999999999", true), Ok(i64::MAX));

        let def = parse_line("GLfoo wide %d", &lenient()).unwrap().unwrap();
        assert_eq!(def.width, 0);
        assert_eq!(def.converter.bits(), 0);
    }

    #[test]
    fn test_long_line_is_not_truncated() {
        let name = "T".repeat(5000);
        let line = format!("{name} 8 %c");
        let def = parse_line(&line, &strict()).unwrap().unwrap();
        assert_eq!(def.name.len(), 5000);
        assert_eq!(def.format, "%c");
    }
}
