//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use miette::Report;
use serde_json::{Value, json};

use crate::types::{LoadConfig, LoadError, LoadReport, TypeDescriptor, TypeRegistry};

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Registry setup (shared by all commands)
// ============================================================================

/// Build a registry from the builtins plus each definition file, in order.
///
/// Returns one report per file so callers can attribute warnings.
fn load_registry(files: &[PathBuf], config: &LoadConfig) -> CliResult<(TypeRegistry, Vec<LoadReport>)> {
    let mut registry = TypeRegistry::new();
    let mut reports = Vec::with_capacity(files.len());
    for file in files {
        let report = registry
            .load_from_file_with(file, config)
            .map_err(|e| CliError::failure(render_load_error(file, e)))?;
        reports.push(report);
    }
    Ok((registry, reports))
}

/// Render a load failure with its diagnostic code, cause chain and help.
pub fn render_load_error(file: &Path, err: LoadError) -> String {
    let report = Report::new(err).wrap_err(format!("failed to load `{}`", file.display()));
    format!("{report:?}")
}

// ============================================================================
// check
// ============================================================================

/// Load definition files and summarize them.
///
/// Redefinitions are printed from the load reports, so the registry is told not to log them as well.
pub fn check_files(files: &[PathBuf], config: &LoadConfig) -> CliResult<ExitCode> {
    let load_config = config.clone().with_warn_on_redefinition(false);
    let (registry, reports) = load_registry(files, &load_config)?;

    for warning in render_check_warnings(files, &reports, config.warn_on_redefinition) {
        eprintln!("{warning}");
    }
    print!("{}", render_check_summary(files, &reports, &registry));
    Ok(ExitCode::SUCCESS)
}

/// One `warning:` line per redefinition, or nothing when redefinitions are silenced.
pub fn render_check_warnings(files: &[PathBuf], reports: &[LoadReport], show: bool) -> Vec<String> {
    if !show {
        return Vec::new();
    }
    files
        .iter()
        .zip(reports)
        .flat_map(|(file, report)| {
            report
                .redefinitions
                .iter()
                .map(move |redefinition| format!("warning: {}: {}", file.display(), redefinition))
        })
        .collect()
}

/// Per-file definition counts followed by the registry size.
pub fn render_check_summary(files: &[PathBuf], reports: &[LoadReport], registry: &TypeRegistry) -> String {
    let mut out = String::new();
    for (file, report) in files.iter().zip(reports) {
        let _ = writeln!(out, "{}: {} type(s) defined", file.display(), report.defined.len());
    }
    let _ = writeln!(out, "{} type name(s) resolvable", registry.len());
    out
}

// ============================================================================
// resolve
// ============================================================================

/// Print what each name resolves to.
pub fn resolve_names(files: &[PathBuf], names: &[String], config: &LoadConfig) -> CliResult<ExitCode> {
    let (registry, _) = load_registry(files, config)?;
    for name in names {
        println!("{}", render_resolution(name, registry.resolve(name)));
    }
    Ok(ExitCode::SUCCESS)
}

/// One line describing a lookup, marking names that fell back to `UNKNOWN`.
pub fn render_resolution(name: &str, descriptor: &TypeDescriptor) -> String {
    if descriptor.name() == name {
        format!("{name} -> {descriptor}")
    } else {
        format!("{name} -> {descriptor} [fallback]")
    }
}

// ============================================================================
// list
// ============================================================================

/// Print every reachable descriptor in id order.
pub fn list_types(files: &[PathBuf], json: bool, config: &LoadConfig) -> CliResult<ExitCode> {
    let (registry, _) = load_registry(files, config)?;
    if json {
        let rendered = serde_json::to_string_pretty(&render_json(&registry))
            .map_err(|e| CliError::failure(format!("Error serializing registry: {}", e)))?;
        println!("{rendered}");
    } else {
        print!("{}", render_table(&registry));
    }
    Ok(ExitCode::SUCCESS)
}

/// Aligned text table of the registry.
pub fn render_table(registry: &TypeRegistry) -> String {
    let rows = registry.descriptors();
    let name_width = rows.iter().map(|d| d.name().len()).max().unwrap_or(0).max("NAME".len());

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{:<4}{:<name_width$}  {:>5}  {}", "ID", "NAME", "WIDTH", "FORMAT");
    for d in rows {
        let _ = writeln!(
            out,
            "{:<4}{:<name_width$}  {:>5}  {}",
            d.id().index(),
            d.name(),
            d.width(),
            d.format()
        );
    }
    out
}

/// JSON document of the registry, for tooling.
pub fn render_json(registry: &TypeRegistry) -> Value {
    let types: Vec<Value> = registry
        .descriptors()
        .into_iter()
        .map(|d| {
            json!({
                "id": d.id().index(),
                "name": d.name(),
                "width": d.width(),
                "size_bytes": d.size_bytes(),
                "converter": d.converter().name(),
                "format": d.format(),
            })
        })
        .collect();
    json!({
        "next_id": registry.next_id().index(),
        "types": types,
    })
}
