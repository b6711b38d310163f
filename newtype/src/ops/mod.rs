//! Core operations.
//!
//! This module contains the business logic for newtype commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod explain;
pub mod generate;

pub use check::check;
pub use clean::clean;
pub use explain::explain;
pub use generate::generate;

use newtype_codegen::pipeline::{Diagnostic, Severity};

/// Diagnostic message tagged with its lint, location on a second line.
fn describe(diag: &Diagnostic) -> String {
    let message = match diag.lint {
        Some(lint) => format!("{} [{lint}]", diag.message),
        None => diag.message.clone(),
    };
    match &diag.location {
        Some(loc) => format!("{message}\n  --> {loc}"),
        None => message,
    }
}

/// Warning messages, in the order they were reported.
fn warnings(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(describe)
        .collect()
}
