//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - runs lints over the manifest and collects diagnostics
//! - [`ExtractPhase`] - builds one immutable descriptor per alias

mod extract;
mod validate;

pub use extract::ExtractPhase;
pub use validate::{
    DuplicateAliasLint, EmptySurfaceLint, Lint, LintInfo, RecordEqualityLint, SiblingAliasesLint,
    UnsupportedOperatorLint, ValidatePhase,
};
