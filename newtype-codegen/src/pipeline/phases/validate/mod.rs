//! Validate phase - runs lints on the manifest.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateAliasLint, EmptySurfaceLint, RecordEqualityLint, SiblingAliasesLint,
    UnsupportedOperatorLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the manifest using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateAliasLint),
                Box::new(EmptySurfaceLint),
                Box::new(UnsupportedOperatorLint),
                Box::new(SiblingAliasesLint),
                Box::new(RecordEqualityLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check manifest integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let start = ctx.diagnostics.len();
            lint.check(&ctx.manifest, &mut ctx.diagnostics);
            for diag in &mut ctx.diagnostics[start..] {
                diag.lint.get_or_insert(lint.name());
            }
        }

        // Warnings are allowed
        if ctx.has_errors() {
            for diag in ctx.diagnostics.iter().filter(|d| d.severity.is_error()) {
                tracing::error!(
                    lint = diag.lint.unwrap_or("-"),
                    location = diag.location.as_deref().unwrap_or("-"),
                    "{}",
                    diag.message
                );
            }
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
