use eyre::{Result, eyre};
use newtype_manifest::Manifest;
use newtype_model::TypeDescriptor;

use super::diagnostic::Diagnostic;

/// State threaded through the phases of one pipeline run.
#[derive(Debug)]
pub struct CompilationContext {
    pub manifest: Manifest,
    /// One descriptor per alias in declaration order, set by the extract phase.
    pub descriptors: Option<Vec<TypeDescriptor>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            descriptors: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Move the extracted descriptors out, leaving `None` behind.
    pub fn take_descriptors(&mut self) -> Result<Vec<TypeDescriptor>> {
        self.descriptors
            .take()
            .ok_or_else(|| eyre!("descriptors not set, did the extract phase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> CompilationContext {
        let manifest = r#"
            [[aliases]]
            name = "UserId"
            underlying = "int"
        "#
        .parse()
        .expect("Failed to parse test manifest");
        CompilationContext::new(manifest)
    }

    #[test]
    fn test_counts_by_severity() {
        let mut ctx = context();
        assert!(!ctx.has_errors());

        ctx.diagnostics.push(Diagnostic::warning("validate", "empty surface"));
        ctx.diagnostics.push(Diagnostic::info("validate", "siblings"));
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());

        ctx.diagnostics.push(Diagnostic::error("validate", "duplicate alias"));
        assert!(ctx.has_errors());
        assert_eq!(ctx.error_count(), 1);
    }

    #[test]
    fn test_take_descriptors_before_extract() {
        let mut ctx = context();
        assert!(ctx.take_descriptors().is_err());

        ctx.descriptors = Some(Vec::new());
        assert!(ctx.take_descriptors().unwrap().is_empty());
        assert!(ctx.descriptors.is_none());
    }
}
