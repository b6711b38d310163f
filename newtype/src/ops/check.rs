//! Check operation - manifest validation.

use std::path::Path;

use newtype_codegen::pipeline::{CompilationContext, Phase, Severity, phases::ValidatePhase};
use newtype_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs only the validate phase, so every diagnostic is reported even when
/// there are errors.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let mut ctx = CompilationContext::new(manifest.clone());
    if let Err(e) = ValidatePhase::new().run(&mut ctx) {
        tracing::debug!(error = %e, "validation failed");
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = super::describe(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        alias_count: manifest.aliases.len(),
        type_count: manifest.types.len(),
        errors,
        warnings,
        infos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_collects_every_severity() {
        let manifest: Manifest = r#"
            [types.Blob]

            [[aliases]]
            name = "Id"
            underlying = "int"

            [[aliases]]
            name = "Id"
            underlying = "int"

            [[aliases]]
            name = "Handle"
            underlying = "Blob"
            record = true
        "#
        .parse()
        .unwrap();

        let report = check(&manifest, Path::new("newtype.toml"));

        assert!(!report.is_valid());
        assert_eq!(report.alias_count, 3);
        assert_eq!(report.type_count, 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("[duplicate-alias]\n  --> aliases.Id"));
        assert_eq!(report.warnings.len(), 1);
        assert!(!report.infos.is_empty());
    }

    #[test]
    fn test_check_valid_manifest() {
        let manifest: Manifest = r#"
            [[aliases]]
            name = "UserId"
            underlying = "int"
        "#
        .parse()
        .unwrap();

        let report = check(&manifest, Path::new("newtype.toml"));
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }
}
