//! Explain operation - pipeline explanation.

use std::path::Path;

use eyre::{Context, Result, bail};
use newtype_codegen::pipeline::{Pipeline, phases::ValidatePhase};
use newtype_manifest::Manifest;

use crate::reports::{AliasSummary, ExplainReport, LintInfo, PhaseInfo};

/// Execute the explain operation.
///
/// Runs the pipeline and returns what each phase and lint does, together
/// with the descriptors it produced. `alias` narrows the descriptors to one
/// alias, matched by plain or qualified name.
pub fn explain(
    manifest: &Manifest,
    config_path: &Path,
    alias: Option<&str>,
) -> Result<ExplainReport> {
    if let Some(name) = alias {
        if manifest.alias(name).is_none() {
            bail!("no alias named '{name}' in {}", config_path.display());
        }
    }

    let pipeline = Pipeline::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = ValidatePhase::new()
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let mut ctx = pipeline.run(manifest.clone()).wrap_err("Pipeline failed")?;
    let descriptors: Vec<_> = ctx
        .take_descriptors()?
        .into_iter()
        .filter(|d| alias.is_none_or(|name| d.type_name == name || d.type_display_string == name))
        .collect();

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        type_count: manifest.types.len(),
        phases,
        lints,
        aliases: descriptors.iter().map(AliasSummary::from_descriptor).collect(),
        descriptors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
        [[aliases]]
        name = "UserId"
        namespace = "App"
        underlying = "int"

        [[aliases]]
        name = "Email"
        namespace = "App"
        underlying = "string"
        carrier = "class"
    "#;

    #[test]
    fn test_explain_lists_phases_and_lints() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let report = explain(&manifest, Path::new("newtype.toml"), None).unwrap();

        let phases: Vec<_> = report.phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(phases, ["validate", "extract"]);
        assert_eq!(report.lints.len(), 5);
        assert_eq!(report.aliases.len(), 2);
        assert_eq!(report.descriptors.len(), 2);
    }

    #[test]
    fn test_explain_single_alias() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let report = explain(&manifest, Path::new("newtype.toml"), Some("App.Email")).unwrap();

        assert_eq!(report.aliases.len(), 1);
        assert_eq!(report.aliases[0].carrier, "class");
        assert_eq!(report.descriptors[0].type_name, "Email");
    }

    #[test]
    fn test_explain_unknown_alias() {
        let manifest: Manifest = MANIFEST.parse().unwrap();
        let err = explain(&manifest, Path::new("newtype.toml"), Some("Missing")).unwrap_err();
        assert!(err.to_string().contains("no alias named 'Missing'"));
    }
}
