//! Clean operation - remove orphaned generated files.

use std::path::Path;

use eyre::{Context, Result};
use newtype_codegen::pipeline::Pipeline;
use newtype_codegen_csharp::{Generator, LanguageCodegen};
use newtype_manifest::Manifest;

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Output directory containing generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes generated files whose alias is no longer in the manifest.
pub fn clean(manifest: &Manifest, opts: CleanOptions) -> Result<CleanReport> {
    let ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Pipeline failed")?;
    let warnings = super::warnings(&ctx.diagnostics);

    let generator = Generator::from_context(ctx)?;
    let result = if opts.dry_run {
        generator
            .preview_clean(opts.output_dir)
            .wrap_err("Failed to preview clean")?
    } else {
        generator
            .clean(opts.output_dir)
            .wrap_err("Failed to clean orphaned files")?
    };

    Ok(CleanReport {
        dry_run: opts.dry_run,
        warnings,
        deleted: result.deleted,
        skipped: result.skipped,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_clean_dry_run_keeps_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Gone.g.cs"), "// <auto-generated/>\n").unwrap();
        let manifest: Manifest = r#"
            [[aliases]]
            name = "UserId"
            underlying = "int"
        "#
        .parse()
        .unwrap();

        let report = clean(
            &manifest,
            CleanOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.deleted, ["Gone.g.cs"]);
        assert!(dir.path().join("Gone.g.cs").exists());
    }
}
