//! Generate operation - C# wrappers from the manifest.

use std::path::Path;

use eyre::{Context, Result};
use newtype_codegen::{
    cache::STATE_DIR,
    pipeline::{Pipeline, SnapshotPlugin},
};
use newtype_codegen_csharp::{Generator, LanguageCodegen};
use newtype_manifest::Manifest;

use crate::reports::{
    AliasSummary, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the `.g.cs` files are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to ignore the descriptor cache and rewrite every file.
    pub force: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the manifest and renders one file per alias.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = opts.output_dir.join(STATE_DIR).join("debug");

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let ctx = pipeline.run(manifest.clone()).wrap_err("Pipeline failed")?;

    let warnings = super::warnings(&ctx.diagnostics);

    let generator = Generator::from_context(ctx)?.force(opts.force);
    tracing::info!(
        language = generator.language(),
        aliases = generator.descriptors().len(),
        dry_run = opts.dry_run,
        "rendering aliases"
    );
    let aliases = generator
        .descriptors()
        .iter()
        .map(AliasSummary::from_descriptor)
        .collect();

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let gen_result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: gen_result.written,
            unchanged: gen_result.unchanged,
            skipped: gen_result.skipped,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        warnings,
        aliases,
        result,
    })
}
