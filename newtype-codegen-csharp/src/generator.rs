use std::{collections::HashSet, fs, path::Path};

use eyre::{Result, WrapErr};
use newtype_codegen::{
    CleanResult, DescriptorCache, GenerateResult, LanguageCodegen, PreviewFile,
    pipeline::CompilationContext,
};
use newtype_core::{FileRules, GeneratedFile, WriteResult};
use newtype_model::TypeDescriptor;

use crate::{AUTO_GENERATED_MARKER, files::AliasFile};

/// C# code generator producing one `.g.cs` file per alias.
///
/// Generation is incremental: descriptors equal to the ones recorded in the
/// output directory's cache are not rendered again, unless forced.
pub struct Generator {
    descriptors: Vec<TypeDescriptor>,
    force: bool,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "g.cs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.descriptors
            .iter()
            .map(|d| {
                let file = AliasFile::new(d);
                PreviewFile {
                    path: file.file_name(),
                    content: file.render(),
                }
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }

    fn clean(&self, output_dir: &Path) -> Result<CleanResult> {
        self.clean_files(output_dir, false)
    }

    fn preview_clean(&self, output_dir: &Path) -> Result<CleanResult> {
        self.clean_files(output_dir, true)
    }
}

impl Generator {
    pub fn new(descriptors: Vec<TypeDescriptor>) -> Self {
        Self {
            descriptors,
            force: false,
        }
    }

    /// Build a generator from a pipeline run.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        Ok(Self::new(ctx.take_descriptors()?))
    }

    /// Ignore the descriptor cache and rewrite every alias file.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut cache = if self.force {
            DescriptorCache::new()
        } else {
            DescriptorCache::load(output_dir)
        };
        let rules = if self.force {
            FileRules::always()
        } else {
            FileRules::if_changed()
        };
        let mut result = GenerateResult::default();

        for descriptor in &self.descriptors {
            let file = AliasFile::new(descriptor).with_rules(rules);
            let name = file.file_name();

            // A deleted output file is regenerated even when the descriptor is cached
            if !cache.is_stale(descriptor) && file.path(output_dir).exists() {
                result.skipped.push(name);
                continue;
            }

            match file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write {name}"))?
            {
                WriteResult::Written => result.written.push(name),
                WriteResult::Unchanged => result.unchanged.push(name),
            }
            cache.update(descriptor);
        }

        cache.retain_aliases(self.descriptors.iter().map(|d| d.type_display_string.as_str()));
        cache.save(output_dir)?;

        tracing::info!(
            written = result.written.len(),
            unchanged = result.unchanged.len(),
            skipped = result.skipped.len(),
            "generated C# aliases"
        );
        Ok(result)
    }

    /// Find `.g.cs` files in `output_dir` that no alias produces anymore.
    ///
    /// Only files starting with the auto-generated marker are deleted; any
    /// other match is reported as skipped.
    fn clean_files(&self, output_dir: &Path, dry_run: bool) -> Result<CleanResult> {
        let mut result = CleanResult::default();
        if !output_dir.is_dir() {
            return Ok(result);
        }

        let expected: HashSet<String> = self.descriptors.iter().map(|d| d.hint_name()).collect();
        let extension = format!(".{}", self.file_extension());

        let mut orphans = Vec::new();
        for entry in fs::read_dir(output_dir)
            .wrap_err_with(|| format!("failed to read {}", output_dir.display()))?
        {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if path.is_file() && name.ends_with(&extension) && !expected.contains(name) {
                orphans.push((name.to_string(), path.clone()));
            }
        }
        orphans.sort();

        for (name, path) in orphans {
            let generated = fs::read_to_string(&path)
                .is_ok_and(|content| content.starts_with(AUTO_GENERATED_MARKER));
            if !generated {
                result.skipped.push(name);
                continue;
            }
            if !dry_run {
                fs::remove_file(&path).wrap_err_with(|| format!("failed to delete {name}"))?;
                tracing::debug!(file = %name, "deleted orphaned file");
            }
            result.deleted.push(name);
        }

        Ok(result)
    }
}
