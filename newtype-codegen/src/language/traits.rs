use std::path::Path;

use eyre::Result;

/// A back end that renders alias descriptors into source files.
pub trait LanguageCodegen {
    fn language(&self) -> &'static str;

    /// Suffix of every generated file, without the leading dot (`g.cs`).
    fn file_extension(&self) -> &'static str;

    /// Render every alias in memory; nothing touches the disk.
    fn preview(&self) -> Vec<PreviewFile>;

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// Delete generated files in `output_dir` that no alias produces anymore.
    fn clean(&self, _output_dir: &Path) -> Result<CleanResult> {
        Ok(CleanResult::default())
    }

    /// What [`clean`](Self::clean) would delete.
    fn preview_clean(&self, _output_dir: &Path) -> Result<CleanResult> {
        Ok(CleanResult::default())
    }
}

/// File names touched by [`LanguageCodegen::generate`], by outcome.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub written: Vec<String>,
    /// Rendered again, but identical to what was on disk.
    pub unchanged: Vec<String>,
    /// Not rendered at all: the cached descriptor still matched.
    pub skipped: Vec<String>,
}

impl GenerateResult {
    pub fn total(&self) -> usize {
        self.written.len() + self.unchanged.len() + self.skipped.len()
    }
}

#[derive(Debug, Default)]
pub struct CleanResult {
    pub deleted: Vec<String>,
    /// Orphans without the auto-generated marker, left in place.
    pub skipped: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    pub content: String,
}
