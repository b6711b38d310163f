//! Clean command report data structures.

use super::output::{Output, Report};

/// Report data from cleaning orphaned files.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Warning messages from pipeline.
    pub warnings: Vec<String>,
    /// Deleted (or would-be deleted) generated files.
    pub deleted: Vec<String>,
    /// `.g.cs` files without the auto-generated marker.
    pub skipped: Vec<String>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.deleted.is_empty() && self.skipped.is_empty() {
            out.preformatted("No orphaned files found.");
            return;
        }

        if !self.deleted.is_empty() {
            if self.dry_run {
                out.section("Would delete");
            } else {
                out.section("Deleted");
            }
            for path in &self.deleted {
                out.removed_item(path);
            }
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Skipped (not generated by newtype)");
            for path in &self.skipped {
                out.list_item(&format!("! {}", path));
            }
        }
    }
}
