use std::path::PathBuf;

use super::output::{Output, Report};

/// Findings from running the lints over a manifest.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub alias_count: usize,
    /// Types described under `[types]`.
    pub type_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        self.errors.iter().for_each(|e| out.error(e));
        self.warnings.iter().for_each(|w| out.warning(w));

        if !self.infos.is_empty() {
            out.section("Notes");
            self.infos.iter().for_each(|i| out.list_item(i));
        }

        if !(self.errors.is_empty() && self.warnings.is_empty() && self.infos.is_empty()) {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.key_value_indented("Aliases", &self.alias_count.to_string());
            out.key_value_indented("Declared types", &self.type_count.to_string());
        } else {
            out.preformatted(&format!(
                "✗ {} has {} error(s)",
                self.config_path.display(),
                self.errors.len()
            ));
        }
    }
}
