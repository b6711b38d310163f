use std::path::{Path, PathBuf};

use newtype_core::{FileRules, GeneratedFile};
use newtype_model::TypeDescriptor;

use crate::synthesize;

/// The `.g.cs` file of one alias.
pub struct AliasFile<'a> {
    descriptor: &'a TypeDescriptor,
    rules: FileRules,
}

impl<'a> AliasFile<'a> {
    pub fn new(descriptor: &'a TypeDescriptor) -> Self {
        Self {
            descriptor,
            rules: FileRules::if_changed(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// File name relative to the output directory.
    pub fn file_name(&self) -> String {
        self.descriptor.hint_name()
    }
}

impl GeneratedFile for AliasFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        synthesize(self.descriptor)
    }
}
