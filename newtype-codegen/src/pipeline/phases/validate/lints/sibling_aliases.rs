//! Lint for aliases that share an underlying type.

use indexmap::IndexMap;
use newtype_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Reports groups of aliases over the same underlying type.
///
/// Sibling aliases each get only `Alias op Underlying`, never
/// `Underlying op Alias`, so that mixing them never produces an ambiguous call.
pub struct SiblingAliasesLint;

impl Lint for SiblingAliasesLint {
    fn name(&self) -> &'static str {
        "sibling-aliases"
    }

    fn description(&self) -> &'static str {
        "Report aliases that wrap the same underlying type"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
        for alias in &manifest.aliases {
            if let Some(found) = manifest.underlying(alias) {
                groups
                    .entry(found.underlying_type().full_name)
                    .or_default()
                    .push(alias.qualified_name());
            }
        }

        for (underlying, aliases) in groups.into_iter().filter(|(_, a)| a.len() > 1) {
            diagnostics.push(Diagnostic::info(
                "validate",
                format!(
                    "{} wrap '{}'; operators with the underlying type on the left are not generated",
                    aliases.join(", "),
                    underlying
                ),
            ));
        }
    }
}
