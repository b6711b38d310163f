//! Lint for aliases declared twice.

use std::collections::{HashMap, HashSet};

use newtype_core::hint_name;
use newtype_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that detects two aliases with the same qualified name, or two aliases
/// whose generated files would share a name.
///
/// `Shop.Price` and a global `Shop_Price` are different types but both map to
/// `Shop_Price.g.cs`. File names are compared ignoring case, since the output
/// directory may live on a case-insensitive file system.
pub struct DuplicateAliasLint;

impl Lint for DuplicateAliasLint {
    fn name(&self) -> &'static str {
        "duplicate-alias"
    }

    fn description(&self) -> &'static str {
        "Detect aliases declared more than once or sharing a generated file"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut files: HashMap<String, String> = HashMap::new();

        for alias in &manifest.aliases {
            let qualified = alias.qualified_name();
            if !seen.insert(qualified.clone()) {
                if reported.insert(qualified.clone()) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!("alias '{}' is declared more than once", qualified),
                        )
                        .at(format!("aliases.{}", qualified)),
                    );
                }
                continue;
            }

            let file = hint_name(&qualified);
            match files.get(&file.to_lowercase()) {
                Some(first) => diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "alias '{}' generates {}, which alias '{}' already generates",
                            qualified, file, first
                        ),
                    )
                    .at(format!("aliases.{}", qualified)),
                ),
                None => {
                    files.insert(file.to_lowercase(), qualified);
                }
            }
        }
    }
}
