//! Lint for underlying types that have nothing to forward.

use std::collections::HashSet;

use newtype_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when an alias wraps a declared type with no members.
///
/// The alias still gets a constructor, conversions and `Value`, but nothing
/// else. Usually the `[types]` entry was left incomplete.
pub struct EmptySurfaceLint;

impl Lint for EmptySurfaceLint {
    fn name(&self) -> &'static str {
        "empty-surface"
    }

    fn description(&self) -> &'static str {
        "Warn about underlying types with no declared members"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut reported = HashSet::new();

        for alias in &manifest.aliases {
            let Some(found) = manifest.underlying(alias) else {
                continue;
            };
            let surface = found.surface;
            if !surface.members.is_empty() || surface.primitive_kind(found.key).is_some() {
                continue;
            }
            if reported.insert(found.key) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "type '{}' declares no members; aliases of it only get the minimum surface",
                            found.key
                        ),
                    )
                    .at(format!("types.{}", found.key)),
                );
            }
        }
    }
}
