//! Lint for record carriers.

use newtype_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Notes that record aliases keep the compiler's equality members.
pub struct RecordEqualityLint;

impl Lint for RecordEqualityLint {
    fn name(&self) -> &'static str {
        "record-equality"
    }

    fn description(&self) -> &'static str {
        "Note that record aliases keep compiler-synthesized equality"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for alias in manifest.aliases.iter().filter(|a| a.record) {
            let qualified = alias.qualified_name();
            diagnostics.push(
                Diagnostic::info(
                    "validate",
                    format!(
                        "'{}' is a record; equality operators and Equals are left to the compiler",
                        qualified
                    ),
                )
                .at(format!("aliases.{}", qualified)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_records_reported() {
        let manifest: Manifest = r#"
            [[aliases]]
            name = "Score"
            underlying = "double"
            record = true

            [[aliases]]
            name = "Count"
            underlying = "int"
        "#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        RecordEqualityLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, crate::pipeline::Severity::Info);
        assert!(diagnostics[0].message.contains("'Score'"));
    }
}
