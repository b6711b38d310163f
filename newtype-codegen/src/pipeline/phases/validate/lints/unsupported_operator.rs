//! Lint for declared operators the generator cannot forward.

use newtype_manifest::{Manifest, Member};
use newtype_model::Arity;

use super::super::Lint;
use crate::{extract::operator_kind, pipeline::Diagnostic};

/// Warns about operator members that will be skipped during extraction.
///
/// Covers `true`/`false` operators, unknown symbols and operators whose
/// parameter count is neither one nor two.
pub struct UnsupportedOperatorLint;

impl Lint for UnsupportedOperatorLint {
    fn name(&self) -> &'static str {
        "unsupported-operator"
    }

    fn description(&self) -> &'static str {
        "Warn about declared operators that cannot be forwarded"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for (key, surface) in &manifest.types {
            for member in &surface.members {
                let Member::Operator(op) = member else {
                    continue;
                };
                let arity = match op.parameters.len() {
                    1 => Arity::Unary,
                    2 => Arity::Binary,
                    n => {
                        diagnostics.push(
                            Diagnostic::warning(
                                "validate",
                                format!(
                                    "operator '{}' has {} parameter(s) and will not be forwarded",
                                    op.symbol, n
                                ),
                            )
                            .at(format!("types.{}", key)),
                        );
                        continue;
                    }
                };
                if operator_kind(&op.symbol, arity).is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("operator '{}' is not supported and will not be forwarded", op.symbol),
                        )
                        .at(format!("types.{}", key)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_symbols_and_arity() {
        let manifest: Manifest = r#"
            [types.Flag]
            kind = "struct"

            [[types.Flag.members]]
            kind = "operator"
            symbol = "true"
            parameters = [{ type = "Flag" }]
            returns = "bool"

            [[types.Flag.members]]
            kind = "operator"
            symbol = "op_Addition"
            parameters = [{ type = "Flag" }, { type = "Flag" }]
            returns = "Flag"

            [[types.Flag.members]]
            kind = "operator"
            symbol = "-"
            parameters = [{ type = "Flag" }, { type = "Flag" }, { type = "Flag" }]
            returns = "Flag"
        "#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        UnsupportedOperatorLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("'true'"));
        assert!(diagnostics[1].message.contains("3 parameter(s)"));
        assert!(diagnostics.iter().all(|d| d.location.as_deref() == Some("types.Flag")));
    }
}
