//! Alias declarations.

use newtype_model::{Accessibility, CarrierKind, GenerationOptions, InliningHint, RefKind};
use serde::Deserialize;

/// One `[[aliases]]` entry: a wrapper type the generator should complete.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasDecl {
    /// Alias type name
    pub name: String,

    /// Containing namespace (empty for the global namespace)
    #[serde(default)]
    pub namespace: String,

    /// Underlying type: a key in `[types]` or a built-in primitive keyword
    pub underlying: String,

    #[serde(default)]
    pub accessibility: Accessibility,

    #[serde(default)]
    pub carrier: CarrierKind,

    /// Declared as a `record struct` / `record`
    #[serde(default)]
    pub record: bool,

    /// Declared `readonly` (struct carriers only)
    #[serde(default = "default_true")]
    pub readonly: bool,

    #[serde(default)]
    pub no_implicit_wrap: bool,

    #[serde(default)]
    pub no_implicit_unwrap: bool,

    /// Shorthand for both `no_implicit_wrap` and `no_implicit_unwrap`
    #[serde(default)]
    pub no_implicit_conversions: bool,

    #[serde(default)]
    pub no_constructor_forwarding: bool,

    /// No conversions and no constructor forwarding
    #[serde(default)]
    pub opaque: bool,

    /// Overrides `[generator] method_impl` for this alias
    pub method_impl: Option<InliningHint>,

    /// Hand-written constructors, by parameter list
    #[serde(default)]
    pub constructors: Vec<Vec<SignatureParam>>,
}

/// A parameter of a hand-written constructor. Only the pass convention and
/// type take part in signature comparison.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignatureParam {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub ref_kind: RefKind,
    pub name: Option<String>,
}

impl AliasDecl {
    /// Namespace-qualified alias name (`Shop.Price`).
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Fold the declaration switches into generation options.
    pub fn options(&self, default_inlining: InliningHint) -> GenerationOptions {
        let base = if self.opaque {
            GenerationOptions::opaque()
        } else if self.no_implicit_conversions {
            GenerationOptions::no_conversions()
        } else {
            GenerationOptions::default()
        };

        GenerationOptions {
            suppress_wrap: base.suppress_wrap || self.no_implicit_wrap,
            suppress_unwrap: base.suppress_unwrap || self.no_implicit_unwrap,
            suppress_constructor_forwarding: base.suppress_constructor_forwarding
                || self.no_constructor_forwarding,
            inlining: self.method_impl.unwrap_or(default_inlining),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> AliasDecl {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn test_defaults() {
        let alias = parse(
            r#"
            name = "UserId"
            underlying = "int"
            "#,
        );
        assert_eq!(alias.qualified_name(), "UserId");
        assert!(alias.readonly);
        assert!(!alias.record);
        assert_eq!(alias.carrier, CarrierKind::Struct);
        assert_eq!(
            alias.options(InliningHint::AggressiveInlining),
            GenerationOptions::default()
        );
    }

    #[test]
    fn test_option_folding() {
        let alias = parse(
            r#"
            name = "Price"
            namespace = "Shop"
            underlying = "decimal"
            no_implicit_unwrap = true
            method_impl = "no-inlining"
            "#,
        );
        let options = alias.options(InliningHint::AggressiveInlining);
        assert_eq!(alias.qualified_name(), "Shop.Price");
        assert!(!options.suppress_wrap);
        assert!(options.suppress_unwrap);
        assert_eq!(options.inlining, InliningHint::NoInlining);

        let opaque = parse(
            r#"
            name = "Token"
            underlying = "string"
            opaque = true
            "#,
        );
        let options = opaque.options(InliningHint::None);
        assert_eq!(
            options,
            GenerationOptions {
                inlining: InliningHint::None,
                ..GenerationOptions::opaque()
            }
        );
    }

    #[test]
    fn test_hand_written_constructors() {
        let alias = parse(
            r#"
            name = "Parser"
            underlying = "Tokenizer"
            constructors = [[{ type = "string", ref_kind = "ref" }], []]
            "#,
        );
        assert_eq!(alias.constructors.len(), 2);
        assert_eq!(alias.constructors[0][0].ref_kind, RefKind::Ref);
        assert!(alias.constructors[1].is_empty());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = toml::from_str::<AliasDecl>(
            r#"
            name = "UserId"
            underlying = "int"
            implicit = true
            "#,
        );
        assert!(result.is_err());
    }
}
