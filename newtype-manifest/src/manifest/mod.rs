//! Manifest types and parsing for newtype.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::NewtypeToml;
use indexmap::IndexMap;
use newtype_core::PrimitiveKind;
use newtype_model::{InliningHint, ReturnWrappingPolicy, UnderlyingType};
use serde::Deserialize;
pub use validate::ParseContext;

use crate::{AliasDecl, TypeSurface, surface::prelude};

/// Root manifest for newtype.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Defaults applied to every alias
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Underlying-type surfaces, keyed by type name
    #[serde(default)]
    pub types: IndexMap<String, TypeSurface>,

    /// Aliases to generate, in declaration order
    #[serde(default)]
    pub aliases: Vec<AliasDecl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the `.g.cs` files are written to, relative to the manifest
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    /// When forwarded methods keep the underlying return type
    #[serde(default)]
    pub return_wrapping: ReturnWrappingPolicy,

    /// Default `[MethodImpl]` hint for aliases that don't set one
    #[serde(default)]
    pub method_impl: InliningHint,
}

/// A resolved type surface together with the key it was declared under.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRef<'a> {
    pub key: &'a str,
    pub surface: &'a TypeSurface,
}

impl SurfaceRef<'_> {
    /// Identity of this type as an alias underlying.
    pub fn underlying_type(&self) -> UnderlyingType {
        UnderlyingType {
            full_name: self.surface.full_name(self.key),
            minimal_name: self.surface.minimal_name(self.key),
            primitive: self.surface.primitive_kind(self.key),
            is_value_type: self.surface.is_value_type(self.key),
        }
    }
}

impl Manifest {
    /// Look up a type surface by name.
    ///
    /// Declared `[types]` win over the built-in primitive surfaces. A name
    /// matches a declared type by key, by key with a `global::` prefix, or by
    /// its explicit `full_name`.
    pub fn surface(&self, name: &str) -> Option<SurfaceRef<'_>> {
        let name = name.trim();
        let bare = name.trim_start_matches("global::");

        let declared = self.types.iter().find(|(key, surface)| {
            key.as_str() == name
                || key.as_str() == bare
                || surface.full_name.as_deref() == Some(name)
        });
        if let Some((key, surface)) = declared {
            return Some(SurfaceRef { key, surface });
        }

        PrimitiveKind::from_type_name(name).map(|kind| SurfaceRef {
            key: kind.keyword(),
            surface: prelude::surface(kind),
        })
    }

    /// The underlying surface of an alias, if it resolves.
    pub fn underlying(&self, alias: &AliasDecl) -> Option<SurfaceRef<'_>> {
        self.surface(&alias.underlying)
    }

    /// Rewrite a type reference to the fully qualified form emitted in code.
    ///
    /// Primitives become their keyword, declared types their full name;
    /// array, nullable and pointer suffixes are kept. Anything else is
    /// assumed to be already qualified and passes through.
    pub fn resolve_type_name(&self, name: &str) -> String {
        let name = name.trim();
        for suffix in ["[]", "?", "*"] {
            if let Some(inner) = name.strip_suffix(suffix) {
                return format!("{}{suffix}", self.resolve_type_name(inner));
            }
        }

        if let Some(kind) = PrimitiveKind::from_type_name(name) {
            return kind.keyword().to_string();
        }

        match self.surface(name) {
            Some(found) => found.surface.full_name(found.key),
            None => name.to_string(),
        }
    }

    /// Signatures of the alias's hand-written constructors, in the same
    /// shape as forwarded constructor signatures.
    pub fn declared_signatures(&self, alias: &AliasDecl) -> Vec<String> {
        alias
            .constructors
            .iter()
            .map(|params| {
                params
                    .iter()
                    .map(|p| {
                        format!(
                            "{}{}",
                            p.ref_kind.declaration_modifier(),
                            self.resolve_type_name(&p.type_name)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect()
    }

    /// Find an alias by plain or qualified name.
    pub fn alias(&self, name: &str) -> Option<&AliasDecl> {
        self.aliases
            .iter()
            .find(|a| a.name == name || a.qualified_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(src: &str) -> Manifest {
        src.parse().unwrap()
    }

    #[test]
    fn test_primitive_surfaces_resolve() {
        let m = Manifest::default();
        let int = m.surface("int").unwrap();
        assert_eq!(int.key, "int");
        assert_eq!(int.underlying_type().full_name, "int");
        assert!(int.underlying_type().is_value_type);

        let string = m.surface("System.String").unwrap();
        assert_eq!(string.key, "string");
        assert!(!string.underlying_type().is_value_type);
        assert!(m.surface("Money").is_none());
    }

    #[test]
    fn test_declared_types_resolve_by_key_and_full_name() {
        let m = manifest(
            r#"
            [types."Shop.Money"]
            kind = "struct"
            "#,
        );
        let money = m.surface("Shop.Money").unwrap();
        assert_eq!(money.key, "Shop.Money");
        assert!(m.surface("global::Shop.Money").is_some());

        let underlying = money.underlying_type();
        assert_eq!(underlying.full_name, "global::Shop.Money");
        assert_eq!(underlying.minimal_name, "Money");
        assert!(underlying.is_value_type);
        assert_eq!(underlying.primitive, None);
    }

    #[test]
    fn test_resolve_type_name() {
        let m = manifest(
            r#"
            [types.Pair]
            kind = "struct"
            "#,
        );
        assert_eq!(m.resolve_type_name("System.Int32"), "int");
        assert_eq!(m.resolve_type_name("Pair"), "global::Pair");
        assert_eq!(m.resolve_type_name("Pair[]"), "global::Pair[]");
        assert_eq!(m.resolve_type_name("Pair?"), "global::Pair?");
        assert_eq!(m.resolve_type_name("char*"), "char*");
        assert_eq!(
            m.resolve_type_name("global::System.TimeSpan"),
            "global::System.TimeSpan"
        );
    }

    #[test]
    fn test_declared_signatures_use_resolved_types() {
        let m = manifest(
            r#"
            [[aliases]]
            name = "Parser"
            underlying = "string"
            constructors = [[{ type = "System.String", ref_kind = "ref" }], [{ type = "char" }, { type = "int" }]]
            "#,
        );
        let alias = m.alias("Parser").unwrap();
        assert_eq!(m.declared_signatures(alias), ["ref string", "char,int"]);
    }

    #[test]
    fn test_generator_defaults() {
        let m = Manifest::default();
        assert_eq!(m.output.dir, PathBuf::from("."));
        assert_eq!(m.generator.method_impl, InliningHint::AggressiveInlining);
        assert_eq!(
            m.generator.return_wrapping,
            ReturnWrappingPolicy::SkipPrimitiveValueTypes
        );
    }
}
