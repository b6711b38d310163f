//! Manifest parsing from files and strings.

use std::str::FromStr;

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "newtype.toml")
    }
}

/// Parse and validate manifest text; `filename` labels error snippets.
pub(crate) fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
///
/// Only problems that make an alias impossible to describe are errors here;
/// everything else is left to the pipeline's lints.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for alias in &manifest.aliases {
        ctx.validate_name(&alias.name, "alias")?;

        let alias_ctx = ctx.push(&alias.name);
        if !alias.namespace.is_empty() {
            alias_ctx.validate_namespace(&alias.namespace)?;
        }

        let Some(underlying) = manifest.underlying(alias) else {
            return Err(ctx.source_context().unknown_type_error(
                &alias.underlying,
                &alias.name,
                ctx.find_value_span("underlying", &alias.underlying),
            ));
        };

        let full_name = underlying.surface.full_name(underlying.key);
        if full_name.trim_start_matches("global::") == alias.qualified_name() {
            return Err(ctx.source_context().validation_error(
                format!("alias '{}' cannot wrap itself", alias.qualified_name()),
                ctx.find_value_span("underlying", &alias.underlying),
            ));
        }
    }

    Ok(())
}
