//! Extract phase - builds descriptors from the manifest.

use eyre::{Result, WrapErr};
use rayon::prelude::*;

use crate::{
    extract::build_descriptor,
    pipeline::{CompilationContext, Phase},
};

/// Phase that extracts a [`TypeDescriptor`](newtype_model::TypeDescriptor) per alias.
///
/// Aliases are independent, so they are extracted in parallel. The result
/// keeps declaration order.
pub struct ExtractPhase;

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn description(&self) -> &'static str {
        "Classify underlying members into alias descriptors"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let manifest = &ctx.manifest;
        let descriptors = manifest
            .aliases
            .par_iter()
            .map(|alias| {
                build_descriptor(manifest, alias)
                    .wrap_err_with(|| format!("failed to extract alias '{}'", alias.name))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(aliases = descriptors.len(), "extracted descriptors");
        ctx.descriptors = Some(descriptors);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use newtype_manifest::Manifest;

    use super::*;

    #[test]
    fn test_extract_keeps_declaration_order() {
        let names = ["Zeta", "Alpha", "Mid", "Beta", "Omega", "Gamma"];
        let src: String = names
            .iter()
            .map(|n| format!("[[aliases]]\nname = \"{n}\"\nunderlying = \"int\"\n"))
            .collect();
        let manifest: Manifest = src.parse().unwrap();
        let mut ctx = CompilationContext::new(manifest);

        ExtractPhase.run(&mut ctx).unwrap();

        let extracted: Vec<_> = ctx
            .take_descriptors()
            .unwrap()
            .into_iter()
            .map(|d| d.type_name)
            .collect();
        assert_eq!(extracted, names);
    }

    #[test]
    fn test_empty_manifest() {
        let mut ctx = CompilationContext::new(Manifest::default());
        ExtractPhase.run(&mut ctx).unwrap();
        assert_eq!(ctx.descriptors, Some(Vec::new()));
    }
}
