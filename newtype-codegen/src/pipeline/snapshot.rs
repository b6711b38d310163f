//! Pipeline snapshot plugin for visualization and debugging.
//!
//! This module provides a plugin that captures the pipeline state after each phase,
//! enabling visualization of the compilation process.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::Result;
use newtype_model::TypeDescriptor;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// Extracted descriptors (available after the "extract" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptors: Option<Vec<TypeDescriptor>>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// Used by `newtype generate --visualize` to dump what each phase produced.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".newtype/debug"));
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Snapshots are also written here as `{phase}.json` when set.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    /// Create a new snapshot plugin.
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a new snapshot plugin that writes to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn capture_snapshot(&self, phase: &str, ctx: &CompilationContext) -> PhaseSnapshot {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            descriptors: ctx.descriptors.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        snapshot
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), "wrote phase snapshot");
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = self.capture_snapshot(phase, ctx);

        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)?;
            write_snapshot(dir, &snapshot)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use newtype_manifest::Manifest;

    use super::*;
    use crate::pipeline::Pipeline;

    #[test]
    fn test_snapshot_plugin_creation() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().is_empty());
    }

    #[test]
    fn test_snapshots_written_per_phase() {
        let dir = tempfile::tempdir().unwrap();
        let manifest: Manifest = r#"
            [[aliases]]
            name = "OrderId"
            underlying = "long"
        "#
        .parse()
        .unwrap();

        Pipeline::new()
            .plugin(SnapshotPlugin::with_output_dir(dir.path()))
            .run(manifest)
            .unwrap();

        assert!(dir.path().join("validate.json").exists());
        let extract = fs::read_to_string(dir.path().join("extract.json")).unwrap();
        assert!(extract.contains("\"OrderId\""));
    }

    #[test]
    fn test_descriptors_absent_before_extract() {
        struct Shared(Arc<SnapshotPlugin>);
        impl Plugin for Shared {
            fn name(&self) -> &'static str {
                "shared"
            }
            fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
                self.0.on_after_phase(phase, ctx)
            }
        }

        let plugin = Arc::new(SnapshotPlugin::new());
        let manifest: Manifest = r#"
            [[aliases]]
            name = "Tag"
            underlying = "string"
        "#
        .parse()
        .unwrap();
        Pipeline::new()
            .plugin(Shared(plugin.clone()))
            .run(manifest)
            .unwrap();

        let snapshots = plugin.snapshots();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].phase, "validate");
        assert!(snapshots[0].descriptors.is_none());
        assert_eq!(snapshots[1].descriptors.as_ref().map(Vec::len), Some(1));
    }
}
