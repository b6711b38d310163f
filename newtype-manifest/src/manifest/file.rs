use std::path::{Path, PathBuf};

use super::{Manifest, parse::parse_manifest};
use crate::{Error, Result};

/// A `newtype.toml` read from disk, remembering where it lives so relative
/// output paths resolve against it.
pub struct NewtypeToml {
    path: PathBuf,
    manifest: Manifest,
}

impl NewtypeToml {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| {
            Box::new(Error::Io {
                path: path.clone(),
                source,
            })
        })?;
        let manifest = parse_manifest(&content, &path.display().to_string())?;
        Ok(Self { path, manifest })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// `[output] dir`, relative to the directory holding the manifest.
    pub fn output_dir(&self) -> PathBuf {
        let dir = &self.manifest.output.dir;
        match self.path.parent() {
            Some(parent) if dir.is_relative() => parent.join(dir),
            _ => dir.clone(),
        }
    }
}
