use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A file produced by a generator, written relative to an output directory.
pub trait GeneratedFile {
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    fn render(&self) -> String;

    /// Render and write the file according to its rules.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();
        match self.rules().overwrite {
            Overwrite::IfChanged if matches_on_disk(&path, &content) => {
                tracing::debug!(path = %path.display(), "content unchanged, skipping write");
                Ok(WriteResult::Unchanged)
            }
            _ => {
                write_file(&path, &content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn matches_on_disk(path: &Path, content: &str) -> bool {
    std::fs::read_to_string(path).is_ok_and(|existing| existing == content)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Outcome of [`GeneratedFile::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// The file on disk already held identical content.
    Unchanged,
}

/// How a generated file treats an existing file at its path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    pub fn if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    /// Leave the file alone when its content is identical, keeping its mtime.
    #[default]
    IfChanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Stub {
        name: &'static str,
        body: &'static str,
        rules: FileRules,
    }

    impl GeneratedFile for Stub {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("Generated").join(self.name)
        }
        fn rules(&self) -> FileRules {
            self.rules
        }
        fn render(&self) -> String {
            self.body.to_string()
        }
    }

    fn stub(body: &'static str, rules: FileRules) -> Stub {
        Stub {
            name: "Price.g.cs",
            body,
            rules,
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let file = stub("partial struct Price {}", FileRules::default());

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("Generated/Price.g.cs")).unwrap(),
            "partial struct Price {}"
        );
    }

    #[test]
    fn test_if_changed_skips_identical() {
        let temp = TempDir::new().unwrap();
        let file = stub("partial struct Price {}", FileRules::if_changed());

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_if_changed_rewrites_different() {
        let temp = TempDir::new().unwrap();
        stub("stale", FileRules::if_changed()).write(temp.path()).unwrap();

        let fresh = stub("fresh", FileRules::if_changed());
        assert_eq!(fresh.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(fresh.path(temp.path())).unwrap(),
            "fresh"
        );
    }

    #[test]
    fn test_always_rewrites_identical() {
        let temp = TempDir::new().unwrap();
        let file = stub("partial struct Money {}", FileRules::always());

        file.write(temp.path()).unwrap();
        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
    }
}
