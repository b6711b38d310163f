//! Descriptor cache for incremental generation.
//!
//! Output is a pure function of the descriptor, so an alias whose descriptor
//! is equal to the one recorded on the previous run does not need to be
//! rendered again. The cache is persisted as JSON next to the generated files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use indexmap::IndexMap;
use newtype_model::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// Directory, relative to the output directory, holding generator state.
pub const STATE_DIR: &str = ".newtype";

const CACHE_FILE: &str = "cache.json";

/// Bumped whenever the cached format or the rendering changes.
const CACHE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct CacheFile {
    version: u32,
    entries: IndexMap<String, TypeDescriptor>,
}

/// Last-seen descriptor per alias, keyed by `type_display_string`.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: IndexMap<String, TypeDescriptor>,
    hits: usize,
    misses: usize,
}

impl DescriptorCache {
    /// An empty cache; every alias is stale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the cache file for `output_dir`.
    pub fn path(output_dir: &Path) -> PathBuf {
        output_dir.join(STATE_DIR).join(CACHE_FILE)
    }

    /// Load the cache stored under `output_dir`.
    ///
    /// A missing, unreadable or outdated cache file yields an empty cache.
    pub fn load(output_dir: &Path) -> Self {
        let path = Self::path(output_dir);
        let Ok(content) = fs::read_to_string(&path) else {
            tracing::debug!(path = %path.display(), "no descriptor cache");
            return Self::new();
        };

        match serde_json::from_str::<CacheFile>(&content) {
            Ok(file) if file.version == CACHE_VERSION => {
                tracing::debug!(entries = file.entries.len(), "loaded descriptor cache");
                Self {
                    entries: file.entries,
                    ..Self::default()
                }
            }
            Ok(file) => {
                tracing::info!(found = file.version, "ignoring descriptor cache of another version");
                Self::new()
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring corrupt descriptor cache");
                Self::new()
            }
        }
    }

    /// Persist the cache under `output_dir`.
    pub fn save(&self, output_dir: &Path) -> Result<()> {
        let path = Self::path(output_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let file = CacheFile {
            version: CACHE_VERSION,
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(
            entries = self.entries.len(),
            hits = self.hits,
            misses = self.misses,
            "saved descriptor cache"
        );
        Ok(())
    }

    /// Whether `descriptor` differs from the cached one for its alias.
    pub fn is_stale(&mut self, descriptor: &TypeDescriptor) -> bool {
        let stale = self.entries.get(&descriptor.type_display_string) != Some(descriptor);
        if stale {
            self.misses += 1;
            tracing::debug!(alias = %descriptor.type_display_string, "cache miss");
        } else {
            self.hits += 1;
            tracing::debug!(alias = %descriptor.type_display_string, "cache hit");
        }
        stale
    }

    /// Record `descriptor` as the latest for its alias.
    pub fn update(&mut self, descriptor: &TypeDescriptor) {
        self.entries
            .insert(descriptor.type_display_string.clone(), descriptor.clone());
    }

    /// Drop entries for aliases that are no longer declared.
    pub fn retain_aliases<'a>(&mut self, aliases: impl IntoIterator<Item = &'a str>) {
        let keep: std::collections::HashSet<&str> = aliases.into_iter().collect();
        self.entries.retain(|key, _| keep.contains(key.as_str()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups that found an equal descriptor.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that found no entry or a different descriptor.
    pub fn misses(&self) -> usize {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use newtype_manifest::Manifest;

    use super::*;
    use crate::extract::build_descriptor;

    fn descriptors(src: &str) -> Vec<TypeDescriptor> {
        let manifest: Manifest = src.parse().unwrap();
        manifest
            .aliases
            .iter()
            .map(|a| build_descriptor(&manifest, a).unwrap())
            .collect()
    }

    const TWO_ALIASES: &str = r#"
        [[aliases]]
        name = "UserId"
        namespace = "App"
        underlying = "int"

        [[aliases]]
        name = "Email"
        namespace = "App"
        underlying = "string"
        carrier = "class"
    "#;

    #[test]
    fn test_stale_until_updated() {
        let ds = descriptors(TWO_ALIASES);
        let mut cache = DescriptorCache::new();

        assert!(cache.is_stale(&ds[0]));
        cache.update(&ds[0]);
        assert!(!cache.is_stale(&ds[0]));
        assert!(cache.is_stale(&ds[1]));
        assert_eq!((cache.hits(), cache.misses()), (1, 2));
    }

    #[test]
    fn test_changed_descriptor_is_stale() {
        let before = descriptors(TWO_ALIASES);
        let after = descriptors(
            r#"
            [[aliases]]
            name = "UserId"
            namespace = "App"
            underlying = "int"
            no_implicit_wrap = true
            "#,
        );
        let mut cache = DescriptorCache::new();
        cache.update(&before[0]);

        assert!(cache.is_stale(&after[0]));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let ds = descriptors(TWO_ALIASES);

        let mut cache = DescriptorCache::new();
        for d in &ds {
            cache.update(d);
        }
        cache.save(dir.path()).unwrap();
        assert!(dir.path().join(".newtype/cache.json").exists());

        let mut loaded = DescriptorCache::load(dir.path());
        assert_eq!(loaded.len(), 2);
        assert!(!loaded.is_stale(&ds[0]));
        assert!(!loaded.is_stale(&ds[1]));
    }

    #[test]
    fn test_corrupt_cache_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = DescriptorCache::path(dir.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(DescriptorCache::load(dir.path()).is_empty());
    }

    #[test]
    fn test_retain_aliases() {
        let ds = descriptors(TWO_ALIASES);
        let mut cache = DescriptorCache::new();
        for d in &ds {
            cache.update(d);
        }

        cache.retain_aliases(["App.Email"]);
        assert_eq!(cache.len(), 1);
        assert!(cache.is_stale(&ds[0]));
    }
}
