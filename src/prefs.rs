//! Per-entity page-size preferences.
//!
//! The web UI kept these in per-entity cookies; here the same contract is a
//! trait so the embedding application chooses where they live.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Stores the last page size the user picked, keyed per entity.
pub trait PreferenceStore {
    fn page_size(&self, entity: &str) -> Option<usize>;
    fn set_page_size(&mut self, entity: &str, size: usize);
}

/// Session-only store; forgets everything on drop.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPrefs {
    sizes: HashMap<String, usize>,
}

impl PreferenceStore for InMemoryPrefs {
    fn page_size(&self, entity: &str) -> Option<usize> {
        self.sizes.get(entity).copied()
    }

    fn set_page_size(&mut self, entity: &str, size: usize) {
        self.sizes.insert(entity.to_string(), size);
    }
}

/// JSON-file-backed store for the console binary. Reads are lenient: a
/// missing or corrupt file just means no preferences yet.
#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
    sizes: HashMap<String, usize>,
}

impl FilePrefs {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let sizes = std::fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, sizes }
    }

    fn persist(&self) {
        match serde_json::to_string_pretty(&self.sizes) {
            Ok(contents) => {
                if let Err(err) = std::fs::write(&self.path, contents) {
                    log::error!("Failed to persist preferences: {err}");
                }
            }
            Err(err) => log::error!("Failed to encode preferences: {err}"),
        }
    }
}

impl PreferenceStore for FilePrefs {
    fn page_size(&self, entity: &str) -> Option<usize> {
        self.sizes.get(entity).copied()
    }

    fn set_page_size(&mut self, entity: &str, size: usize) {
        self.sizes.insert(entity.to_string(), size);
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_prefs_are_keyed_per_entity() {
        let mut prefs = InMemoryPrefs::default();
        prefs.set_page_size("assetModel", 20);
        assert_eq!(prefs.page_size("assetModel"), Some(20));
        assert_eq!(prefs.page_size("client"), None);
    }

    #[test]
    fn file_prefs_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut prefs = FilePrefs::open(&path);
        prefs.set_page_size("client", 15);
        drop(prefs);

        let reopened = FilePrefs::open(&path);
        assert_eq!(reopened.page_size("client"), Some(15));
    }

    #[test]
    fn file_prefs_tolerate_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FilePrefs::open(dir.path().join("nope.json"));
        assert_eq!(missing.page_size("client"), None);

        let corrupt_path = dir.path().join("corrupt.json");
        std::fs::write(&corrupt_path, "{not json").unwrap();
        let corrupt = FilePrefs::open(&corrupt_path);
        assert_eq!(corrupt.page_size("client"), None);
    }
}
