//! In-memory MapRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{MapRepository, RepositoryError, Result, resolve_file_name};

/// Keeps saved maps in a sorted in-process table.
#[derive(Default)]
pub struct InMemoryMapRepository {
    maps: RwLock<BTreeMap<String, String>>,
}

impl InMemoryMapRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with one map already stored.
    pub fn with_map(name: &str, contents: &str) -> Self {
        let mut maps = BTreeMap::new();
        maps.insert(name.to_string(), contents.to_string());
        Self {
            maps: RwLock::new(maps),
        }
    }
}

impl MapRepository for InMemoryMapRepository {
    fn save(&self, name: &str, contents: &str) -> Result<()> {
        let key = resolve_file_name(name, false)?;
        let mut maps = self
            .maps
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        maps.insert(key, contents.to_string());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<String> {
        let key = resolve_file_name(name, false)?;
        let maps = self
            .maps
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        maps.get(&key)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))
    }

    fn exists(&self, name: &str) -> bool {
        self.maps
            .read()
            .map(|maps| maps.contains_key(name.trim()))
            .unwrap_or(false)
    }

    fn list(&self) -> Result<Vec<String>> {
        let maps = self
            .maps
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(maps.keys().cloned().collect())
    }
}
