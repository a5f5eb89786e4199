//! Named storage for saved maps.
//!
//! Repositories store the JSON text produced by
//! [`hexmap_core::persist::to_json`] under a user-chosen name and hand it
//! back verbatim on load. Parsing and validation stay in the core, so a
//! corrupt file surfaces as a core [`MapError`](hexmap_core::MapError).

mod error;
mod file;
mod memory;

pub use error::{RepositoryError, Result};
pub use file::FileMapRepository;
pub use memory::InMemoryMapRepository;

/// Storage contract for saved maps.
pub trait MapRepository: Send + Sync {
    /// Stores `contents` under `name`, replacing any previous map.
    fn save(&self, name: &str, contents: &str) -> Result<()>;

    /// Returns the text stored under `name`.
    fn load(&self, name: &str) -> Result<String>;

    fn exists(&self, name: &str) -> bool;

    /// Names of every stored map, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

/// Applies the naming policy to a user-entered map name.
///
/// Names are used verbatim unless `append_json_extension` is set, in which
/// case `.json` is appended when not already present. Empty names and names
/// that would escape the storage directory are rejected.
pub fn resolve_file_name(name: &str, append_json_extension: bool) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\'])
        || trimmed.contains('\0')
    {
        return Err(RepositoryError::InvalidName(name.to_string()));
    }

    if append_json_extension && !trimmed.ends_with(".json") {
        Ok(format!("{trimmed}.json"))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_verbatim_by_default() {
        assert_eq!(resolve_file_name("island", false).unwrap(), "island");
        assert_eq!(resolve_file_name("island.json", false).unwrap(), "island.json");
        assert_eq!(resolve_file_name("  coast ", false).unwrap(), "coast");
    }

    #[test]
    fn extension_is_appended_once_when_enabled() {
        assert_eq!(resolve_file_name("island", true).unwrap(), "island.json");
        assert_eq!(resolve_file_name("island.json", true).unwrap(), "island.json");
    }

    #[test]
    fn rejects_names_that_leave_the_directory() {
        for bad in ["", "   ", ".", "..", "../secrets", "maps/island", "a\\b"] {
            assert!(
                matches!(resolve_file_name(bad, false), Err(RepositoryError::InvalidName(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
