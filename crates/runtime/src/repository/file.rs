//! File-based MapRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{MapRepository, RepositoryError, Result, resolve_file_name};

/// Stores each map as one file in a base directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so
/// an interrupted save never leaves a truncated map behind.
pub struct FileMapRepository {
    base_dir: PathBuf,
    append_json_extension: bool,
}

impl FileMapRepository {
    /// Create a repository rooted at `base_dir`, creating it if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            append_json_extension: false,
        })
    }

    /// Append `.json` to names that lack it.
    pub fn with_json_extension(mut self, append: bool) -> Self {
        self.append_json_extension = append;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path a map called `name` is stored at.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let file_name = resolve_file_name(name, self.append_json_extension)?;
        Ok(self.base_dir.join(file_name))
    }
}

impl MapRepository for FileMapRepository {
    fn save(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.path_for(name)?;
        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved map {:?} to {}", name, path.display());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<String> {
        let path = self.path_for(name)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!("Loaded map {:?} from {}", name, path.display());
                Ok(contents)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(RepositoryError::NotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|path| path.is_file()).unwrap_or(false)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if path.is_file()
                && let Some(file_name) = path.file_name().and_then(|s| s.to_str())
                && !file_name.ends_with(".tmp")
            {
                names.push(file_name.to_string());
            }
        }
        names.sort_unstable();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_returns_same_text() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileMapRepository::new(dir.path()).unwrap();

        repo.save("island", "[]").unwrap();
        assert!(repo.exists("island"));
        assert_eq!(repo.load("island").unwrap(), "[]");
        assert!(dir.path().join("island").is_file());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileMapRepository::new(dir.path()).unwrap();

        repo.save("island", "[1]").unwrap();
        repo.save("island", "[2]").unwrap();
        assert_eq!(repo.load("island").unwrap(), "[2]");
        assert_eq!(repo.list().unwrap(), vec!["island".to_string()]);
    }

    #[test]
    fn json_extension_policy_is_applied_on_both_paths() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileMapRepository::new(dir.path())
            .unwrap()
            .with_json_extension(true);

        repo.save("coast", "[]").unwrap();
        assert!(dir.path().join("coast.json").is_file());
        assert_eq!(repo.load("coast").unwrap(), "[]");
        assert_eq!(repo.load("coast.json").unwrap(), "[]");
    }

    #[test]
    fn missing_map_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileMapRepository::new(dir.path()).unwrap();
        assert!(matches!(
            repo.load("nowhere"),
            Err(RepositoryError::NotFound(name)) if name == "nowhere"
        ));
    }

    #[test]
    fn creates_missing_base_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let repo = FileMapRepository::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(repo.list().unwrap().is_empty());
    }
}
