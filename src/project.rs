use crate::error::{ArctlError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Check that `path` can serve as a project root.
///
/// Only the entry's metadata is inspected; the directory is never read.
pub fn validate_project_dir(path: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ArctlError::NotExist(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_dir() {
        return Err(ArctlError::NotADirectory(path.to_path_buf()));
    }

    Ok(())
}

/// A validated project directory holding an agent.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Validate `path` and open it as a project
    pub fn open(path: &Path) -> Result<Self> {
        validate_project_dir(path)?;

        // Canonicalize to resolve any .. or symlinks, keep the given path otherwise
        let root = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        tracing::debug!("Using project directory {}", root.display());

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the agent manifest inside this project
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(crate::manifest::MANIFEST_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_project_dir(dir.path()).is_ok());
    }

    #[test]
    fn test_validate_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nonexistent");

        let err = validate_project_dir(&missing).unwrap_err();
        assert!(matches!(err, ArctlError::NotExist(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_file_is_not_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("testfile.txt");
        std::fs::write(&file, "test").unwrap();

        let err = validate_project_dir(&file).unwrap_err();
        assert!(matches!(err, ArctlError::NotADirectory(_)));
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn test_open_sets_manifest_path() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::open(dir.path()).unwrap();

        assert!(project.root().is_absolute());
        assert_eq!(
            project.manifest_path(),
            project.root().join("agent.toml")
        );
    }

    #[test]
    fn test_open_rejects_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("agent.toml");
        std::fs::write(&file, "name = \"x\"").unwrap();

        assert!(Project::open(&file).is_err());
    }
}
