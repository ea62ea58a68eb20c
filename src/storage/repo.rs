//! Repository checkout access
//!
//! Locates the fork checkout and reads/writes the overlay target files.
//! Writes go through a temp file + rename so a target is never left
//! partially written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

/// Relative path of the README target
pub const README_PATH: &str = "README.md";

/// Relative path of the build-configuration target
pub const CMAKE_PATH: &str = "tools/CMakeLists.txt";

/// Relative path of the optional release workflow target
pub const WORKFLOW_PATH: &str = ".github/workflows/release.yml";

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{} does not look like a fork checkout (missing README.md or tools/CMakeLists.txt)", .0.display())]
    NotACheckout(PathBuf),

    #[error("no fork checkout found in the current directory or any parent")]
    NotFound,
}

/// The fork checkout being reconciled
pub struct Repo {
    root: PathBuf,
}

impl Repo {
    /// Opens the checkout at the given root
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let root = root.into();
        if !is_checkout(&root) {
            return Err(RepoError::NotACheckout(root));
        }
        Ok(Self { root })
    }

    /// Finds the checkout containing the current directory
    pub fn discover() -> Result<Self, RepoError> {
        let mut dir = std::env::current_dir().map_err(|_| RepoError::NotFound)?;
        loop {
            if is_checkout(&dir) {
                return Ok(Self { root: dir });
            }
            if !dir.pop() {
                return Err(RepoError::NotFound);
            }
        }
    }

    /// Returns the checkout root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the README target
    pub fn readme_path(&self) -> PathBuf {
        self.root.join(README_PATH)
    }

    /// Returns the path of the build-configuration target
    pub fn cmake_path(&self) -> PathBuf {
        self.root.join(CMAKE_PATH)
    }

    /// Returns the path of the optional release workflow target
    pub fn workflow_path(&self) -> PathBuf {
        self.root.join(WORKFLOW_PATH)
    }

    /// Reads a required target file
    pub fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Reads an optional target file; absence is `None`, not an error
    pub fn read_optional(&self, path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.read(path)?))
    }

    /// Writes a target file atomically (temp file + rename)
    pub fn write(&self, path: &Path, content: &str) -> Result<()> {
        let temp_path = path.with_extension("overlay.tmp");

        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

        fs::rename(&temp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

fn is_checkout(dir: &Path) -> bool {
    dir.join(README_PATH).is_file() && dir.join(CMAKE_PATH).is_file()
}
