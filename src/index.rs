//! Base-name index over the documentation directories.

use crate::error::{DocError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Maps reference-page file names (`glBindBuffer.xml`) to absolute paths.
///
/// Built once from a primary and a fallback directory, both scanned
/// non-recursively. A name present in both resolves to the primary copy.
#[derive(Debug, Default)]
pub struct FileIndex {
    files: HashMap<String, PathBuf>,
}

impl FileIndex {
    pub fn build(primary: &Path, fallback: &Path) -> Result<Self> {
        if !primary.is_dir() && !fallback.is_dir() {
            return Err(DocError::MissingDirectories {
                primary: primary.to_path_buf(),
                fallback: fallback.to_path_buf(),
            });
        }

        let mut index = FileIndex::default();
        for dir in [primary, fallback] {
            if !dir.is_dir() {
                tracing::warn!(dir = %dir.display(), "documentation directory not found, skipping");
                continue;
            }
            index.scan(dir)?;
        }
        tracing::info!(files = index.len(), "indexed documentation files");
        Ok(index)
    }

    /// Add every regular file in `dir` whose name is not indexed yet.
    fn scan(&mut self, dir: &Path) -> Result<()> {
        let dir = dir.canonicalize().map_err(|source| DocError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let entries = fs::read_dir(&dir).map_err(|source| DocError::Io {
            path: dir.clone(),
            source,
        })?;
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            self.files.entry(name.to_string()).or_insert(path);
        }
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.files.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Indexed file names, sorted for deterministic output.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let mut names: Vec<&str> = self.files.keys().map(String::as_str).collect();
        names.sort_unstable();
        names.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn primary_wins_on_collision() {
        let primary = TempDir::new().unwrap();
        let fallback = TempDir::new().unwrap();
        touch(primary.path(), "glClear.xml", "primary");
        touch(fallback.path(), "glClear.xml", "fallback");
        touch(fallback.path(), "glBegin.xml", "fallback");

        let index = FileIndex::build(primary.path(), fallback.path()).unwrap();
        assert_eq!(index.len(), 2);

        let clear = index.resolve("glClear.xml").unwrap();
        assert_eq!(fs::read_to_string(clear).unwrap(), "primary");
        assert!(clear.is_absolute());
        let begin = index.resolve("glBegin.xml").unwrap();
        assert_eq!(fs::read_to_string(begin).unwrap(), "fallback");
    }

    #[test]
    fn names_are_case_sensitive() {
        let primary = TempDir::new().unwrap();
        touch(primary.path(), "glClear.xml", "");
        let index = FileIndex::build(primary.path(), Path::new("/nonexistent/fallback")).unwrap();
        assert!(index.contains("glClear.xml"));
        assert!(!index.contains("glclear.xml"));
    }

    #[test]
    fn subdirectories_are_not_scanned() {
        let primary = TempDir::new().unwrap();
        fs::create_dir(primary.path().join("GL2")).unwrap();
        touch(&primary.path().join("GL2"), "glBegin.xml", "");
        let fallback = TempDir::new().unwrap();

        let index = FileIndex::build(primary.path(), fallback.path()).unwrap();
        assert!(index.is_empty());
        assert!(index.resolve("glBegin.xml").is_none());
    }

    #[test]
    fn missing_directories_are_a_configuration_error() {
        let err = FileIndex::build(Path::new("/nonexistent/a"), Path::new("/nonexistent/b")).unwrap_err();
        assert!(matches!(err, DocError::MissingDirectories { .. }));
    }

    #[test]
    fn names_are_sorted() {
        let primary = TempDir::new().unwrap();
        touch(primary.path(), "glViewport.xml", "");
        touch(primary.path(), "glClear.xml", "");
        let index = FileIndex::build(primary.path(), primary.path()).unwrap();
        let names: Vec<_> = index.names().collect();
        assert_eq!(names, ["glClear.xml", "glViewport.xml"]);
    }
}
