//! Directory Source
//!
//! Serves the content protocol straight from a local directory, producing the
//! same listings a content server would.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, ensure};

use super::path::{DATA_FILE, SEPARATOR, is_directory};
use super::source::{ContentSink, ContentSource};
use crate::error::{
    InvalidPathSnafu, NotADirectorySnafu, NotFoundSnafu, ReadSnafu, Result, WriteSnafu,
};

/// Content tree rooted at a local directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a content path onto the filesystem, refusing to leave the root
    fn resolve(&self, location: &str) -> Result<PathBuf> {
        let mut resolved = self.root.clone();
        for segment in location.split(SEPARATOR).filter(|s| !s.is_empty()) {
            ensure!(
                segment != ".." && segment != ".",
                InvalidPathSnafu {
                    message: format!("'{location}' escapes the content root"),
                }
            );
            resolved.push(segment);
        }
        Ok(resolved)
    }

    /// Resolve `path` and require an existing directory there
    async fn directory(&self, path: &str) -> Result<PathBuf> {
        let dir = self.resolve(path)?;
        let metadata = match tokio::fs::metadata(&dir).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return NotFoundSnafu { resource: path }.fail();
            }
            Err(e) => return Err(e).context(ReadSnafu { resource: path }),
        };
        ensure!(metadata.is_dir(), NotADirectorySnafu { resource: path });
        Ok(dir)
    }
}

impl ContentSource for DirectorySource {
    async fn list(&self, path: &str) -> Result<Vec<String>> {
        let dir = self.directory(path).await?;

        let mut entries = Vec::new();
        let mut reader = tokio::fs::read_dir(&dir)
            .await
            .context(ReadSnafu { resource: path })?;
        while let Some(entry) = reader
            .next_entry()
            .await
            .context(ReadSnafu { resource: path })?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            let file_type = entry
                .file_type()
                .await
                .context(ReadSnafu { resource: path })?;
            if file_type.is_dir() {
                entries.push(format!("{name}{SEPARATOR}"));
            } else {
                entries.push(name);
            }
        }
        entries.sort();

        tracing::debug!("Listed {} entries under {}", entries.len(), dir.display());
        Ok(entries)
    }

    async fn read_text(&self, location: &str) -> Result<String> {
        ensure!(
            !is_directory(location),
            InvalidPathSnafu {
                message: format!("'{location}' is a directory"),
            }
        );
        let file = self.resolve(location)?;
        match tokio::fs::read_to_string(&file).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => NotFoundSnafu { resource: location }.fail(),
            Err(e) => Err(e).context(ReadSnafu { resource: location }),
        }
    }
}

impl ContentSink for DirectorySource {
    async fn put_data(&self, path: &str, body: String) -> Result<()> {
        let file = self.directory(path).await?.join(DATA_FILE);
        tokio::fs::write(&file, body)
            .await
            .context(WriteSnafu { resource: path })?;
        tracing::debug!("Wrote {}", file.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    fn content_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let pages = dir.path().join("pages");
        fs::create_dir_all(pages.join("b")).expect("b");
        fs::create_dir_all(pages.join("a")).expect("a");
        fs::write(pages.join("readme.txt"), "hello").expect("readme");
        fs::write(pages.join("a").join("type"), "widget").expect("type");
        dir
    }

    #[tokio::test]
    async fn test_listing_marks_directories_and_sorts() {
        let dir = content_tree();
        let source = DirectorySource::new(dir.path());

        let listing = source.list("/pages/").await.expect("listing");
        assert_eq!(listing, vec!["a/", "b/", "readme.txt"]);
    }

    #[tokio::test]
    async fn test_read_text_returns_body_verbatim() {
        let dir = content_tree();
        let source = DirectorySource::new(dir.path());

        assert_eq!(source.read_text("pages/a/type").await.expect("type"), "widget");
    }

    #[tokio::test]
    async fn test_missing_paths() {
        let dir = content_tree();
        let source = DirectorySource::new(dir.path());

        assert!(matches!(
            source.list("nope/").await,
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            source.read_text("pages/b/type").await,
            Err(Error::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_listing_a_file_fails() {
        let dir = content_tree();
        let source = DirectorySource::new(dir.path());

        assert!(matches!(
            source.list("pages/readme.txt").await,
            Err(Error::NotADirectory { .. })
        ));
    }

    #[tokio::test]
    async fn test_put_data_replaces_data_file() {
        let dir = content_tree();
        let source = DirectorySource::new(dir.path());
        fs::write(dir.path().join("pages/a/data.json"), r#"{"old":true}"#).expect("seed");

        source
            .put_data("pages/a/", r#"{"name":"Ada"}"#.to_string())
            .await
            .expect("saved");

        let stored = fs::read_to_string(dir.path().join("pages/a/data.json")).expect("data");
        assert_eq!(stored, r#"{"name":"Ada"}"#);
        assert_eq!(source.read_text("pages/a/type").await.expect("type"), "widget");
    }

    #[tokio::test]
    async fn test_put_data_needs_existing_directory() {
        let dir = content_tree();
        let source = DirectorySource::new(dir.path());

        assert!(matches!(
            source.put_data("pages/missing/", "{}".to_string()).await,
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            source.put_data("pages/readme.txt", "{}".to_string()).await,
            Err(Error::NotADirectory { .. })
        ));
    }

    #[tokio::test]
    async fn test_parent_segments_are_rejected() {
        let dir = content_tree();
        let source = DirectorySource::new(dir.path().join("pages"));

        assert!(matches!(
            source.list("../").await,
            Err(Error::InvalidPath { .. })
        ));
    }
}
