//! Content Backends
//!
//! The content source the desktop shell composes from and saves page data
//! to, either the HTTP content server or a local content directory. Both need
//! tokio, so every request goes through the runtime bridge.

use std::time::Duration;

use reqwest::Url;

use super::runtime::run_in_tokio;
use crate::composition::{ContentSink, ContentSource, DirectorySource, HttpSource};
use crate::domain::config::ServerConfig;
use crate::error::{Error, Result};

/// HTTP source whose requests run on the shared tokio runtime
#[derive(Debug, Clone)]
pub struct RemoteSource {
    http: HttpSource,
}

impl RemoteSource {
    pub fn new(http: HttpSource) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpSource {
        &self.http
    }
}

impl ContentSource for RemoteSource {
    async fn list(&self, path: &str) -> Result<Vec<String>> {
        let http = self.http.clone();
        let path = path.to_string();
        run_in_tokio(async move { http.listing(&path).await }).await
    }

    async fn read_text(&self, location: &str) -> Result<String> {
        let http = self.http.clone();
        let location = location.to_string();
        run_in_tokio(async move { http.text(&location).await }).await
    }
}

impl ContentSink for RemoteSource {
    async fn put_data(&self, path: &str, body: String) -> Result<()> {
        let http = self.http.clone();
        let path = path.to_string();
        run_in_tokio(async move { http.put(&path, body).await }).await
    }
}

/// Configured content backend
#[derive(Debug, Clone)]
pub enum ContentBackend {
    Remote(RemoteSource),
    Local(DirectorySource),
}

impl ContentBackend {
    /// Build the backend described by `config`; a content directory wins over
    /// the server URL.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        if let Some(dir) = &config.content_dir {
            tracing::info!("Composing from local content directory {}", dir.display());
            return Ok(Self::Local(DirectorySource::new(dir.clone())));
        }

        let base = Url::parse(&config.base_url).map_err(|e| Error::Invalid {
            message: format!("server.base_url '{}': {e}", config.base_url),
        })?;
        tracing::info!("Composing from content server {}", base);
        let http = HttpSource::new(base, Duration::from_secs(config.timeout_secs))?;
        Ok(Self::Remote(RemoteSource::new(http)))
    }

    /// Human-readable origin, shown in the header
    pub fn describe(&self) -> String {
        match self {
            Self::Remote(remote) => remote.http().base().to_string(),
            Self::Local(local) => local.root().display().to_string(),
        }
    }
}

impl ContentSource for ContentBackend {
    async fn list(&self, path: &str) -> Result<Vec<String>> {
        match self {
            Self::Remote(remote) => remote.list(path).await,
            Self::Local(local) => {
                let local = local.clone();
                let path = path.to_string();
                run_in_tokio(async move { local.list(&path).await }).await
            }
        }
    }

    async fn read_text(&self, location: &str) -> Result<String> {
        match self {
            Self::Remote(remote) => remote.read_text(location).await,
            Self::Local(local) => {
                let local = local.clone();
                let location = location.to_string();
                run_in_tokio(async move { local.read_text(&location).await }).await
            }
        }
    }
}

impl ContentSink for ContentBackend {
    async fn put_data(&self, path: &str, body: String) -> Result<()> {
        match self {
            Self::Remote(remote) => remote.put_data(path, body).await,
            Self::Local(local) => {
                let local = local.clone();
                let path = path.to_string();
                run_in_tokio(async move { local.put_data(&path, body).await }).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_content_dir_wins() {
        let config = ServerConfig {
            content_dir: Some("/srv/content".into()),
            ..Default::default()
        };
        let backend = ContentBackend::from_config(&config).expect("backend");
        assert!(matches!(backend, ContentBackend::Local(_)));
        assert_eq!(backend.describe(), "/srv/content");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ServerConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            ContentBackend::from_config(&config),
            Err(Error::Invalid { .. })
        ));
    }

    #[test]
    fn test_local_backend_lists() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("a")).expect("a");
        let config = ServerConfig {
            content_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let backend = ContentBackend::from_config(&config).expect("backend");
        let listing = futures::executor::block_on(backend.list("/"));
        assert_eq!(listing.expect("listing"), vec!["a/"]);
    }

    #[test]
    fn test_local_backend_saves_data() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("profile")).expect("profile");
        let backend = ContentBackend::Local(DirectorySource::new(dir.path()));

        futures::executor::block_on(backend.put_data("/profile/", r#"{"a":1}"#.to_string()))
            .expect("saved");
        let stored = fs::read_to_string(dir.path().join("profile/data.json")).expect("data");
        assert_eq!(stored, r#"{"a":1}"#);
    }

    #[test]
    fn test_remote_source_runs_off_tokio() {
        // Drive the remote source from a non-tokio executor, as GPUI does.
        let listing = futures::executor::block_on(async {
            let server = run_in_tokio(async {
                let server = MockServer::start().await;
                Mock::given(method("GET"))
                    .and(path("/pages/"))
                    .respond_with(ResponseTemplate::new(200).set_body_string(r#"["a/"]"#))
                    .mount(&server)
                    .await;
                server
            })
            .await;

            let config = ServerConfig {
                base_url: format!("{}/", server.uri()),
                ..Default::default()
            };
            let backend = ContentBackend::from_config(&config).expect("backend");
            let listing = backend.list("pages/").await;
            drop(server);
            listing
        });
        assert_eq!(listing.expect("listing"), vec!["a/"]);
    }
}
