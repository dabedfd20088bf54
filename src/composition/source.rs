//! Content Sources
//!
//! Where listings, type tags and component manifests come from.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use snafu::ResultExt;

use super::path::LISTING_QUERY;
use crate::error::{MalformedListingSnafu, Result, TransportSnafu};

/// Read access to the content tree.
///
/// Futures are not required to be `Send`; composition runs on a single
/// cooperative executor.
pub trait ContentSource {
    /// Fetch the listing of the directory at `path`
    fn list(&self, path: &str) -> impl Future<Output = Result<Vec<String>>>;

    /// Fetch the body at `location` as text
    fn read_text(&self, location: &str) -> impl Future<Output = Result<String>>;
}

impl<S: ContentSource> ContentSource for &S {
    fn list(&self, path: &str) -> impl Future<Output = Result<Vec<String>>> {
        (**self).list(path)
    }

    fn read_text(&self, location: &str) -> impl Future<Output = Result<String>> {
        (**self).read_text(location)
    }
}

/// Write access to entity data.
///
/// Each entity directory keeps its data object in `data.json`; a save
/// replaces that object as a whole.
pub trait ContentSink {
    /// Replace the data object of the entity directory at `path`
    fn put_data(&self, path: &str, body: String) -> impl Future<Output = Result<()>>;
}

impl<S: ContentSink> ContentSink for &S {
    fn put_data(&self, path: &str, body: String) -> impl Future<Output = Result<()>> {
        (**self).put_data(path, body)
    }
}

/// Parse a listing body into its segments
pub(crate) fn parse_listing(resource: &str, body: &str) -> Result<Vec<String>> {
    serde_json::from_str(body).context(MalformedListingSnafu { resource })
}

/// Content server reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// Create a source rooted at `base` (e.g. `http://localhost:8080/`)
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context(TransportSnafu {
                resource: base.to_string(),
            })?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve a content path against the base URL
    pub fn url(&self, location: &str) -> Result<Url> {
        self.base.join(location).map_err(|e| crate::error::Error::InvalidPath {
            message: format!("cannot join '{location}' onto {}: {e}", self.base),
        })
    }

    /// `GET <path>?json`
    pub async fn listing(&self, path: &str) -> Result<Vec<String>> {
        let mut url = self.url(path)?;
        url.set_query(Some(LISTING_QUERY));
        tracing::debug!("GET {}", url);

        let body = self.get(url.clone()).await?;
        parse_listing(url.as_str(), &body)
    }

    /// `GET <location>` as plain text
    pub async fn text(&self, location: &str) -> Result<String> {
        let url = self.url(location)?;
        tracing::trace!("GET {}", url);
        self.get(url).await
    }

    /// `PUT <path>` with the data object as the body.
    ///
    /// No `Content-Type` is sent; the server derives the entity's type tag
    /// from it, and a save must leave that tag alone.
    pub async fn put(&self, path: &str, body: String) -> Result<()> {
        let url = self.url(path)?;
        tracing::debug!("PUT {} ({} bytes)", url, body.len());
        let resource = url.to_string();
        self.client
            .put(url)
            .body(body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .context(TransportSnafu { resource })?;
        Ok(())
    }

    async fn get(&self, url: Url) -> Result<String> {
        let resource = url.to_string();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .context(TransportSnafu {
                resource: resource.as_str(),
            })?;
        response.text().await.context(TransportSnafu { resource })
    }
}

impl ContentSource for HttpSource {
    async fn list(&self, path: &str) -> Result<Vec<String>> {
        self.listing(path).await
    }

    async fn read_text(&self, location: &str) -> Result<String> {
        self.text(location).await
    }
}

impl ContentSink for HttpSource {
    async fn put_data(&self, path: &str, body: String) -> Result<()> {
        self.put(path, body).await
    }
}
