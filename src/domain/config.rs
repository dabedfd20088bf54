//! Config - Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::composition::MissingTypePolicy;
use crate::composition::path::is_directory;
use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Content server connection
    pub server: ServerConfig,
    /// Page composed at startup
    pub page: PageConfig,
    /// Composition engine behaviour
    pub composition: CompositionConfig,
    /// Logging
    pub logging: LoggingConfig,
}

/// Content server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the content server, ending in `/`
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Serve content from this local directory instead of the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 10,
            content_dir: None,
        }
    }
}

/// Page configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    /// Window and header title
    pub title: String,
    /// Directory composed as the page body
    pub root: String,
    /// Only compose root entries of this type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Resolve entries concurrently instead of one by one
    pub concurrent: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "MinEE".to_string(),
            root: "/".to_string(),
            filter: None,
            concurrent: false,
        }
    }
}

/// Composition engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CompositionConfig {
    /// Policy for entries whose type tag cannot be fetched
    pub missing_type: MissingTypePolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily rolling log file to the data directory
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

impl AppConfig {
    /// Check values the type system cannot
    pub fn validate(&self) -> Result<()> {
        if self.server.content_dir.is_none() {
            let url = reqwest::Url::parse(&self.server.base_url).map_err(|e| Error::Invalid {
                message: format!("server.base_url '{}': {e}", self.server.base_url),
            })?;
            if url.cannot_be_a_base() || !url.path().ends_with('/') {
                return Err(Error::Invalid {
                    message: format!("server.base_url '{}' must end with '/'", self.server.base_url),
                });
            }
        }
        if self.server.timeout_secs == 0 {
            return Err(Error::Invalid {
                message: "server.timeout_secs must be greater than zero".to_string(),
            });
        }
        if !is_directory(&self.page.root) {
            return Err(Error::Invalid {
                message: format!("page.root '{}' must end with '/'", self.page.root),
            });
        }
        if self.page.filter.as_deref() == Some("") {
            return Err(Error::Invalid {
                message: "page.filter must not be empty; omit it to disable filtering".to_string(),
            });
        }
        Ok(())
    }
}
