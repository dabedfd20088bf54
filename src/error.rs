//! Error types for MinEE UI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Network failure or non-success status while fetching content
    #[snafu(display("Transport error at {resource}: {source}"))]
    Transport {
        resource: String,
        source: reqwest::Error,
    },

    /// Local content could not be read
    #[snafu(display("Read error at {resource}: {source}"))]
    Read {
        resource: String,
        source: std::io::Error,
    },

    /// Local content could not be written
    #[snafu(display("Write error at {resource}: {source}"))]
    Write {
        resource: String,
        source: std::io::Error,
    },

    /// Local content does not exist
    #[snafu(display("Not found: {resource}"))]
    NotFound { resource: String },

    /// A listing was requested for something that is not a directory
    #[snafu(display("Not a directory: {resource}"))]
    NotADirectory { resource: String },

    /// Listing body is not a JSON array of strings
    #[snafu(display("Malformed listing at {resource}: {source}"))]
    MalformedListing {
        resource: String,
        source: serde_json::Error,
    },

    /// Component manifest body is not a JSON object with a `kind` field
    #[snafu(display("Malformed component manifest at {resource}: {source}"))]
    MalformedManifest {
        resource: String,
        source: serde_json::Error,
    },

    /// Entity data is not valid JSON
    #[snafu(display("Malformed data at {resource}: {source}"))]
    MalformedData {
        resource: String,
        source: serde_json::Error,
    },

    /// Entity data is valid JSON but not an object
    #[snafu(display("Data at {resource} is not a JSON object"))]
    DataNotObject { resource: String },

    /// No component definition registered for a location
    #[snafu(display("No component definition at {resource}"))]
    UnknownComponent { resource: String },

    /// Manifest names a component kind nobody registered
    #[snafu(display("Unknown component kind '{kind}' at {resource}"))]
    UnknownKind { resource: String, kind: String },

    /// Path cannot be resolved
    #[snafu(display("Invalid path: {message}"))]
    InvalidPath { message: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config files, log directories)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// Whether the addressed content does not exist, locally or on the server
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Transport { source, .. } => {
                source.status() == Some(reqwest::StatusCode::NOT_FOUND)
            }
            _ => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
