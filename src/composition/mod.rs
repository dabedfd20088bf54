//! Composition - Dynamic Component Composition Engine
//!
//! Walks a content tree at run time and instantiates one component per
//! qualifying directory entry.

pub mod composer;
pub mod definition;
pub mod directory;
pub mod manifest;
pub mod path;
pub mod props;
pub mod source;

pub use composer::{Composer, MissingTypePolicy};
pub use definition::{ComponentDefinition, DefinitionLoader, Registry, SharedDefinition};
pub use directory::DirectorySource;
pub use manifest::{ComponentManifest, ManifestLoader};
pub use props::Props;
pub use source::{ContentSink, ContentSource, HttpSource};
