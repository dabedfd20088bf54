//! Composer - Directory-to-Component Resolution
//!
//! Turns a path in the content tree into instantiated components:
//!
//! ```text
//! load_components("pages/", opts, Some("widget"))
//!       │
//!       ├─ GET pages/?json              → ["a/", "b/", "readme.txt"]
//!       ├─ GET pages/a/type             → "widget"   ✓
//!       ├─ load_component("pages/a/")   → definition(pages/a/component.json)
//!       └─ GET pages/b/type             → "panel"    ✗
//! ```
//!
//! Nothing is cached: every call re-fetches listings, types and definitions.

use std::marker::PhantomData;

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use snafu::ensure;

use super::definition::DefinitionLoader;
use super::path::{child, definition_location, is_directory, type_location};
use super::props::Props;
use super::source::ContentSource;
use crate::error::{InvalidPathSnafu, Result};

/// What to do when an entry's type tag cannot be fetched while filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTypePolicy {
    /// The whole directory resolution fails
    #[default]
    Fail,
    /// The entry is treated as not matching the filter
    Exclude,
}

/// Composition engine over a content source and a definition loader
pub struct Composer<S, L, N> {
    source: S,
    loader: L,
    missing_type: MissingTypePolicy,
    _node: PhantomData<fn() -> N>,
}

impl<S, L, N> Composer<S, L, N>
where
    S: ContentSource,
    L: DefinitionLoader<N>,
{
    pub fn new(source: S, loader: L) -> Self {
        Self {
            source,
            loader,
            missing_type: MissingTypePolicy::default(),
            _node: PhantomData,
        }
    }

    /// Set the policy for failed type fetches
    pub fn with_missing_type(mut self, policy: MissingTypePolicy) -> Self {
        self.missing_type = policy;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Resolve the component at `path` and construct it with
    /// `{...options, path}`.
    pub async fn load_component(&self, path: &str, options: &Props) -> Result<N> {
        ensure!(
            !path.is_empty(),
            InvalidPathSnafu {
                message: "component path is empty",
            }
        );

        let location = definition_location(path);
        let definition = self.loader.load(&location).await?;
        Ok(definition.construct(options.with_path(path)))
    }

    /// Resolve every qualifying sub-directory of `path`, in listing order.
    ///
    /// Entries are handled strictly one after another. The first failure
    /// aborts the call and later entries are never requested.
    pub async fn load_components(
        &self,
        path: &str,
        options: &Props,
        filter: Option<&str>,
    ) -> Result<Vec<N>> {
        let entries = self.source.list(path).await?;
        tracing::debug!("{} lists {} entries", path, entries.len());

        let mut nodes = Vec::new();
        for entry in &entries {
            if !is_directory(entry) {
                tracing::trace!("Skipping non-directory entry {}{}", path, entry);
                continue;
            }

            let entry_path = child(path, entry);
            if let Some(filter) = filter {
                if !self.type_matches(&entry_path, filter).await? {
                    continue;
                }
            }

            nodes.push(self.load_component(&entry_path, options).await?);
        }

        Ok(nodes)
    }

    /// Fan-out variant of [`Composer::load_components`].
    ///
    /// All type fetches run concurrently, then all eligible components are
    /// resolved concurrently. The result keeps listing order and the first
    /// failure still fails the whole call, but unlike the sequential variant
    /// entries after a failing one may already have been requested.
    pub async fn load_components_concurrent(
        &self,
        path: &str,
        options: &Props,
        filter: Option<&str>,
    ) -> Result<Vec<N>> {
        let entries = self.source.list(path).await?;
        let candidates: Vec<String> = entries
            .iter()
            .filter(|entry| is_directory(entry))
            .map(|entry| child(path, entry))
            .collect();

        let eligible: Vec<&String> = match filter {
            None => candidates.iter().collect(),
            Some(filter) => {
                let verdicts = try_join_all(
                    candidates
                        .iter()
                        .map(|candidate| self.type_matches(candidate, filter)),
                )
                .await?;
                candidates
                    .iter()
                    .zip(verdicts)
                    .filter_map(|(candidate, keep)| keep.then_some(candidate))
                    .collect()
            }
        };

        try_join_all(
            eligible
                .into_iter()
                .map(|entry_path| self.load_component(entry_path, options)),
        )
        .await
    }

    async fn type_matches(&self, entry_path: &str, filter: &str) -> Result<bool> {
        match self.source.read_text(&type_location(entry_path)).await {
            Ok(entry_type) => {
                let matches = entry_type == filter;
                if !matches {
                    tracing::trace!("{} has type '{}', want '{}'", entry_path, entry_type, filter);
                }
                Ok(matches)
            }
            Err(e) if self.missing_type == MissingTypePolicy::Exclude => {
                tracing::debug!("Excluding {}: type unavailable ({})", entry_path, e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
