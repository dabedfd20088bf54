//! Manifest Loader
//!
//! Reads `<path>component.json` from the content tree and dispatches the
//! declared kind to a registered definition.

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use std::sync::Arc;

use super::definition::{ComponentDefinition, DefinitionLoader, Registry, SharedDefinition};
use super::props::Props;
use super::source::ContentSource;
use crate::error::{MalformedManifestSnafu, Result, UnknownComponentSnafu, UnknownKindSnafu};

/// Body of a component definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentManifest {
    /// Name of a registered component kind
    pub kind: String,
    /// Props applied beneath the caller's options
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,
}

impl ComponentManifest {
    pub fn parse(resource: &str, body: &str) -> Result<Self> {
        serde_json::from_str(body).context(MalformedManifestSnafu { resource })
    }
}

/// Loader that asks the content tree which kind lives at a location
#[derive(Debug, Clone)]
pub struct ManifestLoader<S, N> {
    source: S,
    kinds: Registry<N>,
}

impl<S: ContentSource, N> ManifestLoader<S, N> {
    pub fn new(source: S, kinds: Registry<N>) -> Self {
        Self { source, kinds }
    }

    pub fn kinds(&self) -> &Registry<N> {
        &self.kinds
    }
}

/// A definition whose props are layered over manifest defaults
struct WithDefaults<N> {
    defaults: Props,
    inner: SharedDefinition<N>,
}

impl<N> ComponentDefinition<N> for WithDefaults<N> {
    fn construct(&self, props: Props) -> N {
        self.inner.construct(props.over(&self.defaults))
    }
}

impl<S: ContentSource, N: 'static> DefinitionLoader<N> for ManifestLoader<S, N> {
    async fn load(&self, location: &str) -> Result<SharedDefinition<N>> {
        let body = match self.source.read_text(location).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => return UnknownComponentSnafu { resource: location }.fail(),
            Err(e) => return Err(e),
        };
        let manifest = ComponentManifest::parse(location, &body)?;
        tracing::trace!("{} declares kind '{}'", location, manifest.kind);

        let Some(definition) = self.kinds.get(&manifest.kind) else {
            return UnknownKindSnafu {
                resource: location,
                kind: manifest.kind,
            }
            .fail();
        };
        if manifest.props.is_empty() {
            return Ok(definition);
        }
        let layered: SharedDefinition<N> = Arc::new(WithDefaults {
            defaults: manifest.props,
            inner: definition,
        });
        Ok(layered)
    }
}
