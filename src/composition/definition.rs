//! Component Definitions
//!
//! A definition is the single capability "build a node from props". Loaders
//! find the definition for a definition location at run time.

use std::future::Future;
use std::sync::Arc;

use ahash::AHashMap;

use super::props::Props;
use crate::error::Result;

/// Constructs a renderable node from props
pub trait ComponentDefinition<N> {
    fn construct(&self, props: Props) -> N;
}

impl<N, F> ComponentDefinition<N> for F
where
    F: Fn(Props) -> N,
{
    fn construct(&self, props: Props) -> N {
        self(props)
    }
}

/// Shared, type-erased definition handle
pub type SharedDefinition<N> = Arc<dyn ComponentDefinition<N> + Send + Sync>;

/// Finds the component definition stored at a definition location
pub trait DefinitionLoader<N> {
    fn load(&self, location: &str) -> impl Future<Output = Result<SharedDefinition<N>>>;
}

/// Named definitions
pub struct Registry<N> {
    definitions: AHashMap<String, SharedDefinition<N>>,
}

impl<N> Registry<N> {
    pub fn new() -> Self {
        Self {
            definitions: AHashMap::new(),
        }
    }

    /// Register `definition` under `key`, replacing any previous one
    pub fn register(
        &mut self,
        key: impl Into<String>,
        definition: impl ComponentDefinition<N> + Send + Sync + 'static,
    ) -> &mut Self {
        self.definitions.insert(key.into(), Arc::new(definition));
        self
    }

    pub fn get(&self, key: &str) -> Option<SharedDefinition<N>> {
        self.definitions.get(key).cloned()
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

}

impl<N> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for Registry<N> {
    fn clone(&self) -> Self {
        Self {
            definitions: self.definitions.clone(),
        }
    }
}

impl<N> std::fmt::Debug for Registry<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keys_sorted() {
        let mut registry: Registry<u8> = Registry::new();
        registry.register("b", |_: Props| 2).register("a", |_: Props| 1);
        assert_eq!(registry.keys(), vec!["a", "b"]);
        assert_eq!(registry.get("a").map(|d| d.construct(Props::new())), Some(1));
    }
}
