//! PageState - Composed Sections and the Page Document
//!
//! Every container on the page composes one directory. The result for each
//! section is kept here, keyed by directory and filter, so the page can be
//! rendered on every frame without asking the composer again.

use std::fmt;

use ahash::AHashMap;

use crate::binding::Document;
use crate::components::node::Node;
use crate::composition::Props;

/// Progress of one asynchronous result
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Identity of a composed section: a directory and the type filter applied
/// to its entries. The same directory under two filters is two sections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionKey {
    pub path: String,
    pub filter: Option<String>,
}

impl SectionKey {
    pub fn new(path: impl Into<String>, filter: Option<&str>) -> Self {
        Self {
            path: path.into(),
            filter: filter.map(str::to_string),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(filter) => write!(f, "{} [{filter}]", self.path),
            None => f.write_str(&self.path),
        }
    }
}

/// A section the page wants composed, with the options its children get
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRequest {
    pub key: SectionKey,
    pub options: Props,
}

impl SectionRequest {
    pub fn new(path: impl Into<String>, filter: Option<&str>) -> Self {
        Self {
            key: SectionKey::new(path, filter),
            options: Props::new(),
        }
    }

    pub fn with_options(mut self, options: Props) -> Self {
        self.options = options;
        self
    }
}

/// Sections composed for the current page
#[derive(Debug, Default)]
pub struct PageState {
    sections: AHashMap<SectionKey, Loadable<Vec<Node>>>,
    document: Document,
    generation: u64,
}

impl PageState {
    pub fn new(document: Document) -> Self {
        Self {
            sections: AHashMap::new(),
            document,
            generation: 0,
        }
    }

    /// Mark `key` as loading.
    ///
    /// Returns false if the section was already requested since the last
    /// reload.
    pub fn begin(&mut self, key: &SectionKey) -> bool {
        if self.sections.contains_key(key) {
            return false;
        }
        self.sections.insert(key.clone(), Loadable::Loading);
        true
    }

    /// Store the outcome for `key`.
    ///
    /// Results started before the latest reload are dropped.
    pub fn finish(
        &mut self,
        key: &SectionKey,
        generation: u64,
        result: Result<Vec<Node>, String>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(section) = self.sections.get_mut(key) else {
            return false;
        };
        *section = match result {
            Ok(nodes) => Loadable::Ready(nodes),
            Err(message) => Loadable::Failed(message),
        };
        true
    }

    pub fn section(&self, key: &SectionKey) -> Option<&Loadable<Vec<Node>>> {
        self.sections.get(key)
    }

    /// Forget every section; field values in the document are kept
    pub fn reload(&mut self) {
        self.sections.clear();
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}
