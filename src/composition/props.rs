//! Props - Options Forwarded to Component Definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Key injected into every constructed component's props
pub const PATH_KEY: &str = "path";

/// An opaque JSON object passed through to component definitions.
///
/// The engine only ever adds the `path` key; everything else belongs to the
/// caller and the component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of these props with `path` set to exactly `path`
    pub fn with_path(&self, path: &str) -> Self {
        let mut props = self.clone();
        props.insert(PATH_KEY, Value::String(path.to_string()));
        props
    }

    /// `self` layered over `defaults`; keys present in `self` win
    pub fn over(&self, defaults: &Props) -> Self {
        let mut map = defaults.0.clone();
        map.extend(self.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(map)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of `key`, if it is a string
    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Boolean value of `key`; anything but `true` reads as false
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Unsigned integer value of `key`
    pub fn uint(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    /// The injected component path
    pub fn path(&self) -> Option<&str> {
        self.str(PATH_KEY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Props {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Props {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(Error::Invalid {
                message: format!("props must be a JSON object, got {other}"),
            }),
        }
    }
}
