//! Document - Shared JSON Object Backing Field Properties

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use super::property::Bindable;

#[derive(Debug, Default)]
struct Fields {
    values: Map<String, Value>,
    /// Bumped on every write
    revision: u64,
    /// Revision last written to storage
    saved: u64,
}

/// A shared JSON object. Clones are handles to the same object.
///
/// The document counts its writes so callers can tell whether it holds
/// edits that have not been saved yet.
#[derive(Debug, Clone, Default)]
pub struct Document {
    fields: Arc<RwLock<Fields>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field; missing fields read as `null`
    pub fn get(&self, field: &str) -> Value {
        self.fields.read().values.get(field).cloned().unwrap_or(Value::Null)
    }

    /// Write a field
    pub fn set(&self, field: &str, value: Value) {
        let mut fields = self.fields.write();
        fields.values.insert(field.to_string(), value);
        fields.revision += 1;
    }

    /// Swap in freshly loaded values; the document counts as saved afterwards
    pub fn replace(&self, values: Map<String, Value>) {
        let mut fields = self.fields.write();
        fields.values = values;
        fields.revision += 1;
        fields.saved = fields.revision;
    }

    /// Copy of the whole object with the revision it reflects
    pub fn snapshot(&self) -> (Map<String, Value>, u64) {
        let fields = self.fields.read();
        (fields.values.clone(), fields.revision)
    }

    /// Record that the values as of `revision` are stored
    pub fn mark_saved(&self, revision: u64) {
        let mut fields = self.fields.write();
        fields.saved = fields.saved.max(revision);
    }

    /// Whether writes happened since the last load or save
    pub fn is_dirty(&self) -> bool {
        let fields = self.fields.read();
        fields.revision != fields.saved
    }

    /// Bind one field of this document
    pub fn field(&self, field: impl Into<String>) -> FieldProperty {
        FieldProperty {
            document: self.clone(),
            field: field.into(),
        }
    }
}

/// Property bound to one field of a [`Document`]
#[derive(Debug, Clone)]
pub struct FieldProperty {
    document: Document,
    field: String,
}

impl Bindable<Value> for FieldProperty {
    fn get(&self) -> Value {
        self.document.get(&self.field)
    }

    fn set(&self, value: Value) {
        self.document.set(&self.field, value);
    }
}

/// Views a JSON-valued property as text.
///
/// Strings read as themselves, `null` as the empty string and anything else as
/// its JSON text. Writes always store a JSON string.
#[derive(Debug, Clone)]
pub struct TextProperty<P> {
    inner: P,
}

impl<P: Bindable<Value>> TextProperty<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Bindable<Value>> Bindable<String> for TextProperty<P> {
    fn get(&self) -> String {
        match self.inner.get() {
            Value::String(text) => text,
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    fn set(&self, value: String) {
        self.inner.set(Value::String(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_property_reads_its_writes() {
        let document = Document::new();
        let name = document.field("name");
        name.set(json!("Ada"));
        assert_eq!(name.get(), json!("Ada"));
        assert_eq!(document.get("name"), json!("Ada"));
    }

    #[test]
    fn test_missing_field_is_null() {
        let document = Document::new();
        assert_eq!(document.field("absent").get(), Value::Null);
    }

    #[test]
    fn test_fields_share_one_document() {
        let document = Document::new();
        let first = document.field("count");
        let second = document.clone().field("count");
        first.set(json!(3));
        assert_eq!(second.get(), json!(3));
    }

    #[test]
    fn test_text_property_conversions() {
        let mut seed = Map::new();
        seed.insert("amount".to_string(), json!(12.5));
        let document = Document::new();
        document.replace(seed);

        let amount = TextProperty::new(document.field("amount"));
        assert_eq!(amount.get(), "12.5");

        let empty = TextProperty::new(document.field("missing"));
        assert_eq!(empty.get(), "");

        empty.set("filled".to_string());
        assert_eq!(document.get("missing"), json!("filled"));
        assert_eq!(empty.get(), "filled");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let document = Document::new();
        document.set("a", json!(1));
        let (snapshot, _) = document.snapshot();
        document.set("a", json!(2));
        assert_eq!(snapshot.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_writes_after_snapshot_stay_dirty() {
        let document = Document::new();
        assert!(!document.is_dirty());

        document.set("a", json!(1));
        let (_, revision) = document.snapshot();
        document.set("a", json!(2));
        document.mark_saved(revision);
        assert!(document.is_dirty());

        let (_, revision) = document.snapshot();
        document.mark_saved(revision);
        assert!(!document.is_dirty());
    }

    #[test]
    fn test_replace_is_clean() {
        let document = Document::new();
        document.set("a", json!(1));
        let mut loaded = Map::new();
        loaded.insert("b".to_string(), json!("x"));
        document.replace(loaded);

        assert!(!document.is_dirty());
        assert_eq!(document.get("a"), Value::Null);
        assert_eq!(document.get("b"), json!("x"));
    }
}
