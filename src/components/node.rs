//! Node - Renderable Result of a Component Definition

use serde_json::Value;

use crate::composition::Props;
use crate::composition::path::last_segment;
use crate::state::page_state::SectionRequest;

/// Widest table layout accepted from a manifest
pub const MAX_COLUMNS: usize = 12;

/// Built-in component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Textarea,
    Dropdown,
    DatePicker,
    Readonly,
    Table,
    Grid,
    Board,
    Layout,
}

impl Kind {
    pub const ALL: [Kind; 9] = [
        Kind::Text,
        Kind::Textarea,
        Kind::Dropdown,
        Kind::DatePicker,
        Kind::Readonly,
        Kind::Table,
        Kind::Grid,
        Kind::Board,
        Kind::Layout,
    ];

    /// Name used in component manifests
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::Textarea => "textarea",
            Kind::Dropdown => "dropdown",
            Kind::DatePicker => "datepicker",
            Kind::Readonly => "readonly",
            Kind::Table => "table",
            Kind::Grid => "grid",
            Kind::Board => "board",
            Kind::Layout => "layout",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Containers compose their own directory as children
    pub fn is_container(&self) -> bool {
        matches!(self, Kind::Table | Kind::Grid | Kind::Board | Kind::Layout)
    }
}

/// A dropdown choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

/// A constructed component: its kind and the props it was built with
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: Kind,
    pub props: Props,
}

impl Node {
    pub fn new(kind: Kind, props: Props) -> Self {
        Self { kind, props }
    }

    /// The resolved location of this component
    pub fn path(&self) -> &str {
        self.props.path().unwrap_or_default()
    }

    /// Document field bound by this component
    pub fn field(&self) -> String {
        match self.props.str("field") {
            Some(field) => field.to_string(),
            None => last_segment(self.path()).to_string(),
        }
    }

    /// Caption shown next to the component, falling back to the field name
    pub fn label(&self) -> String {
        match self.props.str("label") {
            Some(label) => label.to_string(),
            None => self.field(),
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.props.str("placeholder")
    }

    pub fn read_only(&self) -> bool {
        self.props.flag("readOnly")
    }

    /// Type filter applied when composing this container's children
    pub fn filter(&self) -> Option<&str> {
        self.props.str("filter")
    }

    /// Options handed to every child of this container (`childProps`)
    pub fn child_options(&self) -> Props {
        self.props
            .get("childProps")
            .cloned()
            .and_then(|value| Props::try_from(value).ok())
            .unwrap_or_default()
    }

    /// The section a container composes from its own directory
    pub fn section(&self) -> Option<SectionRequest> {
        self.kind.is_container().then(|| {
            SectionRequest::new(self.path(), self.filter()).with_options(self.child_options())
        })
    }

    /// Dropdown choices; plain strings use the same value and label
    pub fn choices(&self) -> Vec<Choice> {
        let Some(Value::Array(items)) = self.props.get("options") else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(value) => Some(Choice {
                    value: value.clone(),
                    label: value.clone(),
                }),
                Value::Object(map) => {
                    let value = map.get("value")?.as_str()?.to_string();
                    let label = map
                        .get("label")
                        .and_then(Value::as_str)
                        .unwrap_or(value.as_str())
                        .to_string();
                    Some(Choice { value, label })
                }
                _ => None,
            })
            .collect()
    }

    /// Table column captions
    pub fn headers(&self) -> Vec<String> {
        match self.props.get("headers") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Cells per table row, between one and [`MAX_COLUMNS`]
    pub fn columns(&self) -> usize {
        self.props.uint("columns").map_or(1, |columns| {
            usize::try_from(columns).map_or(MAX_COLUMNS, |columns| columns.clamp(1, MAX_COLUMNS))
        })
    }
}
