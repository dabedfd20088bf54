//! Components - Presentational Components and the Node Catalog
//!
//! Components never do I/O. Inputs read and write their value through a
//! [`Bindable`] handle; containers receive already composed children.

use std::sync::Arc;

use gpui::{ElementId, SharedString};

use crate::binding::Bindable;

pub mod catalog;
pub mod composite;
pub mod layout;
pub mod node;
pub mod primitives;
pub mod render;

/// String binding shared by the input components
pub type TextBinding = Arc<dyn Bindable<String> + Send + Sync>;

/// Element id unique to a component path
pub fn element_id(prefix: &str, path: &str) -> ElementId {
    ElementId::Name(SharedString::from(format!("{prefix}:{path}")))
}
