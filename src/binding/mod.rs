//! Binding - The Bindable Property Contract
//!
//! Every input component edits its value through a [`Bindable`] handle and
//! never learns where the value lives.

mod document;
mod property;
mod store;

pub use document::{Document, FieldProperty, TextProperty};
pub use property::{Bindable, ComputedProperty};
pub use store::{load_data, save_document};
