//! Primitive Components
//!
//! Field-level components bound to one document value.

pub mod date_picker;
pub mod dropdown;
pub mod readonly;
pub mod text_input;
