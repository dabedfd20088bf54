//! Composite Components
//!
//! Containers that arrange composed children.

pub mod board;
pub mod grid;
pub mod table;
