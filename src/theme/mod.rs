//! Theme - Colors used by the components

pub mod colors;
