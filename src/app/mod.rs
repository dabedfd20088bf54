//! Application Layer
//!
//! Window setup, global entities, and the workspace that composes the page.

pub mod application;
pub mod entities;
pub mod workspace;
