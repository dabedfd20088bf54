//! Layout Components
//!
//! Page frame and log panel.

pub mod log_panel;
pub mod page_layout;
