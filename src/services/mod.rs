//! Service Layer
//!
//! Bridges the composition engine to the outside world: content backends
//! and the tokio runtime that network and file I/O run on.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               Workspace (GPUI)               │
//! │        Composer<ContentBackend, ...>         │
//! └──────────────────────────────────────────────┘
//!                       │ list / read_text
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │               ContentBackend                 │
//! │  ┌──────────────┐     ┌──────────────────┐   │
//! │  │ RemoteSource │     │ DirectorySource  │   │
//! │  │  (reqwest)   │     │   (tokio::fs)    │   │
//! │  └──────────────┘     └──────────────────┘   │
//! └──────────────────────────────────────────────┘
//!                       │ run_in_tokio
//!                       ▼
//!                shared tokio runtime
//! ```

mod content;
mod runtime;

pub use content::*;
pub use runtime::*;
