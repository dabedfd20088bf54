//! MinEE UI Library
//!
//! A native admin client that builds its pages at run time. Each directory
//! of a remote content tree holds one component; the composition engine
//! lists a directory, filters its entries by type and instantiates one
//! component per entry, in listing order.

pub mod app;
pub mod binding;
pub mod components;
pub mod composition;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
