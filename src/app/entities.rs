//! AppEntities - Global Entity Handles
//!
//! State is split by update frequency: the page changes when a section
//! arrives, the log on every composition outcome.

use gpui::{App, AppContext, Entity, Global};

use crate::binding::Document;
use crate::state::{log_state::LogState, page_state::PageState};

/// Capacity of the composition log
const LOG_CAPACITY: usize = 500;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Composed sections and the page document
    pub page: Entity<PageState>,
    /// Composition log (ring buffer)
    pub logs: Entity<LogState>,
}

impl Global for AppEntities {}

impl AppEntities {
    pub fn init(cx: &mut App) -> Self {
        Self {
            page: cx.new(|_| PageState::new(Document::new())),
            logs: cx.new(|_| LogState::new(LOG_CAPACITY)),
        }
    }
}
