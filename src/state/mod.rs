//! State - GPUI Entity State Types
//!
//! These types hold what the window shows and are wrapped in `Entity<T>`.

pub mod log_state;
pub mod page_state;
