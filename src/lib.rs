//! Kanban board UI: ordered columns of ordered cards with drag-and-drop
//! reordering, inline title editing and column/card creation and removal.
//!
//! State lives in memory, seeded from a bundled fixture, and is replaced
//! wholesale by pure operations in `features::kanban::services` on every
//! change.

pub mod app;
pub mod config;
pub mod core;
pub mod features;
pub mod pages;
pub mod util;
