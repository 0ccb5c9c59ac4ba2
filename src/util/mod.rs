//! Small browser-side helpers shared by the board components.

pub mod content_editable;
