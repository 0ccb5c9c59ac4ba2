#[cfg(test)]
#[path = "drag_drop_test.rs"]
mod drag_drop_test;

use crate::core::models::{Card, Column};
use crate::core::services::DropResult;

/// What is currently being dragged, recorded on `dragstart`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    Column { index: usize },
    Card {
        column_id: String,
        index: usize,
        card: Card,
    },
}

/// Where a dragged card was released.
///
/// `index` is the card it was dropped on, `None` for the empty area below
/// the last card. `len` is the card count of the target column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDropTarget {
    pub column_id: String,
    pub index: Option<usize>,
    pub len: usize,
}

pub fn resolve_column_drop(from: usize, to: usize) -> DropResult<Column> {
    DropResult::moved(from, to)
}

/// Translates a card release into the per-column drops to apply, in order.
pub fn resolve_card_drop(
    source_column: &str,
    source_index: usize,
    target: &CardDropTarget,
    payload: Card,
) -> Vec<(String, DropResult<Card>)> {
    if source_column == target.column_id {
        let added = target.index.unwrap_or(target.len.saturating_sub(1));
        return vec![(
            target.column_id.clone(),
            DropResult {
                removed_index: Some(source_index),
                added_index: Some(added),
                payload: Some(payload),
            },
        )];
    }

    let added = target.index.unwrap_or(target.len);
    vec![
        (source_column.to_string(), DropResult::removed(source_index)),
        (target.column_id.clone(), DropResult::added(added, payload)),
    ]
}
