#[cfg(test)]
#[path = "column_operations_test.rs"]
mod column_operations_test;

use crate::core::models::{Card, Column};
use crate::core::services::{map_order, IdProvider};
use crate::core::BoardError;

/// Button pressed in the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Confirm,
    Close,
}

// Cards in render order
pub fn ordered_cards(column: &Column) -> Vec<Card> {
    map_order(column.cards.clone(), &column.card_order, |card| &card.id)
}

// Copy of the column carrying the edited title
pub fn rename_column(column: &Column, title: &str) -> Column {
    Column {
        title: title.to_string(),
        ..column.clone()
    }
}

// Copy of the column with a new card appended; rejects blank titles
pub fn add_new_card(
    column: &Column,
    title: &str,
    ids: &dyn IdProvider,
) -> Result<Column, BoardError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(BoardError::EmptyTitle);
    }

    let card = Card::new(
        ids.next_id(),
        column.board_id.clone(),
        column.id.clone(),
        title.to_string(),
    );
    log::debug!("adding card {} to column {}", card.id, column.id);

    let mut next = column.clone();
    next.cards = ordered_cards(column);
    next.cards.push(card);
    next.sync_card_order();
    Ok(next)
}

/// Column to emit for a dialog answer: a removal request on confirm,
/// nothing on close.
pub fn confirm_modal_action(column: &Column, action: ModalAction) -> Option<Column> {
    match action {
        ModalAction::Confirm => Some(Column {
            destroy: true,
            ..column.clone()
        }),
        ModalAction::Close => None,
    }
}
