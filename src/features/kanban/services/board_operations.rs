#[cfg(test)]
#[path = "board_operations_test.rs"]
mod board_operations_test;

use crate::core::models::{Board, Card, Column};
use crate::core::services::{apply_drag, map_order, DropResult, IdProvider};
use crate::core::BoardError;

// Place columns in column order and each column's cards in card order
pub fn arrange_board(board: &Board) -> Board {
    let mut arranged = board.clone();
    arranged.columns = map_order(arranged.columns, &board.column_order, |column| &column.id);
    for column in &mut arranged.columns {
        let cards = std::mem::take(&mut column.cards);
        column.cards = map_order(cards, &column.card_order, |card| &card.id);
    }
    arranged.sync_column_order();
    arranged
}

// Reorder columns after a drag on the board container
pub fn on_column_drop(board: &Board, drop: &DropResult<Column>) -> Result<Board, BoardError> {
    let mut next = board.clone();
    next.columns = apply_drag(&board.columns, drop)?;
    next.sync_column_order();
    log::debug!("column order is now {:?}", next.column_order);
    Ok(next)
}

// Reorder (or add/remove) cards of one column after a drag on its card list
pub fn on_card_drop(
    board: &Board,
    column_id: &str,
    drop: &DropResult<Card>,
) -> Result<Board, BoardError> {
    if drop.is_noop() {
        return Ok(board.clone());
    }

    let mut next = board.clone();
    let column = next
        .columns
        .iter_mut()
        .find(|column| column.id == column_id)
        .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;

    // A card arriving from another column now belongs to this one.
    let drop = match &drop.payload {
        Some(card) if drop.removed_index.is_none() => DropResult {
            removed_index: None,
            added_index: drop.added_index,
            payload: Some(Card {
                column_id: column.id.clone(),
                ..card.clone()
            }),
        },
        _ => drop.clone(),
    };

    column.cards = apply_drag(&column.cards, &drop)?;
    column.sync_card_order();
    log::debug!("card order of {} is now {:?}", column.id, column.card_order);
    Ok(next)
}

// Append a new empty column; rejects blank titles
pub fn add_new_column(
    board: &Board,
    title: &str,
    ids: &dyn IdProvider,
) -> Result<Board, BoardError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(BoardError::EmptyTitle);
    }

    let column = Column::new(ids.next_id(), board.id.clone(), title.to_string());
    log::debug!("adding column {} to board {}", column.id, board.id);

    let mut next = board.clone();
    next.columns.push(column);
    next.sync_column_order();
    Ok(next)
}

// Replace a column in place, or drop it when it is flagged for removal
pub fn update_column(board: &Board, updated: Column) -> Result<Board, BoardError> {
    let index = board
        .columns
        .iter()
        .position(|column| column.id == updated.id)
        .ok_or_else(|| BoardError::ColumnNotFound(updated.id.clone()))?;

    let mut next = board.clone();
    if updated.destroy {
        log::debug!("removing column {}", updated.id);
        next.columns.remove(index);
    } else {
        log::debug!("updating column {}", updated.id);
        next.columns[index] = updated;
    }
    next.sync_column_order();
    Ok(next)
}
