#[cfg(test)]
#[path = "use_board_test.rs"]
mod use_board_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::core::models::{Board, Card, Column};
use crate::core::services::{load_board, DropResult, IdProvider};
use crate::core::BoardError;
use crate::features::kanban::services::{
    add_new_column, arrange_board, on_card_drop, on_column_drop, update_column, DragSource,
};

pub struct BoardHook {
    /// `None` when the requested board does not exist.
    pub board: ReadSignal<Option<Board>>,
    pub drag: RwSignal<Option<DragSource>>,
    pub on_column_drop: Callback<DropResult<Column>>,
    /// Applies a card gesture's per-column drops as one update.
    pub on_card_drop: Callback<Vec<(String, DropResult<Card>)>>,
    /// Returns `false` when the title was rejected or there is no board.
    pub add_new_column: Callback<String, bool>,
    pub on_update_column: Callback<Column>,
}

pub fn use_board(board_id: &str, ids: Arc<dyn IdProvider>) -> BoardHook {
    let initial = match load_board(board_id) {
        Ok(board) => Some(arrange_board(&board)),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };
    let board = RwSignal::new(initial);
    let drag = RwSignal::new(None::<DragSource>);
    let board_id: Arc<str> = Arc::from(board_id);

    let on_column_drop = {
        let board_id = board_id.clone();
        Callback::new(move |drop: DropResult<Column>| {
            report(commit(board, &board_id, |current| on_column_drop(current, &drop)));
        })
    };

    let on_card_drop = {
        let board_id = board_id.clone();
        Callback::new(move |drops: Vec<(String, DropResult<Card>)>| {
            report(commit(board, &board_id, |current| {
                drops
                    .iter()
                    .try_fold(current.clone(), |acc, (column_id, drop)| {
                        on_card_drop(&acc, column_id, drop)
                    })
            }));
        })
    };

    let add_new_column = {
        let board_id = board_id.clone();
        Callback::new(move |title: String| {
            report(commit(board, &board_id, |current| {
                add_new_column(current, &title, ids.as_ref())
            }))
        })
    };

    let on_update_column = Callback::new(move |column: Column| {
        report(commit(board, &board_id, |current| update_column(current, column)));
    });

    BoardHook {
        board: board.read_only(),
        drag,
        on_column_drop,
        on_card_drop,
        add_new_column,
        on_update_column,
    }
}

pub struct ColumnHook {
    /// Last known state of the column; kept while the column is being removed.
    pub column: Memo<Column>,
    pub index: Memo<usize>,
}

// Per-column view of the board that only changes when that column does
pub fn use_column(board: ReadSignal<Option<Board>>, column_id: String) -> ColumnHook {
    let id = column_id.clone();
    let column = Memo::new(move |previous: Option<&Column>| {
        board
            .with(|b| b.as_ref().and_then(|b| b.column(&id).cloned()))
            .or_else(|| previous.cloned())
            .unwrap_or_else(|| Column::new(id.clone(), String::new(), String::new()))
    });

    let index = Memo::new(move |previous: Option<&usize>| {
        board
            .with(|b| {
                b.as_ref()
                    .and_then(|b| b.column_order.iter().position(|c| *c == column_id))
            })
            .or_else(|| previous.copied())
            .unwrap_or_default()
    });

    ColumnHook { column, index }
}

// Replace the whole board with the result of `op`, or leave it untouched
fn commit<F>(board: RwSignal<Option<Board>>, board_id: &str, op: F) -> Result<(), BoardError>
where
    F: FnOnce(&Board) -> Result<Board, BoardError>,
{
    let next = board
        .with_untracked(|current| current.as_ref().map(op))
        .ok_or_else(|| BoardError::BoardNotFound(board_id.to_string()))??;
    board.set(Some(next));
    Ok(())
}

fn report(result: Result<(), BoardError>) -> bool {
    match result {
        Ok(()) => true,
        Err(BoardError::EmptyTitle) => {
            log::debug!("ignoring blank title");
            false
        }
        Err(e) => {
            log::warn!("board update rejected: {}", e);
            false
        }
    }
}
