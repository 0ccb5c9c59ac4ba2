use super::*;
use crate::core::services::SequentialIdProvider;

fn hook(board_id: &str) -> BoardHook {
    Owner::new().set();
    use_board(board_id, Arc::new(SequentialIdProvider::new("new")))
}

fn column_ids(hook: &BoardHook) -> Vec<String> {
    hook.board
        .get_untracked()
        .map(|b| b.columns.into_iter().map(|c| c.id).collect())
        .unwrap_or_default()
}

// =============================================================
// Loading
// =============================================================

#[test]
fn known_board_loads_arranged() {
    let board = hook("board-1");
    assert_eq!(column_ids(&board), vec!["column-1", "column-3", "column-2"]);
}

#[test]
fn missing_board_stays_empty_and_rejects_writes() {
    let missing = hook("board-404");
    assert!(missing.board.get_untracked().is_none());

    assert!(!missing.add_new_column.run("A".into()));
    missing.on_column_drop.run(DropResult::moved(0, 0));
    missing
        .on_update_column
        .run(Column::new("column-1".into(), "board-404".into(), "X".into()));

    assert!(missing.board.get_untracked().is_none());
}

// =============================================================
// add_new_column
// =============================================================

#[test]
fn add_new_column_reports_acceptance() {
    let board = hook("board-1");
    assert!(board.add_new_column.run("Review".into()));
    assert_eq!(
        column_ids(&board),
        vec!["column-1", "column-3", "column-2", "new-1"]
    );
}

#[test]
fn blank_column_title_reports_rejection() {
    let board = hook("board-1");
    let before = board.board.get_untracked();
    assert!(!board.add_new_column.run("   ".into()));
    assert_eq!(board.board.get_untracked(), before);
}

// =============================================================
// on_card_drop
// =============================================================

#[test]
fn cross_column_move_commits_both_halves() {
    let board = hook("board-1");
    let moving = board
        .board
        .get_untracked()
        .and_then(|b| b.column("column-1").map(|c| c.cards[0].clone()))
        .unwrap();

    board.on_card_drop.run(vec![
        ("column-1".into(), DropResult::removed(0)),
        ("column-2".into(), DropResult::added(0, moving)),
    ]);

    let after = board.board.get_untracked().unwrap();
    assert!(!after.column("column-1").unwrap().card_order.contains(&"card-1".to_string()));
    assert_eq!(after.column("column-2").unwrap().card_order[0], "card-1");
}

#[test]
fn failing_half_leaves_board_untouched() {
    let board = hook("board-1");
    let before = board.board.get_untracked();
    let moving = before
        .as_ref()
        .and_then(|b| b.column("column-1").map(|c| c.cards[0].clone()))
        .unwrap();

    board.on_card_drop.run(vec![
        ("column-1".into(), DropResult::removed(0)),
        ("column-2".into(), DropResult::added(99, moving)),
    ]);

    assert_eq!(board.board.get_untracked(), before);
}

// =============================================================
// on_update_column
// =============================================================

#[test]
fn destroy_flag_removes_column() {
    let board = hook("board-1");
    let mut doomed = board
        .board
        .get_untracked()
        .and_then(|b| b.column("column-3").cloned())
        .unwrap();
    doomed.destroy = true;

    board.on_update_column.run(doomed);
    assert_eq!(column_ids(&board), vec!["column-1", "column-2"]);
}

// =============================================================
// use_column
// =============================================================

#[test]
fn column_memo_ignores_changes_to_other_columns() {
    let board = hook("board-1");
    let todo = use_column(board.board, "column-1".into());
    let done = use_column(board.board, "column-3".into());
    let done_before = done.column.get_untracked();

    let renamed = Column {
        title: "Renamed".into(),
        ..todo.column.get_untracked()
    };
    board.on_update_column.run(renamed);

    assert_eq!(todo.column.get_untracked().title, "Renamed");
    assert_eq!(done.column.get_untracked(), done_before);
}

#[test]
fn column_index_follows_reorder() {
    let board = hook("board-1");
    let inprogress = use_column(board.board, "column-2".into());
    assert_eq!(inprogress.index.get_untracked(), 2);

    board.on_column_drop.run(DropResult::moved(2, 0));
    assert_eq!(inprogress.index.get_untracked(), 0);
}

#[test]
fn removed_column_memo_keeps_last_state() {
    let board = hook("board-1");
    let done = use_column(board.board, "column-3".into());
    let last = done.column.get_untracked();
    assert_eq!(done.index.get_untracked(), 1);

    let mut doomed = last.clone();
    doomed.destroy = true;
    board.on_update_column.run(doomed);

    assert_eq!(done.column.get_untracked(), last);
    assert_eq!(done.index.get_untracked(), 1);
}
