use super::*;

fn payload() -> Card {
    Card::new("k".into(), "b".into(), "a".into(), "K".into())
}

fn target(column_id: &str, index: Option<usize>, len: usize) -> CardDropTarget {
    CardDropTarget {
        column_id: column_id.into(),
        index,
        len,
    }
}

// =============================================================
// Columns
// =============================================================

#[test]
fn column_drop_carries_both_indices() {
    let drop = resolve_column_drop(2, 0);
    assert_eq!(drop.removed_index, Some(2));
    assert_eq!(drop.added_index, Some(0));
}

// =============================================================
// Cards within one column
// =============================================================

#[test]
fn same_column_drop_on_card() {
    let drops = resolve_card_drop("a", 3, &target("a", Some(1), 4), payload());
    assert_eq!(drops.len(), 1);
    assert_eq!(drops[0].0, "a");
    assert_eq!(drops[0].1.removed_index, Some(3));
    assert_eq!(drops[0].1.added_index, Some(1));
}

#[test]
fn same_column_drop_below_last_card_moves_to_end() {
    let drops = resolve_card_drop("a", 0, &target("a", None, 4), payload());
    assert_eq!(drops[0].1.added_index, Some(3));
}

// =============================================================
// Cards across columns
// =============================================================

#[test]
fn cross_column_drop_removes_then_adds() {
    let drops = resolve_card_drop("a", 1, &target("b", Some(0), 2), payload());
    assert_eq!(drops.len(), 2);

    assert_eq!(drops[0].0, "a");
    assert_eq!(drops[0].1, DropResult::removed(1));

    assert_eq!(drops[1].0, "b");
    assert_eq!(drops[1].1.removed_index, None);
    assert_eq!(drops[1].1.added_index, Some(0));
    assert_eq!(drops[1].1.payload.as_ref().map(|c| c.id.as_str()), Some("k"));
}

#[test]
fn cross_column_drop_on_empty_area_appends() {
    let drops = resolve_card_drop("a", 0, &target("b", None, 2), payload());
    assert_eq!(drops[1].1.added_index, Some(2));
}

#[test]
fn cross_column_drop_into_empty_column() {
    let drops = resolve_card_drop("a", 0, &target("b", None, 0), payload());
    assert_eq!(drops[1].1.added_index, Some(0));
}

