use super::*;

fn letters(s: &str) -> Vec<char> {
    s.chars().collect()
}

// =============================================================
// map_order
// =============================================================

#[test]
fn map_order_follows_order_array() {
    let items = letters("abc");
    let order = letters("cab");
    assert_eq!(map_order(items, &order, |c| c), letters("cab"));
}

#[test]
fn map_order_puts_unlisted_items_first_in_original_order() {
    let items = letters("xaybz");
    let order = letters("ba");
    assert_eq!(map_order(items, &order, |c| c), letters("xyzba"));
}

#[test]
fn map_order_with_empty_order_keeps_storage_order() {
    let items = letters("dcba");
    assert_eq!(map_order(items, &[], |c| c), letters("dcba"));
}

#[test]
fn map_order_by_struct_key() {
    #[derive(Debug, PartialEq)]
    struct Item {
        id: String,
    }
    let items = vec![
        Item { id: "one".into() },
        Item { id: "two".into() },
    ];
    let order = vec!["two".to_string(), "one".to_string()];
    let sorted = map_order(items, &order, |item| &item.id);
    assert_eq!(sorted[0].id, "two");
    assert_eq!(sorted[1].id, "one");
}

// =============================================================
// apply_drag: single container moves
// =============================================================

#[test]
fn moving_last_to_front() {
    let result = apply_drag(&letters("abc"), &DropResult::moved(2, 0)).unwrap();
    assert_eq!(result, letters("cab"));
}

#[test]
fn moving_first_to_back() {
    let result = apply_drag(&letters("abc"), &DropResult::moved(0, 2)).unwrap();
    assert_eq!(result, letters("bca"));
}

#[test]
fn same_index_is_noop() {
    let items = letters("abcd");
    let once = apply_drag(&items, &DropResult::moved(1, 1)).unwrap();
    let twice = apply_drag(&once, &DropResult::moved(1, 1)).unwrap();
    assert_eq!(once, items);
    assert_eq!(twice, items);
}

#[test]
fn repeating_a_real_move_is_not_idempotent() {
    let items = letters("abcd");
    let once = apply_drag(&items, &DropResult::moved(0, 2)).unwrap();
    let twice = apply_drag(&once, &DropResult::moved(0, 2)).unwrap();
    assert_ne!(once, twice);
}

#[test]
fn every_valid_move_is_a_permutation() {
    let items = letters("abcde");
    for removed in 0..items.len() {
        for added in 0..items.len() {
            let result = apply_drag(&items, &DropResult::moved(removed, added)).unwrap();
            assert_eq!(result.len(), items.len());
            assert_eq!(result[added], items[removed]);

            let mut sorted = result.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, items);
        }
    }
}

#[test]
fn input_is_left_untouched() {
    let items = letters("abc");
    let _ = apply_drag(&items, &DropResult::moved(0, 2)).unwrap();
    assert_eq!(items, letters("abc"));
}

// =============================================================
// apply_drag: cross container halves
// =============================================================

#[test]
fn removal_only_drops_the_item() {
    let result = apply_drag(&letters("abc"), &DropResult::removed(1)).unwrap();
    assert_eq!(result, letters("ac"));
}

#[test]
fn addition_only_inserts_payload() {
    let result = apply_drag(&letters("abc"), &DropResult::added(1, 'z')).unwrap();
    assert_eq!(result, letters("azbc"));
}

#[test]
fn addition_at_len_appends() {
    let result = apply_drag(&letters("ab"), &DropResult::added(2, 'z')).unwrap();
    assert_eq!(result, letters("abz"));
}

#[test]
fn addition_into_empty_sequence() {
    let result = apply_drag(&[], &DropResult::added(0, 'z')).unwrap();
    assert_eq!(result, vec!['z']);
}

// =============================================================
// apply_drag: rejected drops
// =============================================================

#[test]
fn drop_without_indices_returns_input() {
    let drop = DropResult::<char> {
        removed_index: None,
        added_index: None,
        payload: Some('z'),
    };
    assert!(drop.is_noop());
    assert_eq!(apply_drag(&letters("abc"), &drop).unwrap(), letters("abc"));
}

#[test]
fn removed_index_out_of_bounds() {
    let err = apply_drag(&letters("abc"), &DropResult::moved(3, 0)).unwrap_err();
    assert!(matches!(err, BoardError::IndexOutOfBounds { index: 3, len: 3 }));
}

#[test]
fn added_index_out_of_bounds_after_removal() {
    // After removing one of three items only indices 0..=2 are valid.
    let err = apply_drag(&letters("abc"), &DropResult::moved(0, 3)).unwrap_err();
    assert!(matches!(err, BoardError::IndexOutOfBounds { index: 3, len: 2 }));
}

#[test]
fn addition_without_payload_is_rejected() {
    let drop = DropResult::<char> {
        removed_index: None,
        added_index: Some(0),
        payload: None,
    };
    let err = apply_drag(&letters("abc"), &drop).unwrap_err();
    assert!(matches!(err, BoardError::MissingPayload));
}
