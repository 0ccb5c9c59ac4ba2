#[cfg(test)]
#[path = "ordering_test.rs"]
mod ordering_test;

use crate::core::BoardError;

/// Outcome of a drag gesture as seen by one container.
///
/// A move inside a single container carries both indices. A move between
/// containers is reported twice: once to the source with only
/// `removed_index`, once to the target with only `added_index` and the
/// moved item as `payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResult<T> {
    pub removed_index: Option<usize>,
    pub added_index: Option<usize>,
    pub payload: Option<T>,
}

impl<T> DropResult<T> {
    pub fn moved(removed_index: usize, added_index: usize) -> Self {
        Self {
            removed_index: Some(removed_index),
            added_index: Some(added_index),
            payload: None,
        }
    }

    pub fn removed(removed_index: usize) -> Self {
        Self {
            removed_index: Some(removed_index),
            added_index: None,
            payload: None,
        }
    }

    pub fn added(added_index: usize, payload: T) -> Self {
        Self {
            removed_index: None,
            added_index: Some(added_index),
            payload: Some(payload),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.removed_index.is_none() && self.added_index.is_none()
    }
}

/// Sorts `items` by the position of their key in `order`.
///
/// The sort is stable. Keys missing from `order` rank before every listed
/// key, so unlisted items lead the result in their original relative order.
pub fn map_order<T, K, F>(mut items: Vec<T>, order: &[K], key: F) -> Vec<T>
where
    K: PartialEq,
    F: Fn(&T) -> &K,
{
    items.sort_by_cached_key(|item| {
        let k = key(item);
        order
            .iter()
            .position(|o| o == k)
            .map_or(-1, |pos| pos as isize)
    });
    items
}

/// Splices `items` according to a drop: remove at `removed_index`, then
/// insert at `added_index`.
///
/// Returns a new sequence; `items` is never touched. When only an
/// insertion happens the payload is what gets inserted.
pub fn apply_drag<T: Clone>(items: &[T], drop: &DropResult<T>) -> Result<Vec<T>, BoardError> {
    if drop.is_noop() {
        return Ok(items.to_vec());
    }

    let mut result = items.to_vec();
    let mut item_to_add = drop.payload.clone();

    if let Some(removed) = drop.removed_index {
        if removed >= result.len() {
            return Err(BoardError::IndexOutOfBounds {
                index: removed,
                len: result.len(),
            });
        }
        item_to_add = Some(result.remove(removed));
    }

    if let Some(added) = drop.added_index {
        if added > result.len() {
            return Err(BoardError::IndexOutOfBounds {
                index: added,
                len: result.len(),
            });
        }
        let item = item_to_add.ok_or(BoardError::MissingPayload)?;
        result.insert(added, item);
    }

    Ok(result)
}
