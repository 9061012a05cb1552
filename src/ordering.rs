use crate::item::ScopeItem;
use crate::progress::clamp_percent;

/// Pure move of one item to a new position. Returns a new list with
/// `order_index` reassigned `0..n-1` in the new order. Equal or out-of-range
/// indices return the input unchanged, original indexes included.
pub fn move_item(items: &[ScopeItem], from_index: usize, to_index: usize) -> Vec<ScopeItem> {
    if from_index == to_index || from_index >= items.len() || to_index >= items.len() {
        return items.to_vec();
    }
    let mut reordered = items.to_vec();
    let moved = reordered.remove(from_index);
    reordered.insert(to_index, moved);
    for (index, item) in reordered.iter_mut().enumerate() {
        item.order_index = index as u32;
    }
    reordered
}

/// Apply a move optimistically and run the caller's commit hook on the new
/// order. When the hook fails, the inverse move restores the prior order and
/// the error is handed back. Returns whether a move actually happened; a
/// no-op move never invokes the hook.
pub fn apply_move_with<F, E>(
    items: &mut Vec<ScopeItem>,
    from_index: usize,
    to_index: usize,
    commit: F,
) -> Result<bool, E>
where
    F: FnOnce(&[ScopeItem]) -> Result<(), E>,
{
    if from_index == to_index || from_index >= items.len() || to_index >= items.len() {
        return Ok(false);
    }
    let reordered = move_item(items, from_index, to_index);
    *items = reordered;
    match commit(items) {
        Ok(()) => Ok(true),
        Err(err) => {
            let restored = move_item(items, to_index, from_index);
            *items = restored;
            Err(err)
        }
    }
}

/// Set one item's percent complete (clamped) optimistically and run the
/// caller's commit hook on it; the prior value is restored when the hook
/// fails. Returns whether an item with that id existed.
pub fn apply_progress_with<F, E>(
    items: &mut [ScopeItem],
    id: &str,
    percent_complete: i64,
    commit: F,
) -> Result<bool, E>
where
    F: FnOnce(&ScopeItem) -> Result<(), E>,
{
    let index = match items.iter().position(|item| item.id == id) {
        Some(index) => index,
        None => return Ok(false),
    };
    let previous = items[index].percent_complete;
    items[index].percent_complete = clamp_percent(percent_complete);
    match commit(&items[index]) {
        Ok(()) => Ok(true),
        Err(err) => {
            items[index].percent_complete = previous;
            Err(err)
        }
    }
}
