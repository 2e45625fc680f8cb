use crate::db::store::ItemStore;
use crate::errors::{AppError, AppResult};
use crate::models::Item;
use std::collections::HashSet;

/// Follow `rolled_from_item_id` back from `item_id`.
///
/// Returns the chain newest first, starting with the item itself. The walk
/// stops at the first item without a predecessor, at a predecessor that no
/// longer exists, or when an id repeats.
pub fn walk<S>(store: &mut S, item_id: &str) -> AppResult<Vec<Item>>
where
    S: ItemStore + ?Sized,
{
    let first = store
        .get_item(item_id)?
        .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;

    let mut seen = HashSet::from([first.id.clone()]);
    let mut next = first.rolled_from_item_id.clone();
    let mut chain = vec![first];

    while let Some(id) = next {
        if !seen.insert(id.clone()) {
            break;
        }
        match store.get_item(&id)? {
            Some(prev) => {
                next = prev.rolled_from_item_id.clone();
                chain.push(prev);
            }
            None => break,
        }
    }

    Ok(chain)
}

/// The item the chain started from (the oldest reachable ancestor).
pub fn origin<S>(store: &mut S, item_id: &str) -> AppResult<Item>
where
    S: ItemStore + ?Sized,
{
    let mut chain = walk(store, item_id)?;
    chain
        .pop()
        .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))
}
