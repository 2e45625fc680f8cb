//! Item rollover: which open items of a day are carried into the next one.

use crate::core::ids::IdGenerator;
use crate::models::{Item, ItemStatus, ItemType};
use chrono::{DateTime, Utc};

/// True if the item is unfinished work that must reappear on the next day.
///
/// Unknown item kinds never roll over.
pub fn should_rollover(item: &Item) -> bool {
    match &item.item_type {
        ItemType::Task => item.status != ItemStatus::Done,
        ItemType::Material => item.status != ItemStatus::Delivered,
        ItemType::Issue => item.status != ItemStatus::Resolved,
        ItemType::Delay => item.status != ItemStatus::Closed,
        ItemType::Email => item.status != ItemStatus::Sent,
        ItemType::Other(_) => false,
    }
}

/// Build the items to recreate under `new_day_entry_id`.
///
/// Each qualifying item is copied with a fresh id, re-parented to the new
/// day entry, linked back to its source through `rolled_from_item_id`,
/// stamped with `now` and reopened (`closed_at` cleared). Input order is
/// kept. Nothing is mutated or persisted.
pub fn rollover_items<G>(
    items: &[Item],
    new_day_entry_id: &str,
    now: DateTime<Utc>,
    ids: &mut G,
) -> Vec<Item>
where
    G: IdGenerator + ?Sized,
{
    items
        .iter()
        .filter(|item| should_rollover(item))
        .map(|item| Item {
            id: ids.next_id(),
            day_entry_id: new_day_entry_id.to_string(),
            rolled_from_item_id: Some(item.id.clone()),
            created_at: now,
            updated_at: now,
            closed_at: None,
            ..item.clone()
        })
        .collect()
}
