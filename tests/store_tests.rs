use forgesitediary::core::priority::PrioritySummary;
use forgesitediary::db::migrate::{applied_count, pending_migrations, run_pending_migrations};
use forgesitediary::db::queries::load_items_with_dates;
use forgesitediary::db::store::{DayEntryStore, ItemStore, JobStore};
use forgesitediary::db::{DbPool, MemoryStore};
use forgesitediary::models::{DayEntry, Item, ItemStatus, ItemType, Job, Priority};

mod common;
use common::{item, ts, ymd};

fn pool_with_entry() -> (DbPool, DayEntry) {
    let mut pool = DbPool::in_memory().unwrap();
    pool.insert_job(&Job::new("job-1", "J-100", "Harbour View", ts(2024, 1, 1)))
        .unwrap();
    let entry = DayEntry::new("day1", "job-1", ymd(2024, 1, 1), ts(2024, 1, 1));
    pool.create_entry(&entry, &[]).unwrap();
    (pool, entry)
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = DbPool::in_memory().unwrap();
    assert!(pending_migrations(&pool.conn).unwrap().is_empty());
    let applied = applied_count(&pool.conn).unwrap();

    run_pending_migrations(&pool.conn).unwrap();
    assert_eq!(applied_count(&pool.conn).unwrap(), applied);

    let logged: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(logged, applied);
}

#[test]
fn test_item_round_trip_preserves_fields() {
    let (mut pool, entry) = pool_with_entry();

    let mut it = Item::new("i-1", "job-1", &entry.id, ItemType::Material, "Order plasterboard", ts(2024, 1, 1))
        .with_priority(Priority::Critical)
        .with_status(ItemStatus::Ordered);
    it.details = Some("12 sheets".into());
    it.due_date = Some(ymd(2024, 1, 3));
    it.order_by_date = Some(ymd(2024, 1, 2));
    it.required_on_site_date = Some(ymd(2024, 1, 4));
    it.assigned_to = Some("Dana".into());
    it.rolled_from_item_id = Some("i-0".into());
    it.updated_at = ts(2024, 1, 2);

    let mut other = item("i-2", &entry.id, ItemType::Other("inspection".into()), ItemStatus::Open, "Fire stopping check");
    other.job_id = "job-1".into();
    other.closed_at = Some(ts(2024, 1, 2));

    pool.create_items(&[it.clone(), other.clone()]).unwrap();

    let loaded = pool.list_items_for_day_entry(&entry.id).unwrap();
    assert_eq!(loaded, vec![it.clone(), other]);
    assert_eq!(pool.get_item("i-1").unwrap(), Some(it));
}

#[test]
fn test_create_items_is_all_or_nothing() {
    let (mut pool, entry) = pool_with_entry();
    let a = item("dup", &entry.id, ItemType::Task, ItemStatus::Open, "a");
    let b = item("dup", &entry.id, ItemType::Task, ItemStatus::Open, "b");

    assert!(pool.create_items(&[a, b]).is_err());
    assert!(pool.list_items_for_day_entry(&entry.id).unwrap().is_empty());
}

#[test]
fn test_duplicate_entry_rolls_back_carried_items() {
    let (mut pool, _) = pool_with_entry();
    let clash = DayEntry::new("day1-bis", "job-1", ymd(2024, 1, 1), ts(2024, 1, 1));
    let carried = item("c-1", "day1-bis", ItemType::Task, ItemStatus::Open, "carried");

    assert!(pool.create_entry(&clash, &[carried]).is_err());
    assert!(pool.get_item("c-1").unwrap().is_none());
    assert!(pool.get_entry("day1-bis").unwrap().is_none());
}

#[test]
fn test_update_and_delete() {
    let (mut pool, entry) = pool_with_entry();
    let mut it = item("i-1", &entry.id, ItemType::Task, ItemStatus::Open, "Install ceiling grid");
    pool.create_items(std::slice::from_ref(&it)).unwrap();

    it.status = ItemStatus::Done;
    it.closed_at = Some(ts(2024, 1, 2));
    assert!(pool.update_item(&it).unwrap());
    assert_eq!(pool.get_item("i-1").unwrap(), Some(it));

    assert!(pool.delete_item("i-1").unwrap());
    assert!(!pool.delete_item("i-1").unwrap());
    assert!(!pool.update_item(&item("nope", &entry.id, ItemType::Task, ItemStatus::Open, "x")).unwrap());
}

#[test]
fn test_job_lookup_is_case_insensitive() {
    let (mut pool, _) = pool_with_entry();
    assert_eq!(
        pool.find_job_by_number("j-100").unwrap().map(|j| j.id),
        Some("job-1".to_string())
    );
    assert!(pool.find_job_by_number("J-200").unwrap().is_none());
}

#[test]
fn test_items_with_dates_respects_bounds() {
    let (mut pool, entry) = pool_with_entry();
    let day2 = DayEntry::new("day2", "job-1", ymd(2024, 2, 1), ts(2024, 2, 1));
    pool.create_entry(&day2, &[]).unwrap();

    let mut a = item("a", &entry.id, ItemType::Task, ItemStatus::Open, "january");
    a.job_id = "job-1".into();
    let mut b = item("b", "day2", ItemType::Task, ItemStatus::Open, "february");
    b.job_id = "job-1".into();
    pool.create_items(&[a, b]).unwrap();

    let all = load_items_with_dates(&pool.conn, Some("job-1"), None).unwrap();
    assert_eq!(all.len(), 2);

    let feb = load_items_with_dates(&pool.conn, None, Some((ymd(2024, 2, 1), ymd(2024, 2, 29)))).unwrap();
    assert_eq!(feb.len(), 1);
    assert_eq!(feb[0].0, ymd(2024, 2, 1));
    assert_eq!(feb[0].1.title, "february");
}

#[test]
fn test_priority_summary_counts_open_items() {
    let today = ymd(2024, 1, 10);

    let mut critical = item("1", "d", ItemType::Task, ItemStatus::Open, "a").with_priority(Priority::Critical);
    critical.due_date = Some(ymd(2024, 1, 9));
    let high = item("2", "d", ItemType::Issue, ItemStatus::Monitoring, "b").with_priority(Priority::High);
    let ordered = item("3", "d", ItemType::Material, ItemStatus::Ordered, "c");
    let mut due_today = item("4", "d", ItemType::Task, ItemStatus::Open, "d");
    due_today.due_date = Some(today);
    let mut closed = item("5", "d", ItemType::Task, ItemStatus::Done, "e").with_priority(Priority::Critical);
    closed.due_date = Some(ymd(2024, 1, 1));

    let s = PrioritySummary::from_items(&[critical, high, ordered, due_today, closed], today);
    assert_eq!(
        s,
        PrioritySummary {
            critical: 1,
            high: 1,
            overdue: 1,
            ordered: 1,
        }
    );

    let mut total = PrioritySummary::default();
    assert!(total.is_empty());
    total += s;
    total += s;
    assert_eq!(total.critical, 2);
}

fn ids_with_prefix<S: ItemStore>(store: &mut S, prefix: &str) -> Vec<String> {
    store
        .find_items_by_prefix(prefix)
        .unwrap()
        .into_iter()
        .map(|it| it.id)
        .collect()
}

#[test]
fn test_prefix_lookup_is_literal_and_case_sensitive() {
    let (mut pool, entry) = pool_with_entry();
    let mut memory = MemoryStore::new();
    let items: Vec<Item> = ["ab_1", "abx1", "AB_2", "ab%3"]
        .iter()
        .map(|id| item(id, &entry.id, ItemType::Task, ItemStatus::Open, "t"))
        .collect();
    pool.create_items(&items).unwrap();
    memory.create_items(&items).unwrap();

    for (prefix, expected) in [
        ("ab_", vec!["ab_1"]),
        ("ab%", vec!["ab%3"]),
        ("AB", vec!["AB_2"]),
        ("ab", vec!["ab_1", "abx1", "ab%3"]),
    ] {
        assert_eq!(ids_with_prefix(&mut pool, prefix), expected, "sqlite {prefix}");
        assert_eq!(ids_with_prefix(&mut memory, prefix), expected, "memory {prefix}");
    }
}
