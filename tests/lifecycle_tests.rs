use forgesitediary::core::day_entry::DayEntryLogic;
use forgesitediary::core::ids::SequenceIds;
use forgesitediary::core::item::{ItemLogic, NewItem};
use forgesitediary::core::job::{JobLogic, NewJob};
use forgesitediary::core::lineage;
use forgesitediary::db::store::{DayEntryStore, ItemStore};
use forgesitediary::db::{DbPool, MemoryStore};
use forgesitediary::errors::AppError;
use forgesitediary::models::{EntryPatch, ItemStatus, ItemType, JobStage};
use forgesitediary::utils::date::{FixedClock, add_days};

mod common;
use common::{ts, ymd};

fn new_job(number: &str) -> NewJob {
    NewJob {
        job_number: number.to_string(),
        name: "Harbour View Fit-out".to_string(),
        main_contractor: "Northline".to_string(),
        site_address: "12 Quay St".to_string(),
        stage: JobStage::InProgress,
    }
}

#[test]
fn test_new_day_rolls_over_once() {
    let mut store = MemoryStore::new();
    let mut ids = SequenceIds::new("id");
    let job = JobLogic::add(&mut store, new_job("J-1"), ts(2024, 1, 1), &mut ids).unwrap();
    let day1 = ymd(2024, 1, 1);

    ItemLogic::add(
        &mut store,
        &job.id,
        day1,
        NewItem::new(ItemType::Task, "Install ceiling grid"),
        ts(2024, 1, 1),
        &mut ids,
        true,
    )
    .unwrap();
    let mut done = NewItem::new(ItemType::Task, "Strip out");
    done.status = Some(ItemStatus::Done);
    ItemLogic::add(&mut store, &job.id, day1, done, ts(2024, 1, 1), &mut ids, true).unwrap();

    let clock = FixedClock::new(ts(2024, 1, 2), add_days(day1, 1).unwrap());
    let opened = DayEntryLogic::open_today(&mut store, &job.id, &clock, &mut ids, true).unwrap();

    assert!(opened.created);
    assert_eq!(opened.entry.date, ymd(2024, 1, 2));
    assert_eq!(opened.rolled.len(), 1);
    assert_eq!(opened.rolled[0].title, "Install ceiling grid");
    assert_eq!(
        opened.rolled_from.as_ref().map(|e| e.date),
        Some(day1)
    );

    // second open of the same day: no new copies
    let again = DayEntryLogic::open_today(&mut store, &job.id, &clock, &mut ids, true).unwrap();
    assert!(!again.created);
    assert!(again.rolled.is_empty());
    assert_eq!(
        store.list_items_for_day_entry(&opened.entry.id).unwrap().len(),
        1
    );
}

#[test]
fn test_rollover_disabled_and_backfill() {
    let mut store = MemoryStore::new();
    let mut ids = SequenceIds::new("id");
    let job = JobLogic::add(&mut store, new_job("J-2"), ts(2024, 1, 1), &mut ids).unwrap();

    ItemLogic::add(
        &mut store,
        &job.id,
        ymd(2024, 1, 5),
        NewItem::new(ItemType::Issue, "Leak in level 2 riser"),
        ts(2024, 1, 5),
        &mut ids,
        true,
    )
    .unwrap();

    // disabled
    let off = DayEntryLogic::get_or_create_entry(
        &mut store,
        &job.id,
        ymd(2024, 1, 6),
        ts(2024, 1, 6),
        &mut ids,
        false,
    )
    .unwrap();
    assert!(off.created);
    assert!(off.rolled.is_empty());

    // backfilling an older day never rolls
    let back = DayEntryLogic::get_or_create_entry(
        &mut store,
        &job.id,
        ymd(2024, 1, 3),
        ts(2024, 1, 6),
        &mut ids,
        true,
    )
    .unwrap();
    assert!(back.created);
    assert!(back.rolled.is_empty());

    assert_eq!(
        DayEntryLogic::list_entry_dates(&mut store, &job.id).unwrap(),
        vec![ymd(2024, 1, 3), ymd(2024, 1, 5), ymd(2024, 1, 6)]
    );
}

#[test]
fn test_explicit_rollover_refuses_second_run() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut ids = SequenceIds::new("id");
    let job = JobLogic::add(&mut pool, new_job("J-3"), ts(2024, 1, 1), &mut ids).unwrap();

    ItemLogic::add(
        &mut pool,
        &job.id,
        ymd(2024, 1, 1),
        NewItem::new(ItemType::Material, "Order plasterboard"),
        ts(2024, 1, 1),
        &mut ids,
        false,
    )
    .unwrap();

    let dry = DayEntryLogic::rollover_between(
        &mut pool,
        &job.id,
        ymd(2024, 1, 1),
        ymd(2024, 1, 4),
        ts(2024, 1, 4),
        &mut ids,
        true,
    )
    .unwrap();
    assert!(dry.dry_run);
    assert_eq!(dry.rolled.len(), 1);
    assert!(pool.find_entry(&job.id, ymd(2024, 1, 4)).unwrap().is_none());

    let report = DayEntryLogic::rollover_between(
        &mut pool,
        &job.id,
        ymd(2024, 1, 1),
        ymd(2024, 1, 4),
        ts(2024, 1, 4),
        &mut ids,
        false,
    )
    .unwrap();
    assert!(report.target_created);
    assert_eq!(
        pool.list_items_for_day_entry(&report.target.id).unwrap().len(),
        1
    );

    let err = DayEntryLogic::rollover_between(
        &mut pool,
        &job.id,
        ymd(2024, 1, 1),
        ymd(2024, 1, 4),
        ts(2024, 1, 4),
        &mut ids,
        false,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::RolloverAlreadyApplied { .. }));

    let err = DayEntryLogic::rollover_between(
        &mut pool,
        &job.id,
        ymd(2024, 1, 4),
        ymd(2024, 1, 4),
        ts(2024, 1, 4),
        &mut ids,
        false,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidRolloverTarget { .. }));

    let err = DayEntryLogic::rollover_between(
        &mut pool,
        &job.id,
        ymd(2024, 1, 2),
        ymd(2024, 1, 9),
        ts(2024, 1, 9),
        &mut ids,
        false,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::DayEntryNotFound(_)));
}

#[test]
fn test_explicit_rollover_refuses_day_filled_through_later_day() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut ids = SequenceIds::new("id");
    let job = JobLogic::add(&mut pool, new_job("J-4"), ts(2024, 1, 1), &mut ids).unwrap();

    ItemLogic::add(
        &mut pool,
        &job.id,
        ymd(2024, 1, 1),
        NewItem::new(ItemType::Task, "Install ceiling grid"),
        ts(2024, 1, 1),
        &mut ids,
        true,
    )
    .unwrap();

    // 01-02 and 01-03 each pick the task up on creation
    for day in [2, 3] {
        let opened = DayEntryLogic::get_or_create_entry(
            &mut pool,
            &job.id,
            ymd(2024, 1, day),
            ts(2024, 1, day),
            &mut ids,
            true,
        )
        .unwrap();
        assert_eq!(opened.rolled.len(), 1);
    }

    let err = DayEntryLogic::rollover_between(
        &mut pool,
        &job.id,
        ymd(2024, 1, 1),
        ymd(2024, 1, 3),
        ts(2024, 1, 3),
        &mut ids,
        false,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::RolloverAlreadyApplied { .. }));

    let day3 = pool.find_entry(&job.id, ymd(2024, 1, 3)).unwrap().unwrap();
    let items = pool.list_items_for_day_entry(&day3.id).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Install ceiling grid");
}

#[test]
fn test_status_rules_and_closed_at() {
    let mut store = MemoryStore::new();
    let mut ids = SequenceIds::new("id");
    let job = JobLogic::add(&mut store, new_job("J-4"), ts(2024, 1, 1), &mut ids).unwrap();

    let (_, email) = ItemLogic::add(
        &mut store,
        &job.id,
        ymd(2024, 1, 1),
        NewItem::new(ItemType::Email, "Chase door hardware quote"),
        ts(2024, 1, 1),
        &mut ids,
        true,
    )
    .unwrap();
    assert_eq!(email.status, ItemStatus::Draft);

    let err = ItemLogic::set_status(&mut store, &email.id, ItemStatus::Delivered, ts(2024, 1, 1))
        .unwrap_err();
    assert!(matches!(err, AppError::StatusNotAllowed { .. }));

    let sent = ItemLogic::set_status(&mut store, &email.id, ItemStatus::Sent, ts(2024, 1, 2)).unwrap();
    assert_eq!(sent.closed_at, Some(ts(2024, 1, 2)));
    assert_eq!(sent.updated_at, ts(2024, 1, 2));

    let reopened =
        ItemLogic::set_status(&mut store, &email.id, ItemStatus::Draft, ts(2024, 1, 3)).unwrap();
    assert!(reopened.closed_at.is_none());

    let mut bad = NewItem::new(ItemType::Delay, "Crane wind hold");
    bad.status = Some(ItemStatus::Done);
    assert!(matches!(
        ItemLogic::add(&mut store, &job.id, ymd(2024, 1, 1), bad, ts(2024, 1, 1), &mut ids, true),
        Err(AppError::StatusNotAllowed { .. })
    ));
}

#[test]
fn test_jobs_unique_and_resolve() {
    let mut store = MemoryStore::new();
    let mut ids = SequenceIds::new("id");
    let job = JobLogic::add(&mut store, new_job("J-5"), ts(2024, 1, 1), &mut ids).unwrap();

    assert!(matches!(
        JobLogic::add(&mut store, new_job("j-5"), ts(2024, 1, 1), &mut ids),
        Err(AppError::DuplicateJobNumber(_))
    ));
    assert_eq!(JobLogic::resolve(&mut store, "j-5").unwrap().id, job.id);
    assert_eq!(JobLogic::resolve(&mut store, &job.id).unwrap().job_number, "J-5");
    assert!(matches!(
        JobLogic::resolve(&mut store, "J-404"),
        Err(AppError::JobNotFound(_))
    ));
}

#[test]
fn test_item_prefix_resolution() {
    let mut store = MemoryStore::new();
    let mut ids = SequenceIds::new("item");
    let job = JobLogic::add(&mut store, new_job("J-6"), ts(2024, 1, 1), &mut ids).unwrap();
    for title in ["a", "b"] {
        ItemLogic::add(
            &mut store,
            &job.id,
            ymd(2024, 1, 1),
            NewItem::new(ItemType::Task, title),
            ts(2024, 1, 1),
            &mut ids,
            true,
        )
        .unwrap();
    }

    // ids: item-1 (job), item-2 (entry), item-3, item-4
    assert_eq!(ItemLogic::resolve(&mut store, "item-3").unwrap().title, "a");
    assert!(matches!(
        ItemLogic::resolve(&mut store, "item-"),
        Err(AppError::AmbiguousItemId(_))
    ));
    assert!(matches!(
        ItemLogic::resolve(&mut store, "ite"),
        Err(AppError::ItemNotFound(_))
    ));

    let removed = ItemLogic::delete(&mut store, "item-4").unwrap();
    assert_eq!(removed.title, "b");
    assert!(store.get_item("item-4").unwrap().is_none());
}

#[test]
fn test_update_summaries() {
    let mut store = MemoryStore::new();
    let mut ids = SequenceIds::new("id");
    let job = JobLogic::add(&mut store, new_job("J-7"), ts(2024, 1, 1), &mut ids).unwrap();
    let opened = DayEntryLogic::get_or_create_entry(
        &mut store,
        &job.id,
        ymd(2024, 1, 1),
        ts(2024, 1, 1),
        &mut ids,
        true,
    )
    .unwrap();

    let patch = EntryPatch {
        weather: Some("Overcast".into()),
        labour_summary: Some("4 fixers, 1 labourer".into()),
        ..EntryPatch::default()
    };
    let updated =
        DayEntryLogic::update_summaries(&mut store, &opened.entry.id, &patch, ts(2024, 1, 2)).unwrap();

    assert_eq!(updated.weather.as_deref(), Some("Overcast"));
    assert_eq!(updated.labour_summary, "4 fixers, 1 labourer");
    assert_eq!(updated.materials_summary, "");
    assert_eq!(updated.updated_at, ts(2024, 1, 2));

    assert!(matches!(
        DayEntryLogic::update_summaries(&mut store, "missing", &patch, ts(2024, 1, 2)),
        Err(AppError::DayEntryNotFound(_))
    ));
}

#[test]
fn test_lineage_across_three_days() {
    let mut pool = DbPool::in_memory().unwrap();
    let mut ids = SequenceIds::new("id");
    let job = JobLogic::add(&mut pool, new_job("J-8"), ts(2024, 1, 1), &mut ids).unwrap();

    let (_, first) = ItemLogic::add(
        &mut pool,
        &job.id,
        ymd(2024, 1, 1),
        NewItem::new(ItemType::Task, "Install ceiling grid"),
        ts(2024, 1, 1),
        &mut ids,
        true,
    )
    .unwrap();

    let mut last = None;
    for day in 2..=3 {
        let opened = DayEntryLogic::get_or_create_entry(
            &mut pool,
            &job.id,
            ymd(2024, 1, day),
            ts(2024, 1, day),
            &mut ids,
            true,
        )
        .unwrap();
        last = opened.rolled.first().cloned();
    }
    let last = last.expect("item carried into day 3");

    let chain = lineage::walk(&mut pool, &last.id).unwrap();
    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0].id, last.id);
    assert_eq!(chain[2].id, first.id);
    assert_eq!(lineage::origin(&mut pool, &last.id).unwrap().id, first.id);
}

#[test]
fn test_lineage_stops_on_cycle() {
    let mut store = MemoryStore::new();
    let mut a = common::item("a", "d", ItemType::Task, ItemStatus::Open, "a");
    let mut b = common::item("b", "d", ItemType::Task, ItemStatus::Open, "b");
    a.rolled_from_item_id = Some("b".into());
    b.rolled_from_item_id = Some("a".into());
    store.create_items(&[a, b]).unwrap();

    let chain = lineage::walk(&mut store, "a").unwrap();
    assert_eq!(chain.len(), 2);
}
