mod common;
use chrono::{TimeZone, Utc};
use common::{day, memory_store};
use horaslite::core::entries::{EntryLogic, quantity_minutes};
use horaslite::core::punch::{PunchLogic, PunchOutcome, close_punch};
use horaslite::errors::AppError;
use horaslite::models::time_entry::{EntryKind, EntrySource};

#[test]
fn test_add_interval_appends() {
    let mut store = memory_store();
    let d = day(2024, 3, 4);
    EntryLogic::add_interval(&mut store, &d, 540, 720, false).unwrap();
    EntryLogic::add_interval(&mut store, &d, 780, 1020, true).unwrap();

    let entries = store.day_entries(&d).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, EntryKind::Interval { start: 540, end: 720 });
    assert_eq!(entries[0].source, EntrySource::Manual);
    assert!(entries[1].manual_extra);
}

#[test]
fn test_add_interval_rejects_end_not_after_start() {
    let mut store = memory_store();
    let d = day(2024, 3, 4);
    let err = EntryLogic::add_interval(&mut store, &d, 600, 600, false).unwrap_err();
    assert!(matches!(err, AppError::InvalidInterval { .. }));
    assert!(EntryLogic::add_interval(&mut store, &d, 600, 540, false).is_err());
    assert!(store.day_entries(&d).unwrap().is_empty());
}

#[test]
fn test_add_interval_rejects_minutes_outside_the_day() {
    let mut store = memory_store();
    let d = day(2024, 3, 4);

    let err = EntryLogic::add_interval(&mut store, &d, -90, 60, false).unwrap_err();
    assert!(matches!(err, AppError::MinuteOutOfRange(-90)));
    let msg = err.to_string();
    assert!(msg.contains("-90"));
    assert!(!msg.contains("-1:-30"));

    assert!(matches!(
        EntryLogic::add_interval(&mut store, &d, 600, 1500, false),
        Err(AppError::MinuteOutOfRange(1500))
    ));
    assert!(EntryLogic::add_interval(&mut store, &d, 1380, 1440, false).is_ok());
}

#[test]
fn test_quantity_minutes() {
    assert_eq!(quantity_minutes(1, 30).unwrap(), 90);
    assert_eq!(quantity_minutes(-2, 30).unwrap(), 30);
    assert!(quantity_minutes(0, 0).is_err());
    assert!(quantity_minutes(1, 60).is_err());
    assert!(quantity_minutes(1, -1).is_err());
}

#[test]
fn test_add_quantity_rejects_zero() {
    let mut store = memory_store();
    let d = day(2024, 3, 4);
    assert!(matches!(
        EntryLogic::add_quantity(&mut store, &d, 0, false),
        Err(AppError::InvalidQuantity(_))
    ));
    let e = EntryLogic::add_quantity(&mut store, &d, 45, true).unwrap();
    assert_eq!(e.source, EntrySource::Quantity);
    assert_eq!(store.day_entries(&d).unwrap(), vec![e]);
}

#[test]
fn test_toggle_extra_replaces_one_entry() {
    let mut store = memory_store();
    let d = day(2024, 3, 4);
    EntryLogic::add_interval(&mut store, &d, 540, 600, false).unwrap();
    EntryLogic::add_interval(&mut store, &d, 600, 660, false).unwrap();

    let toggled = EntryLogic::toggle_extra(&mut store, &d, 1).unwrap();
    assert!(toggled.manual_extra);

    let entries = store.day_entries(&d).unwrap();
    assert!(!entries[0].manual_extra);
    assert!(entries[1].manual_extra);

    EntryLogic::toggle_extra(&mut store, &d, 1).unwrap();
    assert!(!store.day_entries(&d).unwrap()[1].manual_extra);

    assert!(matches!(
        EntryLogic::toggle_extra(&mut store, &d, 2),
        Err(AppError::InvalidEntryIndex(2))
    ));
}

#[test]
fn test_delete_entry() {
    let mut store = memory_store();
    let d = day(2024, 3, 4);
    EntryLogic::add_interval(&mut store, &d, 540, 600, false).unwrap();
    EntryLogic::add_quantity(&mut store, &d, 30, false).unwrap();

    let removed = EntryLogic::delete(&mut store, &d, 0).unwrap();
    assert_eq!(removed.kind, EntryKind::Interval { start: 540, end: 600 });

    let left = store.day_entries(&d).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].kind, EntryKind::Quantity { minutes: 30 });

    assert!(EntryLogic::delete(&mut store, &d, 5).is_err());
}

#[test]
fn test_punch_start_and_stop() {
    let mut store = memory_store();
    let d = day(2024, 3, 4);
    let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
    let stop = Utc.with_ymd_and_hms(2024, 3, 4, 11, 30, 40).unwrap();

    let outcome = PunchLogic::toggle(&mut store, &d, &start).unwrap();
    assert_eq!(
        outcome,
        PunchOutcome::Started {
            at_millis: start.timestamp_millis()
        }
    );
    assert!(matches!(
        PunchLogic::start(&mut store, &d, start.timestamp_millis()),
        Err(AppError::PunchAlreadyRunning(_))
    ));

    let PunchOutcome::Stopped { entry } = PunchLogic::toggle(&mut store, &d, &stop).unwrap() else {
        panic!("expected the punch to stop");
    };
    assert_eq!(entry.kind, EntryKind::Interval { start: 540, end: 690 });
    assert_eq!(entry.source, EntrySource::Punch);
    assert!(!entry.manual_extra);

    assert_eq!(store.ongoing_start(&d).unwrap(), None);
    assert_eq!(store.day_entries(&d).unwrap(), vec![entry]);
}

#[test]
fn test_punch_stop_without_start() {
    let mut store = memory_store();
    let d = day(2024, 3, 4);
    let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
    assert!(matches!(
        PunchLogic::stop(&mut store, &d, &now),
        Err(AppError::NoOngoingPunch(_))
    ));
}

#[test]
fn test_close_punch_clamps_start_at_midnight() {
    let started = Utc.with_ymd_and_hms(2024, 3, 3, 23, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 4, 1, 0, 0).unwrap();
    let entry = close_punch(started.timestamp_millis(), &now);
    assert_eq!(entry.kind, EntryKind::Interval { start: 0, end: 60 });
}
