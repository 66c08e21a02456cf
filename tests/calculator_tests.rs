mod common;
use common::HOUR;
use horaslite::core::calculator::day::{OVERTIME_THRESHOLD_MILLIS, aggregate_day};
use horaslite::core::calculator::pay::compute_pay;
use horaslite::models::rates::MonthlyRate;
use horaslite::models::time_entry::{EntryKind, EntrySource, TimeEntry};

fn interval(start_h: i64, end_h: i64, extra: bool) -> TimeEntry {
    TimeEntry::interval(start_h * 60, end_h * 60, extra, EntrySource::Manual)
}

#[test]
fn test_empty_day_is_zero() {
    let t = aggregate_day(&[]);
    assert_eq!(t.total_millis, 0);
    assert_eq!(t.extra_millis(), 0);
    assert_eq!(t.normal_millis(), 0);
    assert!(t.is_empty());
}

#[test]
fn test_nine_hours_gives_one_hour_auto_extra() {
    let t = aggregate_day(&[interval(8, 17, false)]);
    assert_eq!(t.total_millis, 9 * HOUR);
    assert_eq!(t.auto_extra_millis, HOUR);
    assert_eq!(t.manual_extra_millis, 0);
    assert_eq!(t.normal_millis(), 8 * HOUR);
}

#[test]
fn test_manual_extra_skips_threshold() {
    let t = aggregate_day(&[interval(9, 14, true)]);
    assert_eq!(t.manual_extra_millis, 5 * HOUR);
    assert_eq!(t.auto_extra_millis, 0);
    assert_eq!(t.normal_millis(), 0);
}

#[test]
fn test_manual_extra_does_not_consume_allowance() {
    let t = aggregate_day(&[interval(6, 12, true), interval(13, 20, false)]);
    assert_eq!(t.manual_extra_millis, 6 * HOUR);
    assert_eq!(t.auto_extra_millis, 0);
    assert_eq!(t.normal_millis(), 7 * HOUR);
    assert_eq!(t.total_millis, 13 * HOUR);
}

#[test]
fn test_threshold_applies_across_entries() {
    let t = aggregate_day(&[
        interval(8, 12, false),
        interval(13, 18, false),
        TimeEntry::quantity(90, false),
    ]);
    assert_eq!(t.total_millis, 10 * HOUR + HOUR / 2);
    assert_eq!(t.auto_extra_millis, 2 * HOUR + HOUR / 2);
    assert_eq!(t.normal_millis(), OVERTIME_THRESHOLD_MILLIS);
}

#[test]
fn test_inverted_and_negative_entries_count_as_zero() {
    let inverted = TimeEntry::interval(600, 540, false, EntrySource::Manual);
    let negative = TimeEntry {
        kind: EntryKind::Quantity { minutes: -30 },
        manual_extra: true,
        source: EntrySource::Quantity,
    };
    let t = aggregate_day(&[inverted, negative]);
    assert_eq!(t.total_millis, 0);
    assert_eq!(t.manual_extra_millis, 0);
}

#[test]
fn test_totals_invariant_holds() {
    let days = [
        vec![],
        vec![interval(0, 24, false)],
        vec![interval(9, 10, true), interval(10, 22, false)],
        vec![TimeEntry::quantity(45, true), interval(7, 15, false)],
    ];
    for entries in days {
        let t = aggregate_day(&entries);
        assert_eq!(t.total_millis, t.normal_millis() + t.extra_millis());
        assert_eq!(
            t.extra_millis(),
            t.manual_extra_millis + t.auto_extra_millis
        );
        assert!(t.normal_millis() >= 0);
        assert!(t.normal_millis() <= OVERTIME_THRESHOLD_MILLIS);
    }
}

#[test]
fn test_order_does_not_change_totals() {
    let a = [interval(6, 12, true), interval(13, 23, false)];
    let b = [interval(13, 23, false), interval(6, 12, true)];
    assert_eq!(aggregate_day(&a), aggregate_day(&b));
}

#[test]
fn test_compute_pay() {
    let pay = compute_pay(8 * HOUR, HOUR + HOUR / 2, MonthlyRate::new(10.0, 15.0));
    assert_eq!(pay.normal, 80.0);
    assert_eq!(pay.extra, 22.5);
    assert_eq!(pay.total(), 102.5);
}

#[test]
fn test_extreme_bounds_saturate() {
    let huge = TimeEntry::interval(i64::MIN, i64::MAX, false, EntrySource::Manual);
    assert_eq!(huge.duration_minutes(), i64::MAX);
    assert_eq!(huge.duration_millis(), i64::MAX);

    let t = aggregate_day(&[huge.clone(), huge]);
    assert_eq!(t.total_millis, i64::MAX);
    assert_eq!(t.manual_extra_millis, 0);
    assert_eq!(t.normal_millis(), OVERTIME_THRESHOLD_MILLIS);
}
