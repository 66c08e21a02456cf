mod common;
use common::{HOUR, date, day, memory_store};
use horaslite::core::entries::EntryLogic;
use horaslite::core::report::{
    build_monthly_report, build_monthly_report_with_stored_rates, monthly_summary,
};
use horaslite::core::week::week_summary;
use horaslite::models::month::YearMonth;
use horaslite::models::rates::MonthlyRate;

fn march() -> YearMonth {
    YearMonth::new(2024, 3).unwrap()
}

#[test]
fn test_report_has_one_row_per_calendar_day() {
    let store = memory_store();
    let report = build_monthly_report(&store, march(), MonthlyRate::default()).unwrap();
    assert_eq!(report.daily.len(), 31);
    assert_eq!(report.total_millis(), 0);
    assert!(!report.has_data());
    assert_eq!(report.worked_day_count(), 0);
}

#[test]
fn test_report_totals_and_pay() {
    let mut store = memory_store();
    EntryLogic::add_interval(&mut store, &day(2024, 3, 4), 9 * 60, 18 * 60, false).unwrap();
    EntryLogic::add_quantity(&mut store, &day(2024, 3, 5), 90, true).unwrap();
    store.set_rates(march(), MonthlyRate::new(10.0, 15.0)).unwrap();

    let report = build_monthly_report_with_stored_rates(&store, march()).unwrap();
    assert_eq!(report.total_normal_millis, 8 * HOUR);
    assert_eq!(report.total_extra_millis, 2 * HOUR + HOUR / 2);
    assert_eq!(report.worked_day_count(), 2);
    assert_eq!(report.normal_pay(), 80.0);
    assert_eq!(report.extra_pay(), 37.5);
    assert_eq!(report.total_pay(), 117.5);

    let days: i64 = report.daily.iter().map(|d| d.total_millis()).sum();
    assert_eq!(days, report.total_millis());
}

#[test]
fn test_report_is_idempotent() {
    let mut store = memory_store();
    EntryLogic::add_interval(&mut store, &day(2024, 3, 12), 8 * 60, 12 * 60, true).unwrap();

    let a = build_monthly_report_with_stored_rates(&store, march()).unwrap();
    let b = build_monthly_report_with_stored_rates(&store, march()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_cross_month_week_is_split_without_double_counting() {
    let mut store = memory_store();
    EntryLogic::add_quantity(&mut store, &day(2024, 1, 31), 60, false).unwrap();
    EntryLogic::add_quantity(&mut store, &day(2024, 2, 1), 120, false).unwrap();

    let jan = build_monthly_report(&store, YearMonth::new(2024, 1).unwrap(), MonthlyRate::default())
        .unwrap();
    let feb = build_monthly_report(&store, YearMonth::new(2024, 2).unwrap(), MonthlyRate::default())
        .unwrap();

    assert_eq!(jan.total_millis(), HOUR);
    assert_eq!(feb.total_millis(), 2 * HOUR);
    assert_eq!(jan.worked_days().next().unwrap().date, date(2024, 1, 31));
    assert_eq!(feb.worked_days().next().unwrap().date, date(2024, 2, 1));

    let week = week_summary(&store, date(2024, 1, 31), 0).unwrap();
    assert_eq!(week.totals.total_millis, 3 * HOUR);
    assert_eq!(week.months.len(), 2);
}

#[test]
fn test_monthly_summary_requires_data_and_rates() {
    let mut store = memory_store();
    let report = build_monthly_report_with_stored_rates(&store, march()).unwrap();
    assert!(monthly_summary(&report, "€").is_none());

    EntryLogic::add_quantity(&mut store, &day(2024, 3, 1), 480, false).unwrap();
    let report = build_monthly_report_with_stored_rates(&store, march()).unwrap();
    assert!(monthly_summary(&report, "€").is_none());

    store.set_rates(march(), MonthlyRate::new(10.0, 0.0)).unwrap();
    let report = build_monthly_report_with_stored_rates(&store, march()).unwrap();
    let text = monthly_summary(&report, "€").unwrap();
    assert!(text.contains("March 2024"));
    assert!(text.contains("8:00 normal"));
    assert!(text.contains("80.00 €"));
}

#[test]
fn test_week_summary_pay_needs_rates() {
    let mut store = memory_store();
    let today = date(2024, 3, 6);
    EntryLogic::add_interval(&mut store, &day(2024, 3, 6), 8 * 60, 17 * 60, false).unwrap();

    let week = week_summary(&store, today, 0).unwrap();
    assert_eq!(week.week_id.to_string(), "2024-10");
    assert_eq!(week.days.len(), 7);
    assert_eq!(week.days[2].entries.len(), 1);
    assert_eq!(week.totals.auto_extra_millis, HOUR);
    assert!(week.pay().is_none());

    store.set_rates(march(), MonthlyRate::new(10.0, 20.0)).unwrap();
    let pay = week_summary(&store, today, 0).unwrap().pay().unwrap();
    assert_eq!(pay.normal, 80.0);
    assert_eq!(pay.extra, 20.0);
}
