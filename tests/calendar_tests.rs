mod common;
use common::date;
use horaslite::core::calendar::{
    days_in_month, monday_of, months_spanned_by_week, week_days, week_id, week_label,
    week_offset_for,
};
use horaslite::models::month::YearMonth;
use horaslite::models::week_id::{DayKey, WeekId};

#[test]
fn test_week_label_is_monday_to_sunday() {
    let today = date(2024, 3, 6); // Wednesday
    let (mon, sun) = week_label(today, 0).unwrap();
    assert_eq!(mon, date(2024, 3, 4));
    assert_eq!(sun, date(2024, 3, 10));

    let (mon, sun) = week_label(today, -1).unwrap();
    assert_eq!(mon, date(2024, 2, 26));
    assert_eq!(sun, date(2024, 3, 3));
}

#[test]
fn test_week_days_share_one_week_id() {
    let days = week_days(date(2024, 3, 6), 1).unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0].date, date(2024, 3, 11));
    for (i, d) in days.iter().enumerate() {
        assert_eq!(d.day_index as usize, i);
        assert_eq!(d.week_id, days[0].week_id);
    }
    assert_eq!(days[0].week_id.to_string(), "2024-11");
}

#[test]
fn test_week_crossing_month_boundary() {
    let today = date(2024, 1, 31);
    assert_eq!(monday_of(today), date(2024, 1, 29));

    let months = months_spanned_by_week(today, 0).unwrap();
    assert_eq!(
        months,
        vec![YearMonth::new(2024, 1).unwrap(), YearMonth::new(2024, 2).unwrap()]
    );

    let week = week_id(today, 0).unwrap();
    let jan = days_in_month(YearMonth::new(2024, 1).unwrap()).unwrap();
    let feb = days_in_month(YearMonth::new(2024, 2).unwrap()).unwrap();
    assert_eq!(jan.len(), 31);
    assert_eq!(feb.len(), 29);

    let jan_side: Vec<&DayKey> = jan.iter().filter(|d| d.week_id == week).collect();
    let feb_side: Vec<&DayKey> = feb.iter().filter(|d| d.week_id == week).collect();
    assert_eq!(jan_side.len(), 3);
    assert_eq!(feb_side.len(), 4);
    assert_eq!(
        jan_side.iter().map(|d| d.day_index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert_eq!(
        feb_side.iter().map(|d| d.day_index).collect::<Vec<_>>(),
        vec![3, 4, 5, 6]
    );
}

#[test]
fn test_single_month_week() {
    let months = months_spanned_by_week(date(2024, 3, 6), 0).unwrap();
    assert_eq!(months, vec![YearMonth::new(2024, 3).unwrap()]);
}

#[test]
fn test_week_offset_for_date_uses_floor_division() {
    let today = date(2024, 3, 6); // Wednesday
    assert_eq!(week_offset_for(today, today), 0);
    assert_eq!(week_offset_for(today, date(2024, 3, 20)), 2);
    assert_eq!(week_offset_for(today, date(2024, 2, 25)), -2);
    assert_eq!(week_offset_for(today, date(2024, 3, 3)), -1);
    assert_eq!(week_offset_for(today, date(2024, 3, 10)), 0);
}

#[test]
fn test_week_offset_round_trips_through_label() {
    let today = date(2024, 3, 6);
    let target = date(2023, 11, 17);
    let offset = week_offset_for(today, target);
    let (mon, sun) = week_label(today, offset).unwrap();
    assert!(mon <= target && target <= sun);
}

#[test]
fn test_iso_week_at_year_boundary() {
    // 2024-12-30 is the Monday of ISO week 1 of 2025
    let days = week_days(date(2024, 12, 31), 0).unwrap();
    assert!(days.iter().all(|d| d.week_id == WeekId { year: 2025, week: 1 }));
    assert_eq!(days[0].week_id.to_string(), "2025-1");

    // 2021-01-01 belongs to week 53 of 2020
    assert_eq!(WeekId::for_date(date(2021, 1, 1)).to_string(), "2020-53");
}

#[test]
fn test_days_in_month_for_december_crossing_years() {
    let dec = days_in_month(YearMonth::new(2024, 12).unwrap()).unwrap();
    assert_eq!(dec.len(), 31);
    assert_eq!(dec[29].week_id.to_string(), "2025-1");
    assert_eq!(dec[0].week_id.to_string(), "2024-48");
}

#[test]
fn test_year_month_parse() {
    let m = YearMonth::parse("2024-02").unwrap();
    assert_eq!(m.key(), "2024-02");
    assert_eq!(m.label(), "February 2024");
    assert!(YearMonth::parse("2024-13").is_err());
    assert!(YearMonth::parse("2024-2").is_err());
    assert!(YearMonth::parse("february").is_err());
}
