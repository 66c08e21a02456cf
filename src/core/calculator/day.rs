//! Daily split of logged time into normal, manual extra and auto extra.

use crate::models::day_totals::DailyTotals;
use crate::models::time_entry::TimeEntry;

/// Non-flagged time per day counted as normal before overtime starts.
pub const OVERTIME_THRESHOLD_MILLIS: i64 = 8 * 3_600_000;

/// Aggregate the entries of one day.
///
/// Manually flagged entries are extra in full and do not consume the daily
/// threshold; auto extra is whatever the remaining pool exceeds it by.
pub fn aggregate_day(entries: &[TimeEntry]) -> DailyTotals {
    let (total_millis, manual_extra_millis) =
        entries.iter().fold((0i64, 0i64), |(total, manual), e| {
            let d = e.duration_millis();
            (
                total.saturating_add(d),
                if e.manual_extra {
                    manual.saturating_add(d)
                } else {
                    manual
                },
            )
        });

    let auto_extra_millis = (total_millis - manual_extra_millis - OVERTIME_THRESHOLD_MILLIS).max(0);

    DailyTotals {
        total_millis,
        manual_extra_millis,
        auto_extra_millis,
    }
}
