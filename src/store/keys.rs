//! Storage key scheme. These strings must stay byte-for-byte stable so
//! that previously saved data keeps loading.

use crate::models::month::YearMonth;
use crate::models::week_id::WeekId;

pub fn intervals_key(week: WeekId, day_index: u8) -> String {
    format!("{week}:intervals:{day_index}")
}

pub fn ongoing_key(week: WeekId, day_index: u8) -> String {
    format!("{week}:ongoing:{day_index}")
}

pub fn normal_rate_key(month: YearMonth) -> String {
    format!("rate:{}:normal", month.key())
}

pub fn extra_rate_key(month: YearMonth) -> String {
    format!("rate:{}:extra", month.key())
}
