pub mod day_totals;
pub mod month;
pub mod rates;
pub mod time_entry;
pub mod week_id;
