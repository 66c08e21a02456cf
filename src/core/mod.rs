//! Time-accounting engine: daily split, calendar mapping, week and month
//! aggregation, and day record editing.

pub mod calculator;
pub mod calendar;
pub mod entries;
pub mod punch;
pub mod report;
pub mod week;
