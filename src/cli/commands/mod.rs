//! One handler per subcommand. Each opens the configured store, runs the
//! matching core operation and prints the result.

pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod log;
pub mod punch;
pub mod quantity;
pub mod rates;
pub mod report;
pub mod reset;
pub mod toggle;
pub mod week;

use crate::cli::parser::WeekSelector;
use crate::config::Config;
use crate::core::calendar::week_offset_for;
use crate::errors::{AppError, AppResult};
use crate::models::month::YearMonth;
use crate::store::{SqliteStore, TimeRecordStore};
use crate::utils::date::{parse_date, today};

pub(crate) type CliStore = TimeRecordStore<SqliteStore>;

/// Open the configured database as a record store.
pub(crate) fn open_store(cfg: &Config) -> AppResult<CliStore> {
    Ok(TimeRecordStore::new(SqliteStore::open(&cfg.database)?))
}

/// Week offset selected on the command line, relative to the current week.
pub(crate) fn resolve_offset(sel: &WeekSelector) -> AppResult<i64> {
    match (&sel.date, sel.offset) {
        (Some(d), _) => Ok(week_offset_for(today(), parse_date(d)?)),
        (None, Some(o)) => Ok(o),
        (None, None) => Ok(0),
    }
}

/// `YYYY-MM` argument, or the current month.
pub(crate) fn month_or_current(month: Option<&String>) -> AppResult<YearMonth> {
    match month {
        Some(m) => YearMonth::parse(m),
        None => Ok(YearMonth::of(today())),
    }
}

/// Entry numbers are shown starting at 1.
pub(crate) fn entry_index(number: usize) -> AppResult<usize> {
    number
        .checked_sub(1)
        .ok_or(AppError::InvalidEntryIndex(number))
}
