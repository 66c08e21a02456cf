use crate::cli::commands::{entry_index, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::week_id::DayKey;
use crate::ui::messages::success;
use crate::utils::date::{format_iso, parse_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, index } = cmd {
        let day = DayKey::for_date(parse_date(date)?);
        let mut store = open_store(cfg)?;

        let removed = EntryLogic::delete(&mut store, &day, entry_index(*index)?).map_err(
            |e| match e {
                AppError::InvalidEntryIndex(_) => AppError::InvalidEntryIndex(*index),
                other => other,
            },
        )?;

        let target = format_iso(day.date);
        ttlog_quiet(store.kv().conn(), "del", &target, &removed.label());
        success(format!("Deleted entry #{index} on {target}: {}", removed.label()));
    }

    Ok(())
}
