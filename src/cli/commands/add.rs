use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::week_id::DayKey;
use crate::ui::messages::success;
use crate::utils::date::{format_iso, parse_date};
use crate::utils::time::parse_minute_of_day;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        extra,
    } = cmd
    {
        let day = DayKey::for_date(parse_date(date)?);
        let start = parse_minute_of_day(start)?;
        let end = parse_minute_of_day(end)?;

        let mut store = open_store(cfg)?;
        let entry = EntryLogic::add_interval(&mut store, &day, start, end, *extra)?;

        let target = format_iso(day.date);
        ttlog_quiet(store.kv().conn(), "add", &target, &entry.label());
        success(format!("Added {} on {}", entry.label(), target));
    }

    Ok(())
}
