use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::{EntryLogic, quantity_minutes};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::week_id::DayKey;
use crate::ui::messages::success;
use crate::utils::date::{format_iso, parse_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quantity {
        date,
        hours,
        minutes,
        extra,
    } = cmd
    {
        let day = DayKey::for_date(parse_date(date)?);
        let total = quantity_minutes(*hours, *minutes)?;

        let mut store = open_store(cfg)?;
        let entry = EntryLogic::add_quantity(&mut store, &day, total, *extra)?;

        let target = format_iso(day.date);
        ttlog_quiet(store.kv().conn(), "quantity", &target, &entry.label());
        success(format!("Added {} on {}", entry.label(), target));
    }

    Ok(())
}
