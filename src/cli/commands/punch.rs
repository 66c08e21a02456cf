use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::{PunchLogic, PunchOutcome};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::week_id::DayKey;
use crate::ui::messages::{info, success};
use crate::utils::date::{date_or_today, format_iso};
use chrono::{Local, TimeZone};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { date } = cmd {
        let day = DayKey::for_date(date_or_today(date.as_ref())?);
        let target = format_iso(day.date);

        let mut store = open_store(cfg)?;
        let now = Local::now();

        match PunchLogic::toggle(&mut store, &day, &now)? {
            PunchOutcome::Started { at_millis } => {
                let at = Local
                    .timestamp_millis_opt(at_millis)
                    .single()
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_default();
                ttlog_quiet(store.kv().conn(), "punch", &target, &format!("started at {at}"));
                success(format!("Punch started on {target} at {at}"));
                info("Run `punch` again to stop it.");
            }
            PunchOutcome::Stopped { entry } => {
                ttlog_quiet(store.kv().conn(), "punch", &target, &entry.label());
                success(format!("Punch stopped on {target}: {}", entry.label()));
            }
        }
    }

    Ok(())
}
