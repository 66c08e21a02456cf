use crate::cli::commands::{open_store, resolve_offset};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{week_id, week_label};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::{format_long, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { week, force } = cmd {
        let offset = resolve_offset(week)?;
        let today = today();
        let (monday, sunday) = week_label(today, offset)?;
        let range = format!("{} - {}", format_long(monday), format_long(sunday));

        if !*force {
            warning(format!(
                "This removes every entry of the week {range}. Re-run with --force to confirm."
            ));
            return Ok(());
        }

        let id = week_id(today, offset)?;
        let mut store = open_store(cfg)?;
        store.reset_week(id)?;

        ttlog_quiet(store.kv().conn(), "reset", &id.to_string(), &range);
        success(format!("Week {range} has been reset."));
    }

    Ok(())
}
