use crate::cli::commands::{month_or_current, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOutcome, notify_export_success};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        format,
        dir,
        force,
    } = cmd
    {
        let month = month_or_current(month.as_ref())?;
        let dir = match dir {
            Some(d) => expand_tilde(d),
            None => cfg.reports_path(),
        };

        let store = open_store(cfg)?;
        let outcome = ExportLogic::export_month(
            &store,
            month,
            *format,
            &dir,
            &cfg.labels,
            &Local::now(),
            *force,
        )?;

        match outcome {
            ExportOutcome::NoData { month } => {
                warning(format!("No data to export for {}.", month.label()));
            }
            ExportOutcome::Written { path, bytes } => {
                ttlog_quiet(
                    store.kv().conn(),
                    "export",
                    &path.to_string_lossy(),
                    &format!("{} {} ({bytes} bytes)", format.as_str(), month.key()),
                );
                notify_export_success(format.as_str(), &path);
            }
        }
    }

    Ok(())
}
