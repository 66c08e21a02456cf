use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode) and the
/// SQLite database with all pending migrations applied.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    info("Initializing horaslite…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {db_path}"));

    let store = SqliteStore::open(&db_path)?;

    ttlog_quiet(
        store.conn(),
        "init",
        &db_path,
        &format!("Database initialized at {db_path}"),
    );

    success(format!("Database initialized at {db_path}"));
    Ok(())
}
