use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print: true, limit } = cmd {
        let store = open_store(cfg)?;
        let lines = load_log(store.kv().conn(), *limit)?;

        if lines.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("ID"),
            Column::left("Date"),
            Column::left("Operation"),
            Column::left("Target"),
            Column::left("Message"),
        ]);
        for l in lines {
            table.add_row(vec![l.id.to_string(), l.date, l.operation, l.target, l.message]);
        }

        header("Internal log");
        print!("{}", table.render());
    }

    Ok(())
}
