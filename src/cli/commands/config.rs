use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, hint};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            header("Current configuration");
            println!("{}", cfg.to_yaml()?);
        } else {
            hint(format!("Config file: {}", Config::config_file().display()));
            hint("Use --print to show the current configuration.");
        }
    }

    Ok(())
}
