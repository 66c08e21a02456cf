use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::month::YearMonth;
use crate::models::rates::{MonthlyRate, parse_rate_text};
use crate::ui::messages::{header, hint, info, success};
use crate::utils::formatting::format_currency;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rates {
        month,
        normal,
        extra,
        list,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let currency = cfg.labels.currency_symbol.as_str();

        if *list {
            let months = store.months_with_rates()?;
            if months.is_empty() {
                info("No rates configured yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::left("Month"),
                Column::right("Normal"),
                Column::right("Extra"),
            ]);
            for m in months {
                let rate = store.rates(m)?;
                table.add_row(vec![
                    m.key(),
                    format_currency(rate.normal, currency),
                    format_currency(rate.extra, currency),
                ]);
            }
            header("Hourly rates");
            print!("{}", table.render());
            return Ok(());
        }

        let Some(month) = month else {
            return Ok(());
        };
        let month = YearMonth::parse(month)?;
        let current = store.rates(month)?;

        if normal.is_none() && extra.is_none() {
            header(format!("Rates for {}", month.label()));
            println!("normal: {}", format_currency(current.normal, currency));
            println!("extra : {}", format_currency(current.extra, currency));
            if !current.is_configured() {
                hint("Set them with --normal and --extra.");
            }
            return Ok(());
        }

        let rate = MonthlyRate::new(
            normal.as_deref().map(parse_rate_text).unwrap_or(current.normal),
            extra.as_deref().map(parse_rate_text).unwrap_or(current.extra),
        );
        store.set_rates(month, rate)?;

        let summary = format!(
            "normal {}, extra {}",
            format_currency(rate.normal, currency),
            format_currency(rate.extra, currency)
        );
        ttlog_quiet(store.kv().conn(), "rates", &month.key(), &summary);
        success(format!("Rates for {} saved: {summary}", month.label()));
    }

    Ok(())
}
