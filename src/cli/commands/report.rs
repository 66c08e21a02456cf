use crate::cli::commands::{month_or_current, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{build_monthly_report_with_stored_rates, monthly_summary};
use crate::errors::AppResult;
use crate::ui::messages::{header, hint, info};
use crate::utils::date::format_iso;
use crate::utils::formatting::{format_currency, format_duration};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { month } = cmd {
        let month = month_or_current(month.as_ref())?;
        let store = open_store(cfg)?;
        let report = build_monthly_report_with_stored_rates(&store, month)?;
        let currency = cfg.labels.currency_symbol.as_str();

        header(format!("Report {}", month.label()));

        if !report.has_data() {
            info(format!("No hours logged in {}.", month.label()));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::right("Normal"),
            Column::right("Extra"),
            Column::right("Total"),
            Column::right("Pay"),
        ]);
        for day in report.worked_days() {
            table.add_row(vec![
                format_iso(day.date),
                format_duration(day.normal_millis()),
                format_duration(day.extra_millis()),
                format_duration(day.total_millis()),
                format_currency(day.pay(report.rate).total(), currency),
            ]);
        }
        table.add_row(vec![
            cfg.labels.csv_totals_label.clone(),
            format_duration(report.total_normal_millis),
            format_duration(report.total_extra_millis),
            format_duration(report.total_millis()),
            format_currency(report.total_pay(), currency),
        ]);
        print!("{}", table.render());

        match monthly_summary(&report, currency) {
            Some(summary) => println!("\n{summary}"),
            None => hint(format!(
                "Rates for {} are not set: `horaslite rates {} --normal <N> --extra <E>`",
                month.label(),
                month.key()
            )),
        }
    }

    Ok(())
}
