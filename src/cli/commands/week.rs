use crate::cli::commands::{CliStore, open_store, resolve_offset};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{build_monthly_report_with_stored_rates, monthly_summary};
use crate::core::week::{DayView, WeekSummary, week_summary};
use crate::errors::AppResult;
use crate::models::time_entry::MILLIS_PER_MINUTE;
use crate::ui::messages::{header, hint};
use crate::utils::date::{format_long, today};
use crate::utils::formatting::{format_currency, format_duration};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { week } = cmd {
        let offset = resolve_offset(week)?;
        let store = open_store(cfg)?;
        let summary = week_summary(&store, today(), offset)?;

        print_week(&summary, cfg);
        print_month_summaries(&store, &summary, cfg)?;
    }

    Ok(())
}

fn print_week(summary: &WeekSummary, cfg: &Config) {
    header(format!(
        "Week {} ({} - {})",
        summary.week_id,
        format_long(summary.monday),
        format_long(summary.sunday)
    ));

    let now_millis = Local::now().timestamp_millis();
    for day in &summary.days {
        print_day(day, now_millis);
    }

    println!();
    println!(
        "Week total: {}  (normal {}, extra {})",
        format_duration(summary.totals.total_millis),
        format_duration(summary.totals.normal_millis()),
        format_duration(summary.totals.extra_millis()),
    );

    let currency = cfg.labels.currency_symbol.as_str();
    match summary.pay() {
        Some(pay) => println!(
            "Week pay  : {}  (normal {}, extra {})",
            format_currency(pay.total(), currency),
            format_currency(pay.normal, currency),
            format_currency(pay.extra, currency),
        ),
        None => {
            if let Some(first) = summary.months.first() {
                hint(format!(
                    "Rates for {} are not set: `horaslite rates {} --normal <N> --extra <E>`",
                    first.label(),
                    first.key()
                ));
            }
        }
    }
}

fn print_day(day: &DayView, now_millis: i64) {
    let title = format!("{} {}", day.key.date.format("%a"), format_long(day.key.date));

    if day.entries.is_empty() && day.ongoing_since.is_none() {
        println!("{title}: -");
        return;
    }

    println!(
        "{title}: {}  (normal {}, extra {})",
        format_duration(day.totals.total_millis),
        format_duration(day.totals.normal_millis()),
        format_duration(day.totals.extra_millis()),
    );
    for (i, entry) in day.entries.iter().enumerate() {
        println!("   #{:<2} {}", i + 1, entry.label());
    }
    if let Some(since) = day.ongoing_since {
        let running = (now_millis - since).max(0) / MILLIS_PER_MINUTE * MILLIS_PER_MINUTE;
        println!("   ⏱  running for {}", format_duration(running));
    }
}

/// Summary of every month the week touches, for months with data and rates.
fn print_month_summaries(
    store: &CliStore,
    summary: &WeekSummary,
    cfg: &Config,
) -> AppResult<()> {
    for month in &summary.months {
        let report = build_monthly_report_with_stored_rates(store, *month)?;
        if let Some(text) = monthly_summary(&report, &cfg.labels.currency_symbol) {
            println!();
            println!("{text}");
        }
    }
    Ok(())
}
