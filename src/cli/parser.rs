use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for horaslite
#[derive(Parser)]
#[command(
    name = "horaslite",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal time tracker: daily intervals, overtime split, monthly pay rates and PDF/CSV reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which week to act on: an offset from the current week, or the week
/// containing a given date.
#[derive(Args, Clone, Debug, Default)]
pub struct WeekSelector {
    /// Weeks from the current one (0 = this week, -1 = last week)
    #[arg(long, short = 'o', allow_hyphen_values = true, conflicts_with = "date")]
    pub offset: Option<i64>,

    /// Jump to the week containing this date (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub date: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Show a week: entries, daily totals, weekly totals and pay
    Week {
        #[command(flatten)]
        week: WeekSelector,
    },

    /// Add a work interval to a day
    Add {
        /// Day (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM)
        end: String,

        #[arg(long, help = "Count the whole interval as extra hours")]
        extra: bool,
    },

    /// Add an amount of time (hours and minutes) to a day
    Quantity {
        /// Day (YYYY-MM-DD)
        date: String,

        /// Hours
        hours: i64,

        /// Minutes (0-59)
        #[arg(default_value_t = 0)]
        minutes: i64,

        #[arg(long, help = "Count the whole amount as extra hours")]
        extra: bool,
    },

    /// Start or stop the running punch of a day
    Punch {
        /// Day (YYYY-MM-DD, default today)
        date: Option<String>,
    },

    /// Toggle the extra flag of an entry
    Toggle {
        /// Day (YYYY-MM-DD)
        date: String,

        /// Entry number as shown by `week`
        index: usize,
    },

    /// Delete an entry
    Del {
        /// Day (YYYY-MM-DD)
        date: String,

        /// Entry number as shown by `week`
        index: usize,
    },

    /// Remove every entry and running punch of a week
    Reset {
        #[command(flatten)]
        week: WeekSelector,

        #[arg(long, short = 'f', help = "Confirm the reset")]
        force: bool,
    },

    /// Show or set the hourly rates of a month
    Rates {
        /// Month (YYYY-MM); omit with --list
        #[arg(required_unless_present = "list")]
        month: Option<String>,

        #[arg(long, help = "Normal hourly rate (accepts , or . as decimal separator)")]
        normal: Option<String>,

        #[arg(long, help = "Extra hourly rate (accepts , or . as decimal separator)")]
        extra: Option<String>,

        #[arg(long, help = "List every month with configured rates")]
        list: bool,
    },

    /// Show the monthly report
    Report {
        /// Month (YYYY-MM, default current month)
        month: Option<String>,
    },

    /// Export the monthly report to a file
    Export {
        /// Month (YYYY-MM, default current month)
        month: Option<String>,

        #[arg(long, short = 'F', value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "DIR", help = "Output directory (default: reports_dir from config)")]
        dir: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}
