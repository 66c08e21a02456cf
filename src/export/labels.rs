//! Localizable strings used by the report renderers.
//!
//! Templates use `{name}` placeholders filled by [`fill`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    pub csv_header: Vec<String>,
    pub csv_totals_label: String,
    pub pdf_title: String,
    pub pdf_totals: String,
    pub pdf_pay_totals: String,
    pub pdf_daily_header: String,
    pub pdf_daily_line: String,
    pub pdf_no_worked_days: String,
    pub pdf_footer: String,
    pub currency_symbol: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            csv_header: [
                "date",
                "normal_hours",
                "extra_hours",
                "total_hours",
                "normal_pay",
                "extra_pay",
                "total_pay",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            csv_totals_label: "TOTAL".to_string(),
            pdf_title: "Hours report {month}".to_string(),
            pdf_totals: "Hours: normal {normal}, extra {extra}, total {total}".to_string(),
            pdf_pay_totals: "Pay: normal {normal}, extra {extra}, total {total}".to_string(),
            pdf_daily_header: "Daily detail".to_string(),
            pdf_daily_line: "{date}    normal {normal}    extra {extra}    total {total}"
                .to_string(),
            pdf_no_worked_days: "No worked days this month.".to_string(),
            pdf_footer: "Generated on {date}".to_string(),
            currency_symbol: "€".to_string(),
        }
    }
}

/// Replace every `{key}` in `template` with its value.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |acc, (k, v)| {
        acc.replace(&format!("{{{k}}}"), v)
    })
}
