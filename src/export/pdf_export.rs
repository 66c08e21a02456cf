// src/export/pdf_export.rs

use crate::core::report::MonthlyReport;
use crate::export::labels::{ReportLabels, fill};
use crate::export::pdf::{FontStyle, PdfManager};
use crate::utils::date::format_long;
use crate::utils::formatting::{format_currency, format_duration};
use chrono::NaiveDate;

pub const PAGE_WIDTH: f32 = 595.0;
pub const BASE_PAGE_HEIGHT: f32 = 842.0;
pub const ROW_HEIGHT: f32 = 28.0;

const MARGIN: f32 = 40.0;
/// Baseline of the first daily row.
const FIRST_ROW_TOP: f32 = 250.0;
/// Gap between the last daily row and the footer.
const FOOTER_GAP: f32 = 20.0;

/// Fixed part of the page: header block, footer and bottom margin.
pub const HEADER_HEIGHT: f32 = FIRST_ROW_TOP + FOOTER_GAP + MARGIN;

/// Height of the single report page: grows with the number of worked days.
pub fn page_height(worked_days: usize) -> f32 {
    BASE_PAGE_HEIGHT.max(HEADER_HEIGHT + worked_days as f32 * ROW_HEIGHT)
}

/// Render the month as a one-page PDF.
pub fn render_pdf(report: &MonthlyReport, labels: &ReportLabels, generated_on: NaiveDate) -> Vec<u8> {
    let worked: Vec<_> = report.worked_days().collect();

    let mut pdf = PdfManager::new(PAGE_WIDTH, page_height(worked.len()));
    let mut content = pdf.new_page();
    let width = pdf.page_width() - 2.0 * MARGIN;

    let month_label = report.month.label();
    let currency = labels.currency_symbol.as_str();
    let pay = report.pay();

    // header
    pdf.draw_text(
        &mut content,
        MARGIN,
        90.0,
        24.0,
        FontStyle::Bold,
        &fill(&labels.pdf_title, &[("month", month_label.as_str())]),
    );
    pdf.draw_rule(&mut content, MARGIN, MARGIN + width, 110.0);

    let normal = format_duration(report.total_normal_millis);
    let extra = format_duration(report.total_extra_millis);
    let total = format_duration(report.total_millis());
    pdf.draw_text(
        &mut content,
        MARGIN,
        150.0,
        14.0,
        FontStyle::Regular,
        &fill(
            &labels.pdf_totals,
            &[("normal", normal.as_str()), ("extra", extra.as_str()), ("total", total.as_str())],
        ),
    );

    let normal_pay = format_currency(pay.normal, currency);
    let extra_pay = format_currency(pay.extra, currency);
    let total_pay = format_currency(pay.total(), currency);
    pdf.draw_text(
        &mut content,
        MARGIN,
        180.0,
        14.0,
        FontStyle::Regular,
        &fill(
            &labels.pdf_pay_totals,
            &[
                ("normal", normal_pay.as_str()),
                ("extra", extra_pay.as_str()),
                ("total", total_pay.as_str()),
            ],
        ),
    );

    // daily rows
    let mut y = 220.0;
    pdf.fill_band(&mut content, MARGIN - 4.0, y - 16.0, width + 8.0, 22.0, 0.88);
    pdf.draw_text(
        &mut content,
        MARGIN,
        y,
        13.0,
        FontStyle::Bold,
        &labels.pdf_daily_header,
    );
    y = FIRST_ROW_TOP;

    if worked.is_empty() {
        pdf.draw_text(
            &mut content,
            MARGIN,
            y,
            13.0,
            FontStyle::Regular,
            &labels.pdf_no_worked_days,
        );
        y += 30.0;
    } else {
        for (i, day) in worked.iter().enumerate() {
            if i % 2 == 1 {
                pdf.fill_band(&mut content, MARGIN - 4.0, y - 18.0, width + 8.0, ROW_HEIGHT, 0.96);
            }

            let date = format_long(day.date);
            let normal = format_duration(day.normal_millis());
            let extra = format_duration(day.extra_millis());
            let total = format_duration(day.total_millis());
            pdf.draw_text(
                &mut content,
                MARGIN,
                y,
                13.0,
                FontStyle::Regular,
                &fill(
                    &labels.pdf_daily_line,
                    &[
                        ("date", date.as_str()),
                        ("normal", normal.as_str()),
                        ("extra", extra.as_str()),
                        ("total", total.as_str()),
                    ],
                ),
            );
            y += ROW_HEIGHT;
        }
    }

    // footer
    y += FOOTER_GAP;
    let generated = format_long(generated_on);
    pdf.draw_text(
        &mut content,
        MARGIN,
        y,
        14.0,
        FontStyle::Regular,
        &fill(&labels.pdf_footer, &[("date", generated.as_str())]),
    );

    pdf.finalize_page(content);
    pdf.finish()
}
