use serde::Serialize;

/// Hourly pay rates configured for one month.
///
/// `(0, 0)` is the "not configured yet" state rather than a real zero rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlyRate {
    pub normal: f64,
    pub extra: f64,
}

impl MonthlyRate {
    pub fn new(normal: f64, extra: f64) -> Self {
        Self { normal, extra }
    }

    pub fn is_configured(&self) -> bool {
        !(self.normal == 0.0 && self.extra == 0.0)
    }
}

/// Read a rate typed by the user or stored as text.
///
/// Both `,` and `.` are accepted as decimal separator; anything that does
/// not parse as a finite, non-negative number reads as `0.0`.
pub fn parse_rate_text(text: &str) -> f64 {
    match text.trim().replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}
