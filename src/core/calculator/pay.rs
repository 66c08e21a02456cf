use crate::models::rates::MonthlyRate;
use crate::utils::formatting::millis_to_hours;
use serde::Serialize;

/// Earnings for a span of normal and extra time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Pay {
    pub normal: f64,
    pub extra: f64,
}

impl Pay {
    pub fn total(&self) -> f64 {
        self.normal + self.extra
    }
}

pub fn compute_pay(normal_millis: i64, extra_millis: i64, rate: MonthlyRate) -> Pay {
    Pay {
        normal: millis_to_hours(normal_millis) * rate.normal,
        extra: millis_to_hours(extra_millis) * rate.extra,
    }
}
