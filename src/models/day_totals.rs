use serde::Serialize;

/// Millisecond buckets computed for one day (or any sum of days).
///
/// `total == normal + manual_extra + auto_extra` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailyTotals {
    pub total_millis: i64,
    pub manual_extra_millis: i64,
    pub auto_extra_millis: i64,
}

impl DailyTotals {
    pub fn extra_millis(&self) -> i64 {
        self.manual_extra_millis + self.auto_extra_millis
    }

    pub fn normal_millis(&self) -> i64 {
        self.total_millis - self.extra_millis()
    }

    pub fn is_empty(&self) -> bool {
        self.total_millis == 0
    }
}

impl std::ops::Add for DailyTotals {
    type Output = DailyTotals;

    fn add(self, rhs: Self) -> Self::Output {
        DailyTotals {
            total_millis: self.total_millis + rhs.total_millis,
            manual_extra_millis: self.manual_extra_millis + rhs.manual_extra_millis,
            auto_extra_millis: self.auto_extra_millis + rhs.auto_extra_millis,
        }
    }
}

impl std::iter::Sum for DailyTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DailyTotals::default(), |acc, t| acc + t)
    }
}
