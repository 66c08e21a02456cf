use crate::utils::formatting::format_duration;
use crate::utils::time::format_minute_of_day;

pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// What a logged span measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Start and end, both in minutes since midnight.
    Interval { start: i64, end: i64 },
    /// A plain amount of minutes with no clock position.
    Quantity { minutes: i64 },
}

/// Where an entry came from. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    Manual,
    Punch,
    Quantity,
    Other(String),
}

impl EntrySource {
    pub fn as_str(&self) -> &str {
        match self {
            EntrySource::Manual => "manual",
            EntrySource::Punch => "punch",
            EntrySource::Quantity => "quantity",
            EntrySource::Other(s) => s,
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "manual" => EntrySource::Manual,
            "punch" => EntrySource::Punch,
            "quantity" => EntrySource::Quantity,
            other => EntrySource::Other(other.to_string()),
        }
    }
}

/// One logged span of work for a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub kind: EntryKind,
    pub manual_extra: bool,
    pub source: EntrySource,
}

impl TimeEntry {
    pub fn interval(start: i64, end: i64, manual_extra: bool, source: EntrySource) -> Self {
        Self {
            kind: EntryKind::Interval { start, end },
            manual_extra,
            source,
        }
    }

    pub fn quantity(minutes: i64, manual_extra: bool) -> Self {
        Self {
            kind: EntryKind::Quantity { minutes },
            manual_extra,
            source: EntrySource::Quantity,
        }
    }

    /// Duration in minutes, never negative.
    pub fn duration_minutes(&self) -> i64 {
        match self.kind {
            EntryKind::Interval { start, end } => end.saturating_sub(start).max(0),
            EntryKind::Quantity { minutes } => minutes.max(0),
        }
    }

    pub fn duration_millis(&self) -> i64 {
        self.duration_minutes().saturating_mul(MILLIS_PER_MINUTE)
    }

    /// Same entry with the manual-extra flag set to `manual_extra`.
    pub fn with_manual_extra(&self, manual_extra: bool) -> Self {
        Self {
            manual_extra,
            ..self.clone()
        }
    }

    /// Human readable line, e.g. `09:00 - 17:30  (8:30) [EXTRA]`.
    pub fn label(&self) -> String {
        let duration = format_duration(self.duration_millis());
        let flag = if self.manual_extra { " [EXTRA]" } else { "" };

        match self.kind {
            EntryKind::Interval { start, end } => format!(
                "{} - {}  ({}){}",
                format_minute_of_day(start),
                format_minute_of_day(end),
                duration,
                flag
            ),
            EntryKind::Quantity { .. } => format!("Quantity: {}{}", duration, flag),
        }
    }
}
