//! JSON wire format of a day record.
//!
//! Interval: `{"s":540,"e":1020,"extra":false,"src":"manual"}`
//! Quantity: `{"type":"quantity","minutes":90,"extra":true,"src":"quantity"}`

use crate::errors::AppResult;
use crate::models::time_entry::{EntryKind, EntrySource, TimeEntry};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
#[serde(untagged)]
enum WireEntry<'a> {
    Interval {
        s: i64,
        e: i64,
        extra: bool,
        src: &'a str,
    },
    Quantity {
        #[serde(rename = "type")]
        kind: &'static str,
        minutes: i64,
        extra: bool,
        src: &'a str,
    },
}

impl<'a> From<&'a TimeEntry> for WireEntry<'a> {
    fn from(entry: &'a TimeEntry) -> Self {
        match entry.kind {
            EntryKind::Interval { start, end } => WireEntry::Interval {
                s: start,
                e: end,
                extra: entry.manual_extra,
                src: entry.source.as_str(),
            },
            EntryKind::Quantity { minutes } => WireEntry::Quantity {
                kind: "quantity",
                minutes,
                extra: entry.manual_extra,
                src: entry.source.as_str(),
            },
        }
    }
}

pub fn encode_entries(entries: &[TimeEntry]) -> AppResult<String> {
    let wire: Vec<WireEntry<'_>> = entries.iter().map(WireEntry::from).collect();
    Ok(serde_json::to_string(&wire)?)
}

/// Decode a stored day record.
///
/// Unreadable JSON or a non-array payload is an empty day; elements that
/// are not objects are skipped; missing or mistyped fields read as zero /
/// false.
pub fn decode_entries(raw: &str) -> Vec<TimeEntry> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_object)
            .map(decode_entry)
            .collect(),
        _ => Vec::new(),
    }
}

fn decode_entry(obj: &Map<String, Value>) -> TimeEntry {
    let manual_extra = obj.get("extra").and_then(Value::as_bool).unwrap_or(false);
    let is_quantity = obj.get("type").and_then(Value::as_str) == Some("quantity");

    if is_quantity {
        TimeEntry {
            kind: EntryKind::Quantity {
                minutes: int_field(obj, "minutes"),
            },
            manual_extra,
            source: source_field(obj, EntrySource::Quantity),
        }
    } else {
        TimeEntry {
            kind: EntryKind::Interval {
                start: int_field(obj, "s"),
                end: int_field(obj, "e"),
            },
            manual_extra,
            source: source_field(obj, EntrySource::Manual),
        }
    }
}

/// Integer field read the way the app always stored them: 32-bit, with
/// out-of-range values clamped.
fn int_field(obj: &Map<String, Value>, name: &str) -> i64 {
    let raw = match obj.get(name) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    raw.clamp(i32::MIN as i64, i32::MAX as i64)
}

fn source_field(obj: &Map<String, Value>, fallback: EntrySource) -> EntrySource {
    obj.get("src")
        .and_then(Value::as_str)
        .map(EntrySource::from_str_lossy)
        .unwrap_or(fallback)
}
