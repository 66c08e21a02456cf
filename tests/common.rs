#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use horaslite::models::week_id::DayKey;
use horaslite::store::{MemoryStore, TimeRecordStore};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hl() -> Command {
    cargo_bin_cmd!("horaslite")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_horaslite.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty output directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_horaslite_out", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Initialize the DB schema in test mode (no config file written)
pub fn init_db(db_path: &str) {
    hl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn memory_store() -> TimeRecordStore<MemoryStore> {
    TimeRecordStore::new(MemoryStore::new())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn day(y: i32, m: u32, d: u32) -> DayKey {
    DayKey::for_date(date(y, m, d))
}

pub const HOUR: i64 = 3_600_000;
