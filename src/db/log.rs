use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::params;
use rusqlite::Connection;

/// One row of the internal audit log.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Like [`ttlog`], but a failure only produces a warning.
pub fn ttlog_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}

/// Most recent `limit` log lines, oldest first.
pub fn load_log(conn: &Connection, limit: usize) -> AppResult<Vec<LogLine>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, operation, target, message FROM (
             SELECT id, date, operation, target, message FROM log
             ORDER BY id DESC LIMIT ?1
         ) ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![limit as i64], |row| {
        Ok(LogLine {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
