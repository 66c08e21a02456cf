use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::{Edit, KeyValueStore};
use rusqlite::{Connection, OptionalExtension, params};

/// Key-value store persisted in the `prefs` table of a SQLite file.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (and migrate if needed) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Underlying connection, for the audit log.
    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM prefs WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn apply(&mut self, edits: Vec<Edit>) -> AppResult<()> {
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            for edit in &edits {
                match edit {
                    Edit::Put(k, v) => {
                        tx.execute(
                            "INSERT INTO prefs (key, value) VALUES (?1, ?2)
                             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                            params![k, v],
                        )?;
                    }
                    Edit::Remove(k) => {
                        tx.execute("DELETE FROM prefs WHERE key = ?1", params![k])?;
                    }
                }
            }
            tx.commit()
        })?;
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT key FROM prefs WHERE substr(key, 1, ?2) = ?1 ORDER BY key ASC")?;

        let rows = stmt.query_map(params![prefix, prefix.chars().count() as i64], |row| {
            row.get::<_, String>(0)
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
