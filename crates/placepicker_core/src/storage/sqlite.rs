//! SQLite-backed key-value storage over the `kv` table.
//!
//! # Invariants
//! - The `kv` schema version is mirrored to `PRAGMA user_version`.
//! - Files written by a newer schema are refused, never rewritten.

use super::{KeyValueStorage, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Schema version of the `kv` table this build writes.
pub const KV_SCHEMA_VERSION: u32 = 1;

const KV_SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key        TEXT PRIMARY KEY NOT NULL,
    value      TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

/// Durable storage owning one SQLite connection.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens the database file at `path`, creating the `kv` table on first use.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::bootstrap("file", Connection::open(path))
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        Self::bootstrap("memory", Connection::open_in_memory())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn bootstrap(mode: &'static str, opened: rusqlite::Result<Connection>) -> StorageResult<Self> {
        let started_at = Instant::now();
        let result = opened
            .map_err(StorageError::from)
            .and_then(|mut conn| ensure_kv_schema(&mut conn).map(|()| conn));

        match result {
            Ok(conn) => {
                info!(
                    "event=storage_open module=storage status=ok mode={} duration_ms={}",
                    mode,
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode={} error={}",
                    mode, err
                );
                Err(err)
            }
        }
    }
}

fn ensure_kv_schema(conn: &mut Connection) -> StorageResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if found > KV_SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchema {
            found,
            supported: KV_SCHEMA_VERSION,
        });
    }
    if found == KV_SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(KV_SCHEMA_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {KV_SCHEMA_VERSION};"))?;
    tx.commit()?;
    Ok(())
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
