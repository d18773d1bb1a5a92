//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Implement the storage backend contract over the `kv_store` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Each `set` is a single upsert statement; readers never observe a
//!   partially written value.
//! - The connection is expected to come from `db::open_db*`, with
//!   migrations already applied.

use super::{StorageBackend, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Key-value storage over one bootstrapped SQLite connection.
pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StorageBackend for SqliteStorage<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}
