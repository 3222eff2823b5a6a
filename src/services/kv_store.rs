//! SQLite persistence layer for on-device key-value storage.
//!
//! A single `kv` table holds UTF-8 JSON text keyed by string. Writes are
//! synchronous and immediately visible to subsequent reads in the same
//! process. A value that fails to deserialize is treated as absent and the
//! key is removed; corruption never surfaces as an error to callers.

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Durable string-keyed store shared by the whole application.
pub struct KvStore {
    conn: Mutex<Connection>,
}

impl KvStore {
    /// Open (or create) the store at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        info!("Key-value store initialized");
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn new_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        debug!("In-memory key-value store initialized");
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), rusqlite::Error> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Get the raw stored text for a key.
    pub fn get(&self, key: &str) -> Option<String> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .unwrap_or_else(|e| {
            warn!("Error reading key '{}': {}", key, e);
            None
        })
    }

    /// Get and deserialize a stored JSON value.
    ///
    /// A corrupt or schema-mismatched payload is deleted and reported as
    /// absent, so callers can treat a missing value as a normal state.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Corrupt payload for key '{}', removing: {}", key, e);
                if let Err(e) = self.delete(key) {
                    warn!("Failed to remove corrupt key '{}': {}", key, e);
                }
                None
            }
        }
    }

    /// Set the raw text for a key, replacing any prior value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        debug!("Stored key '{}'", key);
        Ok(())
    }

    /// Serialize and store a JSON value.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> crate::error::Result<()> {
        let text = serde_json::to_string(value)?;
        self.set(key, &text)?;
        Ok(())
    }

    /// Remove a key. Removing an absent key is a no-op.
    pub fn delete(&self, key: &str) -> Result<(), rusqlite::Error> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Whether a key currently holds a value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove every key in the store.
    pub fn clear(&self) -> Result<(), rusqlite::Error> {
        let conn = self.conn.lock().unwrap();
        let count = conn.execute("DELETE FROM kv", [])?;
        if count > 0 {
            info!("Cleared {} keys from store", count);
        }
        Ok(())
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
            .unwrap_or(0)
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
