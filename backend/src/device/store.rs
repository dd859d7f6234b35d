//! Persists parameter values in SQLite so they survive a restart.

use std::path::{Path, PathBuf};

use log::debug;
use rusqlite::{params, Connection};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("corrupt stored value for `{name}`: {source}")]
    Corrupt {
        name: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn open(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (name TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(conn)
    }

    /// Every stored value, JSON-decoded.
    pub fn load(&self) -> Result<Map<String, Value>, StoreError> {
        let conn = self.open()?;
        let mut stmt = conn.prepare("SELECT name, value FROM settings")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;

        let mut values = Map::new();
        for row in rows {
            let (name, raw) = row?;
            let value = serde_json::from_str(&raw)
                .map_err(|source| StoreError::Corrupt { name: name.clone(), source })?;
            values.insert(name, value);
        }
        debug!("loaded {} stored setting(s) from {}", values.len(), self.path.display());
        Ok(values)
    }

    /// Writes all values in one transaction.
    pub fn save(&self, values: &Map<String, Value>) -> Result<(), StoreError> {
        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        for (name, value) in values {
            tx.execute(
                "INSERT OR REPLACE INTO settings (name, value) VALUES (?1, ?2)",
                params![name, value.to_string()],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.sqlite");
        let values = json!({"device_name": "Gate1", "inching_delay": 5, "led": true});

        SettingsStore::new(&path).save(values.as_object().unwrap()).unwrap();
        let loaded = SettingsStore::new(&path).load().unwrap();

        assert_eq!(Value::Object(loaded), values);
    }

    #[test]
    fn missing_database_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = SettingsStore::new(dir.path().join("fresh.sqlite")).load().unwrap();
        assert!(loaded.is_empty());
    }
}
