//! Local snapshot store backing a [`Workspace`](crate::Workspace).
//!
//! Persistence is a key-value table: the folder and note collections
//! are each serialized as one JSON array under a fixed key and written
//! whole after every mutation. Loads are tolerant — a missing key or an
//! undecodable snapshot is treated as "no prior data" so a damaged
//! store still opens as a cold start.

use crate::{Folder, Note, Result};
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

const FOLDERS_KEY: &str = "folders";
const NOTES_KEY: &str = "notes";

pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens the snapshot store at `path`, creating the file and its
    /// schema on first use.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientnotesError::Database`] if the file cannot
    /// be opened as a SQLite database, or
    /// [`crate::ClientnotesError::InvalidStore`] if a pre-existing
    /// `snapshots` table does not have the expected columns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        let table_exists: bool = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='snapshots'",
            [],
            |row| row.get::<_, i64>(0).map(|count| count > 0),
        )?;

        if table_exists {
            for column in ["key", "value", "saved_at"] {
                let column_exists: bool = conn.query_row(
                    "SELECT COUNT(*) FROM pragma_table_info('snapshots') WHERE name=?1",
                    [column],
                    |row| row.get::<_, i64>(0).map(|count| count > 0),
                )?;
                if !column_exists {
                    return Err(crate::ClientnotesError::InvalidStore(format!(
                        "snapshots table is missing the `{column}` column"
                    )));
                }
            }
        } else {
            conn.execute_batch(
                "CREATE TABLE snapshots (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    saved_at INTEGER NOT NULL
                )",
            )?;
        }

        Ok(Self { conn })
    }

    /// Returns the underlying SQLite connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Loads the folder snapshot, or `None` on a cold start.
    pub fn load_folders(&self) -> Option<Vec<Folder>> {
        self.load(FOLDERS_KEY)
    }

    /// Loads the note snapshot, or `None` on a cold start.
    pub fn load_notes(&self) -> Option<Vec<Note>> {
        self.load(NOTES_KEY)
    }

    /// Replaces the persisted folder snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientnotesError::Database`] if the upsert fails,
    /// or [`crate::ClientnotesError::Json`] if serialization fails.
    pub fn save_folders(&self, folders: &[Folder]) -> Result<()> {
        self.save(FOLDERS_KEY, folders)
    }

    /// Replaces the persisted note snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientnotesError::Database`] if the upsert fails,
    /// or [`crate::ClientnotesError::Json`] if serialization fails.
    pub fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.save(NOTES_KEY, notes)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json: String = self
            .conn
            .query_row("SELECT value FROM snapshots WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .ok()?;

        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding unreadable `{key}` snapshot: {e}");
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, value, saved_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, saved_at = excluded.saved_at",
            rusqlite::params![key, json, chrono::Utc::now().timestamp()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_folder(id: &str, parent_id: Option<&str>) -> Folder {
        Folder {
            id: id.to_string(),
            parent_id: parent_id.map(|s| s.to_string()),
            name: format!("Folder {id}"),
            created_at: 100,
        }
    }

    #[test]
    fn test_open_creates_schema() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp.path()).unwrap();

        let tables: Vec<String> = storage
            .connection()
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert!(tables.contains(&"snapshots".to_string()));
    }

    #[test]
    fn test_cold_start_loads_nothing() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp.path()).unwrap();

        assert!(storage.load_folders().is_none());
        assert!(storage.load_notes().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp.path()).unwrap();

        let folders = vec![sample_folder("f-1", None), sample_folder("f-2", Some("f-1"))];
        let notes = vec![Note {
            id: "n-1".to_string(),
            folder_id: "f-2".to_string(),
            title: "Invoice #1".to_string(),
            content: "body".to_string(),
            created_at: 100,
            updated_at: 200,
        }];

        storage.save_folders(&folders).unwrap();
        storage.save_notes(&notes).unwrap();

        assert_eq!(storage.load_folders().unwrap(), folders);
        assert_eq!(storage.load_notes().unwrap(), notes);
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp.path()).unwrap();

        storage.save_folders(&[sample_folder("f-1", None)]).unwrap();
        storage.save_folders(&[]).unwrap();

        assert!(storage.load_folders().unwrap().is_empty());
    }

    #[test]
    fn test_legacy_snapshot_without_parent_id_migrates() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp.path()).unwrap();

        // A snapshot written before subfolders existed.
        storage
            .connection()
            .execute(
                "INSERT INTO snapshots (key, value, saved_at) VALUES ('folders', ?1, 0)",
                [r#"[{"id":"f-1","name":"Acme","createdAt":100}]"#],
            )
            .unwrap();

        let folders = storage.load_folders().unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].parent_id, None);
    }

    #[test]
    fn test_corrupt_snapshot_is_discarded() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp.path()).unwrap();

        storage
            .connection()
            .execute(
                "INSERT INTO snapshots (key, value, saved_at) VALUES ('notes', 'not json', 0)",
                [],
            )
            .unwrap();

        assert!(storage.load_notes().is_none());
    }

    #[test]
    fn test_open_rejects_malformed_snapshots_table() {
        let temp = NamedTempFile::new().unwrap();

        {
            let conn = Connection::open(temp.path()).unwrap();
            conn.execute("CREATE TABLE snapshots (key TEXT PRIMARY KEY)", [])
                .unwrap();
        }

        let result = Storage::open(temp.path());
        assert!(matches!(
            result,
            Err(crate::ClientnotesError::InvalidStore(_))
        ));
    }

    #[test]
    fn test_open_rejects_non_database_file() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "not a database").unwrap();

        assert!(Storage::open(temp.path()).is_err());
    }
}
