//! Persistent storage using redb.
//!
//! The shell persists exactly one thing: whether this profile has already
//! seen the intro. It lives in a `flags` table as `has_visited → "true"`.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::PortfolioResult;

const FLAGS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("flags");

/// Key of the first-visit flag.
pub const VISITED_KEY: &str = "has_visited";

/// Database file name inside the data directory.
pub const DB_FILE: &str = "portfolio.redb";

#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    /// Open (or create) the database at `path`.
    ///
    /// Creates the parent directory and the flags table if needed.
    pub fn new(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(FLAGS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open `<data_dir>/portfolio.redb`.
    pub fn open_in(data_dir: impl AsRef<Path>) -> PortfolioResult<Self> {
        Self::new(data_dir.as_ref().join(DB_FILE))
    }

    fn get_flag(&self, key: &str) -> PortfolioResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(FLAGS_TABLE)?;
        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set_flag(&self, key: &str, value: &str) -> PortfolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(FLAGS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove_flag(&self, key: &str) -> PortfolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(FLAGS_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn has_visited(&self) -> PortfolioResult<bool> {
        Ok(self.get_flag(VISITED_KEY)?.as_deref() == Some("true"))
    }

    pub fn mark_visited(&self) -> PortfolioResult<()> {
        self.set_flag(VISITED_KEY, "true")
    }

    /// Forget the visit, so the intro plays again on next launch.
    pub fn clear_visited(&self) -> PortfolioResult<()> {
        self.remove_flag(VISITED_KEY)
    }
}

/// Best-effort access to the visit flag.
///
/// Storage problems never surface to the UI: a missing or broken store
/// reads as "not visited" and failed writes are only logged.
#[derive(Clone, Debug, Default)]
pub struct VisitFlag {
    storage: Option<Storage>,
}

impl VisitFlag {
    pub fn new(storage: Option<Storage>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> bool {
        let Some(storage) = &self.storage else {
            return false;
        };
        match storage.has_visited() {
            Ok(visited) => visited,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read visit flag");
                false
            }
        }
    }

    pub fn store(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.mark_visited() {
            tracing::warn!(error = %e, "Failed to persist visit flag");
        }
    }

    pub fn clear(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.clear_visited() {
            tracing::warn!(error = %e, "Failed to clear visit flag");
        }
    }
}
