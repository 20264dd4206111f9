#![forbid(unsafe_code)]

mod error;
mod merges;
mod plots;
mod rings;
mod support;

pub use error::StoreError;

use crate::backend::{BatchOutcome, BatchPolicy, PlotBackend};
use crate::regions::RegionActivity;
use plots_core::spiral::GridPos;
use plots_core::{Plot, PlotKey};
use rusqlite::Connection;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;
use support::migrate_sqlite_schema;
use tracing::debug;

pub const DEFAULT_DATABASE_FILE: &str = "plots.db";

/// SQLite-backed plot and merge-edge storage.
///
/// Statements go through the connection's prepared statement cache. Writes
/// take `&mut self`; callers sharing a store across threads serialize access
/// themselves.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl SqliteStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_file(storage_dir, DEFAULT_DATABASE_FILE)
    }

    pub fn open_file(storage_dir: impl AsRef<Path>, file_name: &str) -> Result<Self, StoreError> {
        if file_name.is_empty() {
            return Err(StoreError::InvalidInput("database file name is empty"));
        }
        let storage_dir = storage_dir.as_ref();
        std::fs::create_dir_all(storage_dir)?;

        let db_path = storage_dir.join(file_name);
        let conn = Connection::open(&db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        migrate_sqlite_schema(&conn)?;

        debug!(path = %db_path.display(), "sqlite plot store opened");
        Ok(Self {
            conn,
            db_path: Some(db_path),
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        migrate_sqlite_schema(&conn)?;
        debug!("in-memory sqlite plot store opened");
        Ok(Self {
            conn,
            db_path: None,
        })
    }

    /// `None` for in-memory stores.
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn close(self) -> Result<(), StoreError> {
        let db_path = self.db_path;
        self.conn.close().map_err(|(_, err)| StoreError::Sql(err))?;
        match db_path {
            Some(path) => debug!(path = %path.display(), "sqlite plot store closed"),
            None => debug!("in-memory sqlite plot store closed"),
        }
        Ok(())
    }
}

impl PlotBackend for SqliteStore {
    fn plot_record(&self, key: &PlotKey) -> Result<Plot, StoreError> {
        SqliteStore::plot_record(self, key)
    }

    fn save_record(&mut self, plot: &Plot) -> Result<i64, StoreError> {
        SqliteStore::save_record(self, plot)
    }

    fn delete_record(&mut self, plot: &Plot) -> Result<(), StoreError> {
        SqliteStore::delete_record(self, plot)
    }

    fn plots_by_owner(
        &self,
        owner: &str,
        region: Option<&str>,
        regions: &dyn RegionActivity,
    ) -> Result<Vec<Plot>, StoreError> {
        SqliteStore::plots_by_owner(self, owner, region, regions)
    }

    fn merge_plots(
        &mut self,
        base: &PlotKey,
        satellites: &[PlotKey],
        policy: BatchPolicy,
    ) -> Result<BatchOutcome, StoreError> {
        SqliteStore::merge_plots(self, base, satellites, policy)
    }

    fn unmerge_plots(
        &mut self,
        satellites: &[PlotKey],
        policy: BatchPolicy,
    ) -> Result<BatchOutcome, StoreError> {
        SqliteStore::unmerge_plots(self, satellites, policy)
    }

    fn merge_base_key(&self, satellite: &PlotKey) -> Result<Option<PlotKey>, StoreError> {
        SqliteStore::merge_base_key(self, satellite)
    }

    fn merged_satellite_keys(&self, base: &PlotKey) -> Result<Vec<PlotKey>, StoreError> {
        SqliteStore::merged_satellite_keys(self, base)
    }

    fn occupied_on_ring(&self, region: &str, radius: u32) -> Result<HashSet<GridPos>, StoreError> {
        SqliteStore::occupied_on_ring(self, region, radius)
    }

    fn close(self) -> Result<(), StoreError> {
        SqliteStore::close(self)
    }
}
