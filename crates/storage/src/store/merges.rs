#![forbid(unsafe_code)]

use super::support::{MERGE_COLUMNS, merge_edge_from_row};
use super::*;
use plots_core::MergeEdge;
use rusqlite::{OptionalExtension, Transaction, params};
use tracing::warn;

impl SqliteStore {
    /// Points every satellite at `base`, replacing any previous base.
    pub fn merge_plots(
        &mut self,
        base: &PlotKey,
        satellites: &[PlotKey],
        policy: BatchPolicy,
    ) -> Result<BatchOutcome, StoreError> {
        let tx = self.conn.transaction()?;
        let mut outcome = BatchOutcome::default();
        for satellite in satellites {
            match upsert_merge_edge_tx(&tx, base, satellite) {
                Ok(()) => outcome.applied += 1,
                Err(err) => match policy {
                    BatchPolicy::ContinueOnError => {
                        warn!(
                            base = %base,
                            satellite = %satellite,
                            error = %err,
                            "skipping merge edge"
                        );
                        outcome.skipped += 1;
                    }
                    BatchPolicy::Atomic => return Err(err),
                },
            }
        }
        tx.commit()?;
        Ok(outcome)
    }

    /// Detaches each satellite from its base. Unmerged plots are a no-op.
    pub fn unmerge_plots(
        &mut self,
        satellites: &[PlotKey],
        policy: BatchPolicy,
    ) -> Result<BatchOutcome, StoreError> {
        let tx = self.conn.transaction()?;
        let mut outcome = BatchOutcome::default();
        for satellite in satellites {
            match delete_merge_edge_tx(&tx, satellite) {
                Ok(()) => outcome.applied += 1,
                Err(err) => match policy {
                    BatchPolicy::ContinueOnError => {
                        warn!(satellite = %satellite, error = %err, "skipping unmerge");
                        outcome.skipped += 1;
                    }
                    BatchPolicy::Atomic => return Err(err),
                },
            }
        }
        tx.commit()?;
        Ok(outcome)
    }

    pub fn merge_base_key(&self, satellite: &PlotKey) -> Result<Option<PlotKey>, StoreError> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {MERGE_COLUMNS} FROM merges WHERE region=?1 AND X2=?2 AND Z2=?3"
        ))?;
        let edge = stmt
            .query_row(
                params![satellite.region, satellite.x, satellite.z],
                merge_edge_from_row,
            )
            .optional()?;
        Ok(edge.map(|edge| edge.base()))
    }

    pub fn merged_satellite_keys(&self, base: &PlotKey) -> Result<Vec<PlotKey>, StoreError> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {MERGE_COLUMNS} FROM merges WHERE region=?1 AND X1=?2 AND Z1=?3 ORDER BY id ASC"
        ))?;
        let edges = stmt
            .query_map(params![base.region, base.x, base.z], merge_edge_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(edges.iter().map(MergeEdge::satellite).collect())
    }

    /// The base record a plot is merged into, or the plot itself when unmerged.
    pub fn merge_base(&self, plot: &Plot) -> Result<Plot, StoreError> {
        match self.merge_base_key(&plot.key())? {
            Some(base) => self.plot_record(&base),
            None => Ok(plot.clone()),
        }
    }

    pub fn merged_satellites(&self, base: &Plot) -> Result<Vec<Plot>, StoreError> {
        self.merged_satellite_keys(&base.key())?
            .iter()
            .map(|key| self.plot_record(key))
            .collect()
    }
}

fn upsert_merge_edge_tx(
    tx: &Transaction<'_>,
    base: &PlotKey,
    satellite: &PlotKey,
) -> Result<(), StoreError> {
    if satellite.region != base.region {
        return Err(StoreError::RegionMismatch {
            base: base.region.clone(),
            satellite: satellite.region.clone(),
        });
    }
    if satellite == base {
        return Err(StoreError::InvalidInput("plot cannot be merged into itself"));
    }
    let edge = MergeEdge::new(base, satellite.x, satellite.z);
    tx.prepare_cached(&format!(
        "INSERT OR REPLACE INTO merges({MERGE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5)"
    ))?
    .execute(params![
        edge.region,
        edge.base_x,
        edge.base_z,
        edge.satellite_x,
        edge.satellite_z
    ])?;
    Ok(())
}

fn delete_merge_edge_tx(tx: &Transaction<'_>, satellite: &PlotKey) -> Result<(), StoreError> {
    tx.prepare_cached("DELETE FROM merges WHERE region=?1 AND X2=?2 AND Z2=?3")?
        .execute(params![satellite.region, satellite.x, satellite.z])?;
    Ok(())
}
