#![forbid(unsafe_code)]

use super::support::{PLOT_COLUMNS, plot_from_row};
use super::*;
use plots_core::join_names;
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    /// Loads the plot at `key`, or the empty plot there when no row exists.
    pub fn plot_record(&self, key: &PlotKey) -> Result<Plot, StoreError> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {PLOT_COLUMNS} FROM plots WHERE region=?1 AND X=?2 AND Z=?3 \
             ORDER BY id ASC LIMIT 1"
        ))?;
        let found = stmt
            .query_row(params![key.region, key.x, key.z], plot_from_row)
            .optional()?;
        Ok(found.unwrap_or_else(|| Plot::empty_at(key)))
    }

    /// Writes a plot and returns its row id.
    ///
    /// A plot with a known id is updated in place when that row still sits at
    /// the plot's position. Otherwise the row at the position is replaced
    /// (keeping its id) or a new row is inserted; a row the id names elsewhere
    /// is left alone.
    pub fn save_record(&mut self, plot: &Plot) -> Result<i64, StoreError> {
        let helpers = join_names(&plot.helpers);
        let denied = join_names(&plot.denied);
        let pvp = plot.pvp.as_flag();

        if let Some(id) = plot.id {
            let changed = self
                .conn
                .prepare_cached(
                    "UPDATE plots SET name=?2, owner=?3, helpers=?4, denied=?5, biome=?6, pvp=?7 \
                     WHERE id=?1 AND region=?8 AND X=?9 AND Z=?10",
                )?
                .execute(params![
                    id,
                    plot.name,
                    plot.owner,
                    helpers,
                    denied,
                    plot.biome,
                    pvp,
                    plot.region,
                    plot.x,
                    plot.z
                ])?;
            if changed > 0 {
                return Ok(id);
            }
        }

        self.conn
            .prepare_cached(
                "INSERT OR REPLACE INTO plots(id, region, X, Z, name, owner, helpers, denied, biome, pvp) \
                 VALUES ((SELECT id FROM plots WHERE region=?1 AND X=?2 AND Z=?3 ORDER BY id ASC LIMIT 1), \
                 ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?
            .execute(params![
                plot.region,
                plot.x,
                plot.z,
                plot.name,
                plot.owner,
                helpers,
                denied,
                plot.biome,
                pvp
            ])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Removes a plot's row. Removing a row that does not exist succeeds.
    pub fn delete_record(&mut self, plot: &Plot) -> Result<(), StoreError> {
        match plot.id {
            Some(id) => {
                self.conn
                    .prepare_cached("DELETE FROM plots WHERE id=?1")?
                    .execute(params![id])?;
            }
            None => {
                self.conn
                    .prepare_cached("DELETE FROM plots WHERE region=?1 AND X=?2 AND Z=?3")?
                    .execute(params![plot.region, plot.x, plot.z])?;
            }
        }
        Ok(())
    }

    /// Plots owned by `owner`, limited to active regions and ordered by region.
    ///
    /// `region = None` searches every region.
    pub fn plots_by_owner(
        &self,
        owner: &str,
        region: Option<&str>,
        regions: &dyn RegionActivity,
    ) -> Result<Vec<Plot>, StoreError> {
        let mut plots = match region {
            Some(region) => {
                let mut stmt = self.conn.prepare_cached(&format!(
                    "SELECT {PLOT_COLUMNS} FROM plots WHERE owner=?1 AND region=?2 ORDER BY id ASC"
                ))?;
                let rows = stmt
                    .query_map(params![owner, region], plot_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let mut stmt = self.conn.prepare_cached(&format!(
                    "SELECT {PLOT_COLUMNS} FROM plots WHERE owner=?1 ORDER BY id ASC"
                ))?;
                let rows = stmt
                    .query_map(params![owner], plot_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };

        plots.retain(|plot| regions.is_region_active(&plot.region));
        plots.sort_by(|a, b| a.region.cmp(&b.region));
        Ok(plots)
    }
}
