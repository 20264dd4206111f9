#![forbid(unsafe_code)]

use crate::regions::RegionActivity;
use crate::store::StoreError;
use plots_core::spiral::GridPos;
use plots_core::{Plot, PlotKey};
use serde::Deserialize;
use std::collections::HashSet;

/// How merge/unmerge batches react to a failing item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Skip the failing item and keep going; the batch still succeeds.
    #[default]
    ContinueOnError,
    /// Roll the whole batch back on the first failing item.
    Atomic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub applied: usize,
    pub skipped: usize,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

/// Durable storage behind a [`crate::DataProvider`].
///
/// Implementations never report a missing row as an error: absent plots come
/// back as empty [`Plot`] values and absent edges as `None` or empty lists.
pub trait PlotBackend {
    fn plot_record(&self, key: &PlotKey) -> Result<Plot, StoreError>;

    /// Persists a plot and returns its row id.
    fn save_record(&mut self, plot: &Plot) -> Result<i64, StoreError>;

    fn delete_record(&mut self, plot: &Plot) -> Result<(), StoreError>;

    fn plots_by_owner(
        &self,
        owner: &str,
        region: Option<&str>,
        regions: &dyn RegionActivity,
    ) -> Result<Vec<Plot>, StoreError>;

    fn merge_plots(
        &mut self,
        base: &PlotKey,
        satellites: &[PlotKey],
        policy: BatchPolicy,
    ) -> Result<BatchOutcome, StoreError>;

    fn unmerge_plots(
        &mut self,
        satellites: &[PlotKey],
        policy: BatchPolicy,
    ) -> Result<BatchOutcome, StoreError>;

    fn merge_base_key(&self, satellite: &PlotKey) -> Result<Option<PlotKey>, StoreError>;

    fn merged_satellite_keys(&self, base: &PlotKey) -> Result<Vec<PlotKey>, StoreError>;

    /// Stored coordinates of `region` at Chebyshev distance `radius`.
    fn occupied_on_ring(&self, region: &str, radius: u32) -> Result<HashSet<GridPos>, StoreError>;

    fn close(self) -> Result<(), StoreError>
    where
        Self: Sized;
}
