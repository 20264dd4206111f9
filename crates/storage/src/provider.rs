#![forbid(unsafe_code)]

use crate::backend::{BatchOutcome, BatchPolicy, PlotBackend};
use crate::cache::{CacheStats, PlotCache};
use crate::config::ProviderConfig;
use crate::regions::RegionActivity;
use crate::store::{SqliteStore, StoreError};
use plots_core::spiral;
use plots_core::{Plot, PlotKey, normalize_names};
use tracing::{debug, warn};

/// Cached front door to plot storage.
///
/// Reads consult the cache first and fall through to the backend on a miss.
/// Every successful read or write refreshes the cache, including "no row
/// here" answers. Merge edges always come from the backend.
pub struct DataProvider<B = SqliteStore> {
    backend: B,
    cache: PlotCache,
    regions: Box<dyn RegionActivity>,
    batch_policy: BatchPolicy,
}

impl DataProvider<SqliteStore> {
    /// Opens (creating if needed) the SQLite database described by `config`.
    pub fn open(
        config: &ProviderConfig,
        regions: impl RegionActivity + 'static,
    ) -> Result<Self, StoreError> {
        let store = SqliteStore::open_file(&config.storage_dir, &config.database_file)?;
        Ok(Self::with_backend(store, config.cache_size, regions)
            .with_batch_policy(config.batch_policy))
    }
}

impl<B: PlotBackend> DataProvider<B> {
    pub fn with_backend(
        backend: B,
        cache_size: usize,
        regions: impl RegionActivity + 'static,
    ) -> Self {
        debug!(cache_size, "plot data provider registered");
        Self {
            backend,
            cache: PlotCache::new(cache_size),
            regions: Box::new(regions),
            batch_policy: BatchPolicy::default(),
        }
    }

    pub fn with_batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.batch_policy = policy;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Direct backend access. Writes made through it bypass the cache.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drops every cached plot. Results are unaffected.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The plot at a position; an empty plot when nothing is stored there.
    pub fn get_plot(&mut self, region: &str, x: i32, z: i32) -> Result<Plot, StoreError> {
        self.load(&PlotKey::new(region, x, z))
    }

    /// Persists `plot` and returns it as the store will read it back: with its
    /// assigned id and normalized helper/denied lists.
    ///
    /// The cache is only touched once the backend accepted the write.
    pub fn save_plot(&mut self, plot: &Plot) -> Result<Plot, StoreError> {
        let id = self.backend.save_record(plot)?;
        let mut saved = plot.clone();
        saved.id = Some(id);
        saved.helpers = normalize_names(&plot.helpers);
        saved.denied = normalize_names(&plot.denied);
        self.cache.put(saved.clone());
        Ok(saved)
    }

    /// Removes a plot's row; the position then reads as an empty plot.
    pub fn delete_plot(&mut self, plot: &Plot) -> Result<(), StoreError> {
        self.backend.delete_record(plot)?;
        self.cache.put(Plot::new(plot.region.clone(), plot.x, plot.z));
        Ok(())
    }

    /// Plots owned by `owner` in active regions, ordered by region name.
    pub fn plots_by_owner(
        &self,
        owner: &str,
        region: Option<&str>,
    ) -> Result<Vec<Plot>, StoreError> {
        self.backend.plots_by_owner(owner, region, self.regions.as_ref())
    }

    /// Merges each satellite into `base`. Satellites from another region are
    /// rejected per item according to the batch policy.
    pub fn merge_plots(
        &mut self,
        base: &Plot,
        satellites: &[Plot],
    ) -> Result<BatchOutcome, StoreError> {
        let keys: Vec<PlotKey> = satellites.iter().map(Plot::key).collect();
        self.backend.merge_plots(&base.key(), &keys, self.batch_policy)
    }

    pub fn unmerge_plots(&mut self, satellites: &[Plot]) -> Result<BatchOutcome, StoreError> {
        let keys: Vec<PlotKey> = satellites.iter().map(Plot::key).collect();
        self.backend.unmerge_plots(&keys, self.batch_policy)
    }

    /// The plot `plot` is merged into, or `plot` itself.
    ///
    /// A failed edge lookup is logged and answered with `plot` itself.
    pub fn merged_base(&mut self, plot: &Plot) -> Result<Plot, StoreError> {
        match self.backend.merge_base_key(&plot.key()) {
            Ok(Some(base)) => self.load(&base),
            Ok(None) => Ok(plot.clone()),
            Err(err) => {
                warn!(
                    plot = %plot.key(),
                    error = %err,
                    "merge base lookup failed; using plot as its own base"
                );
                Ok(plot.clone())
            }
        }
    }

    /// Plots merged into `base`.
    ///
    /// A failed edge lookup is logged and answered with no satellites, leaving
    /// `base` as a standalone plot.
    pub fn merged_satellites(&mut self, base: &Plot) -> Result<Vec<Plot>, StoreError> {
        let keys = match self.backend.merged_satellite_keys(&base.key()) {
            Ok(keys) => keys,
            Err(err) => {
                warn!(
                    plot = %base.key(),
                    error = %err,
                    "merged satellite lookup failed; treating plot as unmerged"
                );
                return Ok(Vec::new());
            }
        };
        keys.iter().map(|key| self.load(key)).collect()
    }

    /// Next unclaimed position of `region` in spiral order.
    ///
    /// `limit > 0` restricts the search to rings `0..limit`; `0` is unbounded.
    /// The returned empty plot is cached so an immediate claim sees it.
    pub fn next_free_plot(
        &mut self,
        region: &str,
        limit: u32,
    ) -> Result<Option<Plot>, StoreError> {
        let backend = &self.backend;
        let found = spiral::next_free(limit, |radius| backend.occupied_on_ring(region, radius))?;
        let Some((x, z)) = found else {
            debug!(region, limit, "no free plot within limit");
            return Ok(None);
        };
        let plot = Plot::new(region, x, z);
        self.cache.put(plot.clone());
        Ok(Some(plot))
    }

    /// Releases the backend. Cached plots are discarded.
    pub fn close(self) -> Result<(), StoreError> {
        debug!(stats = ?self.cache.stats(), "closing plot data provider");
        self.backend.close()
    }

    fn load(&mut self, key: &PlotKey) -> Result<Plot, StoreError> {
        if let Some(plot) = self.cache.get(key) {
            return Ok(plot);
        }
        let plot = self.backend.plot_record(key)?;
        self.cache.put(plot.clone());
        Ok(plot)
    }
}
