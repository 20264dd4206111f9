#![forbid(unsafe_code)]

//! Persistence, lookup and allocation of grid plots.
//!
//! [`DataProvider`] is the entry point: it fronts a [`PlotBackend`] (normally
//! [`SqliteStore`]) with a bounded [`PlotCache`] and runs the spiral search
//! for unclaimed coordinates.

mod backend;
mod cache;
mod config;
mod provider;
mod regions;
mod store;

pub use backend::{BatchOutcome, BatchPolicy, PlotBackend};
pub use cache::{CacheStats, PlotCache};
pub use config::{ConfigError, DEFAULT_CACHE_SIZE, ProviderConfig};
pub use plots_core::{MergeEdge, Plot, PlotKey, PvpSetting};
pub use provider::DataProvider;
pub use regions::{AllRegions, RegionActivity};
pub use store::{DEFAULT_DATABASE_FILE, SqliteStore, StoreError};
