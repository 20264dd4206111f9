#![forbid(unsafe_code)]

use plots_storage::{AllRegions, DataProvider, Plot, ProviderConfig, PvpSetting, SqliteStore};
use rusqlite::Connection;
use tempfile::TempDir;

fn open_provider(cache_size: usize) -> (TempDir, DataProvider) {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = ProviderConfig {
        storage_dir: dir.path().to_path_buf(),
        cache_size,
        ..ProviderConfig::default()
    };
    let provider = DataProvider::open(&config, AllRegions).expect("open provider");
    (dir, provider)
}

fn claimed(region: &str, x: i32, z: i32, owner: &str) -> Plot {
    let mut plot = Plot::new(region, x, z);
    plot.owner = owner.to_string();
    plot
}

#[test]
fn unknown_coordinate_reads_as_empty_plot() {
    for cache_size in [0, 16] {
        let (_dir, mut provider) = open_provider(cache_size);
        let plot = provider.get_plot("world", -4, 9).expect("get plot");
        assert_eq!(plot, Plot::new("world", -4, 9));
        assert!(!plot.is_claimed());
    }
}

#[test]
fn saved_plot_round_trips_every_field() {
    for cache_size in [0, 16] {
        let (_dir, mut provider) = open_provider(cache_size);
        let mut plot = claimed("world", 2, -3, "alice");
        plot.name = "Garden".to_string();
        plot.add_helper("bob");
        plot.add_helper("carol");
        plot.deny("mallory");
        plot.biome = "DESERT".to_string();
        plot.pvp = PvpSetting::Disabled;

        let saved = provider.save_plot(&plot).expect("save plot");
        assert!(saved.id.is_some());
        plot.id = saved.id;

        assert_eq!(provider.get_plot("world", 2, -3).expect("warm read"), plot);
        provider.clear_cache();
        assert_eq!(provider.get_plot("world", 2, -3).expect("cold read"), plot);
    }
}

#[test]
fn empty_helper_lists_stay_empty() {
    let (_dir, mut provider) = open_provider(0);
    provider
        .save_plot(&claimed("world", 0, 0, "alice"))
        .expect("save plot");
    let plot = provider.get_plot("world", 0, 0).expect("get plot");
    assert!(plot.helpers.is_empty());
    assert!(plot.denied.is_empty());
}

#[test]
fn repeated_saves_keep_one_row() {
    let (_dir, mut provider) = open_provider(0);
    let plot = claimed("world", 1, 1, "alice");
    let first = provider.save_plot(&plot).expect("first save");
    let second = provider.save_plot(&plot).expect("second save");
    assert_eq!(first.id, second.id);

    let mut renamed = second.clone();
    renamed.name = "Renamed".to_string();
    let third = provider.save_plot(&renamed).expect("update by id");
    assert_eq!(third.id, first.id);

    let owned = provider.plots_by_owner("alice", None).expect("list");
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].name, "Renamed");
}

#[test]
fn delete_reverts_position_to_empty_plot() {
    for cache_size in [0, 16] {
        let (_dir, mut provider) = open_provider(cache_size);
        let mut plot = claimed("world", 5, 5, "alice");
        plot.name = "Keep".to_string();
        let saved = provider.save_plot(&plot).expect("save plot");

        provider.delete_plot(&saved).expect("delete plot");
        let after = provider.get_plot("world", 5, 5).expect("get plot");
        assert_eq!(after, Plot::new("world", 5, 5));

        provider.clear_cache();
        assert_eq!(
            provider.get_plot("world", 5, 5).expect("cold read"),
            Plot::new("world", 5, 5)
        );
    }
}

#[test]
fn deleting_missing_rows_is_not_an_error() {
    let (_dir, mut provider) = open_provider(4);
    provider
        .delete_plot(&Plot::new("world", 40, 40))
        .expect("delete by position");
    let mut ghost = Plot::new("world", 41, 41);
    ghost.id = Some(9_999);
    provider.delete_plot(&ghost).expect("delete by id");
}

#[test]
fn stale_id_falls_back_to_position() {
    let (_dir, mut provider) = open_provider(0);
    let saved = provider
        .save_plot(&claimed("world", 3, 3, "alice"))
        .expect("save plot");
    provider.delete_plot(&saved).expect("delete plot");

    let resaved = provider.save_plot(&saved).expect("save with stale id");
    assert!(resaved.id.is_some());
    let plot = provider.get_plot("world", 3, 3).expect("get plot");
    assert_eq!(plot.owner, "alice");
    assert_eq!(plot.id, resaved.id);
}

#[test]
fn owner_listing_filters_inactive_regions_and_sorts_by_region() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = ProviderConfig {
        storage_dir: dir.path().to_path_buf(),
        ..ProviderConfig::default()
    };
    let mut provider = DataProvider::open(&config, |region: &str| region != "unloaded")
        .expect("open provider");

    for (region, x) in [("zeta", 0), ("alpha", 1), ("unloaded", 2), ("alpha", 3)] {
        provider
            .save_plot(&claimed(region, x, 0, "alice"))
            .expect("save plot");
    }
    provider
        .save_plot(&claimed("alpha", 9, 9, "bob"))
        .expect("save other owner");

    let owned = provider.plots_by_owner("alice", None).expect("list all");
    let regions: Vec<&str> = owned.iter().map(|plot| plot.region.as_str()).collect();
    assert_eq!(regions, vec!["alpha", "alpha", "zeta"]);
    // Stable within a region.
    assert_eq!(owned[0].x, 1);
    assert_eq!(owned[1].x, 3);

    let in_zeta = provider
        .plots_by_owner("alice", Some("zeta"))
        .expect("list zeta");
    assert_eq!(in_zeta.len(), 1);
    assert_eq!(in_zeta[0].region, "zeta");

    let hidden = provider
        .plots_by_owner("alice", Some("unloaded"))
        .expect("list unloaded");
    assert!(hidden.is_empty());
    assert!(provider.plots_by_owner("nobody", None).expect("list").is_empty());
}

#[test]
fn malformed_stored_attributes_degrade_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = SqliteStore::open(dir.path()).expect("open store");
    let db_path = store.db_path().expect("file backed").to_path_buf();
    store.close().expect("close store");

    let conn = Connection::open(&db_path).expect("open sqlite db");
    conn.execute_batch(
        "INSERT INTO plots(region, X, Z, name, owner, helpers, denied, biome, pvp) \
         VALUES ('world', 7, 7, NULL, 'alice', X'00FF', X'01', NULL, 'maybe');\n\
         INSERT INTO plots(region, X, Z, name, owner, helpers, denied, biome, pvp) \
         VALUES ('world', 8, 8, 'n', 'alice', ',,bob,', '', 'PLAINS', '1');",
    )
    .expect("seed rows");
    drop(conn);

    let store = SqliteStore::open(dir.path()).expect("reopen store");
    let mut provider = DataProvider::with_backend(store, 0, AllRegions);

    let odd = provider.get_plot("world", 7, 7).expect("get plot");
    assert_eq!(odd.owner, "alice");
    assert!(odd.name.is_empty());
    assert!(odd.helpers.is_empty());
    assert!(odd.denied.is_empty());
    assert_eq!(odd.biome, "PLAINS");
    assert_eq!(odd.pvp, PvpSetting::Default);

    let sparse = provider.get_plot("world", 8, 8).expect("get plot");
    assert_eq!(sparse.helpers, vec!["bob".to_string()]);
    assert_eq!(sparse.pvp, PvpSetting::Enabled);
}

#[test]
fn moving_a_saved_plot_writes_the_new_position_only() {
    for cache_size in [0, 16] {
        let (_dir, mut provider) = open_provider(cache_size);
        let original = provider
            .save_plot(&claimed("world", 0, 0, "alice"))
            .expect("save plot");

        let mut moved = original.clone();
        moved.x = 5;
        let moved = provider.save_plot(&moved).expect("save moved plot");
        assert_ne!(moved.id, original.id);

        let warm = provider.get_plot("world", 5, 0).expect("warm read");
        provider.clear_cache();
        let cold = provider.get_plot("world", 5, 0).expect("cold read");
        assert_eq!(warm, cold);
        assert_eq!(cold.owner, "alice");
        assert_eq!(cold.id, moved.id);

        assert_eq!(provider.get_plot("world", 0, 0).expect("get plot"), original);
    }
}
