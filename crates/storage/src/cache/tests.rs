use super::*;

fn claimed(region: &str, x: i32, z: i32, owner: &str) -> Plot {
    let mut plot = Plot::new(region, x, z);
    plot.owner = owner.to_string();
    plot
}

#[test]
fn zero_capacity_bypasses_everything() {
    let mut cache = PlotCache::new(0);
    cache.put(Plot::new("r", 0, 0));
    assert!(cache.is_empty());
    assert_eq!(cache.get(&PlotKey::new("r", 0, 0)), None);
    assert_eq!(cache.stats(), CacheStats::default());
}

#[test]
fn put_overwrites_existing_position() {
    let mut cache = PlotCache::new(4);
    cache.put(Plot::new("r", 1, 2));
    cache.put(claimed("r", 1, 2, "alice"));
    assert_eq!(cache.len(), 1);
    let plot = cache.get(&PlotKey::new("r", 1, 2)).expect("cached");
    assert_eq!(plot.owner, "alice");
}

#[test]
fn least_recently_used_entry_is_evicted() {
    let mut cache = PlotCache::new(2);
    cache.put(Plot::new("r", 0, 0));
    cache.put(Plot::new("r", 0, 1));
    // Touch (0,0) so (0,1) becomes the eviction candidate.
    assert!(cache.get(&PlotKey::new("r", 0, 0)).is_some());
    cache.put(Plot::new("r", 1, 0));

    assert_eq!(cache.len(), 2);
    assert!(cache.contains(&PlotKey::new("r", 0, 0)));
    assert!(!cache.contains(&PlotKey::new("r", 0, 1)));
    assert!(cache.contains(&PlotKey::new("r", 1, 0)));
    assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn capacity_one_keeps_only_latest() {
    let mut cache = PlotCache::new(1);
    cache.put(Plot::new("r", 0, 0));
    cache.put(Plot::new("r", 5, 5));
    assert_eq!(cache.get(&PlotKey::new("r", 0, 0)), None);
    assert!(cache.get(&PlotKey::new("r", 5, 5)).is_some());
}

#[test]
fn regions_are_distinct_keys() {
    let mut cache = PlotCache::new(4);
    cache.put(claimed("a", 0, 0, "alice"));
    cache.put(claimed("b", 0, 0, "bob"));
    assert_eq!(cache.get(&PlotKey::new("a", 0, 0)).map(|p| p.owner), Some("alice".to_string()));
    assert_eq!(cache.get(&PlotKey::new("b", 0, 0)).map(|p| p.owner), Some("bob".to_string()));
}

#[test]
fn stats_count_hits_and_misses() {
    let mut cache = PlotCache::new(2);
    cache.put(Plot::new("r", 0, 0));
    cache.get(&PlotKey::new("r", 0, 0));
    cache.get(&PlotKey::new("r", 9, 9));
    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[test]
fn invalidate_and_clear_drop_entries() {
    let mut cache = PlotCache::new(4);
    cache.put(Plot::new("r", 0, 0));
    cache.put(Plot::new("r", 0, 1));
    assert!(cache.invalidate(&PlotKey::new("r", 0, 0)).is_some());
    assert!(cache.invalidate(&PlotKey::new("r", 0, 0)).is_none());
    assert_eq!(cache.len(), 1);
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn capacity_reports_configured_bound() {
    assert_eq!(PlotCache::new(0).capacity(), 0);
    assert!(!PlotCache::new(0).is_enabled());
    assert_eq!(PlotCache::new(3).capacity(), 3);
}

#[test]
fn overwriting_an_entry_is_not_an_eviction() {
    let mut cache = PlotCache::new(1);
    cache.put(Plot::new("r", 0, 0));
    cache.put(claimed("r", 0, 0, "alice"));
    assert_eq!(cache.stats().evictions, 0);
    cache.put(Plot::new("r", 1, 1));
    assert_eq!(cache.stats().evictions, 1);
}
