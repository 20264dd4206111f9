#![forbid(unsafe_code)]

/// Host predicate telling which regions are currently loaded.
///
/// Ownership listings only report plots in active regions.
pub trait RegionActivity {
    fn is_region_active(&self, region: &str) -> bool;
}

impl<F> RegionActivity for F
where
    F: Fn(&str) -> bool,
{
    fn is_region_active(&self, region: &str) -> bool {
        self(region)
    }
}

/// Treats every region as active.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllRegions;

impl RegionActivity for AllRegions {
    fn is_region_active(&self, _region: &str) -> bool {
        true
    }
}
