#![forbid(unsafe_code)]

use super::PlotKey;

/// A satellite plot absorbed into a base plot of the same region.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MergeEdge {
    pub region: String,
    pub base_x: i32,
    pub base_z: i32,
    pub satellite_x: i32,
    pub satellite_z: i32,
}

impl MergeEdge {
    pub fn new(base: &PlotKey, satellite_x: i32, satellite_z: i32) -> Self {
        Self {
            region: base.region.clone(),
            base_x: base.x,
            base_z: base.z,
            satellite_x,
            satellite_z,
        }
    }

    pub fn base(&self) -> PlotKey {
        PlotKey::new(self.region.clone(), self.base_x, self.base_z)
    }

    pub fn satellite(&self) -> PlotKey {
        PlotKey::new(self.region.clone(), self.satellite_x, self.satellite_z)
    }
}
