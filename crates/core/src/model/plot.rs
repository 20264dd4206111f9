#![forbid(unsafe_code)]

use super::is_storable_name;

pub const DEFAULT_BIOME: &str = "PLAINS";

/// Matches every player when present in a helper or denied list.
pub const EVERYONE: &str = "*";

/// Logical position of a plot: a region name plus grid coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlotKey {
    pub region: String,
    pub x: i32,
    pub z: i32,
}

impl PlotKey {
    pub fn new(region: impl Into<String>, x: i32, z: i32) -> Self {
        Self {
            region: region.into(),
            x,
            z,
        }
    }

    /// Chebyshev distance from the region origin.
    pub fn ring(&self) -> u32 {
        self.x.unsigned_abs().max(self.z.unsigned_abs())
    }
}

impl std::fmt::Display for PlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{};{}", self.region, self.x, self.z)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PvpSetting {
    /// Defer to the region's configured default.
    #[default]
    Default,
    Enabled,
    Disabled,
}

impl PvpSetting {
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => Self::Default,
            Some(true) => Self::Enabled,
            Some(false) => Self::Disabled,
        }
    }

    pub fn as_flag(self) -> Option<bool> {
        match self {
            Self::Default => None,
            Self::Enabled => Some(true),
            Self::Disabled => Some(false),
        }
    }

    pub fn resolve(self, region_default: bool) -> bool {
        self.as_flag().unwrap_or(region_default)
    }
}

/// A single claimable cell of a region's plot grid.
///
/// A plot with no stored row is still a valid value: it is unclaimed, has no
/// `id`, and carries default attributes. Absence is data, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plot {
    pub id: Option<i64>,
    pub region: String,
    pub x: i32,
    pub z: i32,
    pub name: String,
    pub owner: String,
    pub helpers: Vec<String>,
    pub denied: Vec<String>,
    pub biome: String,
    pub pvp: PvpSetting,
}

impl Plot {
    /// The empty, unclaimed plot at a coordinate.
    pub fn new(region: impl Into<String>, x: i32, z: i32) -> Self {
        Self {
            id: None,
            region: region.into(),
            x,
            z,
            name: String::new(),
            owner: String::new(),
            helpers: Vec::new(),
            denied: Vec::new(),
            biome: DEFAULT_BIOME.to_string(),
            pvp: PvpSetting::Default,
        }
    }

    pub fn empty_at(key: &PlotKey) -> Self {
        Self::new(key.region.clone(), key.x, key.z)
    }

    pub fn key(&self) -> PlotKey {
        PlotKey::new(self.region.clone(), self.x, self.z)
    }

    pub fn is_claimed(&self) -> bool {
        !self.owner.is_empty()
    }

    pub fn is_helper(&self, player: &str) -> bool {
        contains_player(&self.helpers, player)
    }

    /// Returns `false` when the player was already listed.
    pub fn add_helper(&mut self, player: &str) -> bool {
        insert_unique(&mut self.helpers, player)
    }

    /// Returns `false` when the player was not listed.
    pub fn remove_helper(&mut self, player: &str) -> bool {
        remove_exact(&mut self.helpers, player)
    }

    pub fn is_denied(&self, player: &str) -> bool {
        contains_player(&self.denied, player)
    }

    pub fn deny(&mut self, player: &str) -> bool {
        insert_unique(&mut self.denied, player)
    }

    pub fn undeny(&mut self, player: &str) -> bool {
        remove_exact(&mut self.denied, player)
    }
}

impl std::fmt::Display for Plot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{}", self.x, self.z)
    }
}

fn contains_player(list: &[String], player: &str) -> bool {
    list.iter().any(|entry| entry == player || entry == EVERYONE)
}

fn insert_unique(list: &mut Vec<String>, player: &str) -> bool {
    if !is_storable_name(player) || list.iter().any(|entry| entry == player) {
        return false;
    }
    list.push(player.to_string());
    true
}

fn remove_exact(list: &mut Vec<String>, player: &str) -> bool {
    let before = list.len();
    list.retain(|entry| entry != player);
    list.len() != before
}
