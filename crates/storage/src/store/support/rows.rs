#![forbid(unsafe_code)]

use plots_core::{DEFAULT_BIOME, MergeEdge, Plot, PvpSetting, split_names};
use rusqlite::Row;
use rusqlite::types::ValueRef;

pub(in crate::store) const PLOT_COLUMNS: &str =
    "id, region, X, Z, name, owner, helpers, denied, biome, pvp";

/// Decodes a row selected with [`PLOT_COLUMNS`].
///
/// Attribute columns are read leniently: unexpected storage classes fall back
/// to empty values instead of failing the whole read.
pub(in crate::store) fn plot_from_row(row: &Row<'_>) -> Result<Plot, rusqlite::Error> {
    Ok(Plot {
        id: Some(row.get(0)?),
        region: row.get(1)?,
        x: row.get(2)?,
        z: row.get(3)?,
        name: lenient_text(row.get_ref(4)?).unwrap_or_default(),
        owner: lenient_text(row.get_ref(5)?).unwrap_or_default(),
        helpers: name_list(row.get_ref(6)?),
        denied: name_list(row.get_ref(7)?),
        biome: lenient_text(row.get_ref(8)?).unwrap_or_else(|| DEFAULT_BIOME.to_string()),
        pvp: pvp_setting(row.get_ref(9)?),
    })
}

pub(in crate::store) const MERGE_COLUMNS: &str = "region, X1, Z1, X2, Z2";

/// Decodes a row selected with [`MERGE_COLUMNS`].
pub(in crate::store) fn merge_edge_from_row(row: &Row<'_>) -> Result<MergeEdge, rusqlite::Error> {
    Ok(MergeEdge {
        region: row.get(0)?,
        base_x: row.get(1)?,
        base_z: row.get(2)?,
        satellite_x: row.get(3)?,
        satellite_z: row.get(4)?,
    })
}

fn lenient_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Text(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Integer(v) => Some(v.to_string()),
        ValueRef::Real(v) => Some(v.to_string()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}

fn name_list(value: ValueRef<'_>) -> Vec<String> {
    match value {
        ValueRef::Text(bytes) => match std::str::from_utf8(bytes) {
            Ok(raw) => split_names(raw),
            Err(_) => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn pvp_setting(value: ValueRef<'_>) -> PvpSetting {
    let flag = match value {
        ValueRef::Integer(v) => Some(v != 0),
        ValueRef::Real(v) => Some(v != 0.0),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|v| v != 0),
        ValueRef::Null | ValueRef::Blob(_) => None,
    };
    PvpSetting::from_flag(flag)
}
