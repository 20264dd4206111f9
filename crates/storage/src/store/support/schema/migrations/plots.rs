#![forbid(unsafe_code)]

use super::super::super::super::StoreError;
use super::util::{AddedColumn, ensure_columns};
use rusqlite::Connection;

/// Columns missing from files written by older releases.
const PLOT_COLUMNS_ADDED: &[AddedColumn] = &[AddedColumn {
    table: "plots",
    column: "pvp",
    decl: "INTEGER",
}];

pub(super) fn apply(conn: &Connection) -> Result<usize, StoreError> {
    ensure_columns(conn, PLOT_COLUMNS_ADDED)
}
