#![forbid(unsafe_code)]

use super::super::super::super::StoreError;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::debug;

/// A column introduced after the table first shipped.
pub(super) struct AddedColumn {
    pub table: &'static str,
    pub column: &'static str,
    pub decl: &'static str,
}

/// Adds every listed column the database lacks and returns how many were added.
pub(super) fn ensure_columns(
    conn: &Connection,
    columns: &[AddedColumn],
) -> Result<usize, StoreError> {
    let mut added = 0;
    for column in columns {
        if !has_column(conn, column.table, column.column)? && add_column(conn, column)? {
            debug!(table = column.table, column = column.column, "added missing column");
            added += 1;
        }
    }
    Ok(added)
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool, StoreError> {
    let found = conn
        .prepare_cached("SELECT 1 FROM pragma_table_info(?1) WHERE name=?2")?
        .query_row(params![table, column], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// `false` when another connection added the column first.
fn add_column(conn: &Connection, column: &AddedColumn) -> Result<bool, StoreError> {
    let AddedColumn { table, column, decl } = column;
    match conn.execute(&format!("ALTER TABLE {table} ADD COLUMN {column} {decl}"), []) {
        Ok(_) => Ok(true),
        Err(rusqlite::Error::SqliteFailure(_, Some(message)))
            if message.contains("duplicate column name") =>
        {
            Ok(false)
        }
        Err(err) => Err(StoreError::Sql(err)),
    }
}
