#![forbid(unsafe_code)]

mod migrations;
mod sql;

use super::super::StoreError;
use rusqlite::Connection;

/// Creates missing tables, applies additive column migrations, then indexes.
///
/// Safe to run against a fresh file, an up-to-date file, or a file written by
/// an older schema.
pub(in crate::store) fn migrate_sqlite_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(&sql::table_schema_sql())?;

    migrations::apply(conn)?;

    conn.execute_batch(sql::INDEXES)?;

    Ok(())
}
