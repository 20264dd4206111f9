#![forbid(unsafe_code)]

mod plots;
mod util;

use super::super::super::StoreError;
use rusqlite::Connection;
use tracing::debug;

pub(super) fn apply(conn: &Connection) -> Result<(), StoreError> {
    let added = plots::apply(conn)?;
    if added > 0 {
        debug!(added, "migrated plot schema");
    }
    Ok(())
}
