#![forbid(unsafe_code)]

use super::*;
use rusqlite::params;

impl SqliteStore {
    /// Stored coordinates of `region` whose Chebyshev distance from the origin
    /// is exactly `radius`.
    pub fn occupied_on_ring(
        &self,
        region: &str,
        radius: u32,
    ) -> Result<HashSet<GridPos>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT X, Z FROM plots WHERE region=?1 AND ( \
               (abs(X) = ?2 AND abs(Z) <= ?2) OR \
               (abs(Z) = ?2 AND abs(X) <= ?2) \
             )",
        )?;
        let occupied = stmt
            .query_map(params![region, i64::from(radius)], |row| {
                Ok((row.get::<_, i32>(0)?, row.get::<_, i32>(1)?))
            })?
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(occupied)
    }
}
