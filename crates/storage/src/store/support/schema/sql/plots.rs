#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        -- One row per claimed or customised plot. A coordinate without a row is
        -- an unclaimed plot, not a missing one.
        CREATE TABLE IF NOT EXISTS plots (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          region TEXT NOT NULL,
          X INTEGER NOT NULL,
          Z INTEGER NOT NULL,
          name TEXT,
          owner TEXT,
          helpers TEXT,
          denied TEXT,
          biome TEXT,
          pvp INTEGER
        );
"#;
