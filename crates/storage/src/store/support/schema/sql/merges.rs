#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        -- Satellite (X2, Z2) merged into base (X1, Z1). A satellite has at most
        -- one base.
        CREATE TABLE IF NOT EXISTS merges (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          region TEXT NOT NULL,
          X1 INTEGER NOT NULL,
          Z1 INTEGER NOT NULL,
          X2 INTEGER NOT NULL,
          Z2 INTEGER NOT NULL,
          UNIQUE (region, X2, Z2)
        );
"#;
