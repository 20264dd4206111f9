#![forbid(unsafe_code)]

pub(in crate::store::support::schema) const SQL: &str = r#"
        CREATE INDEX IF NOT EXISTS idx_plots_position ON plots(region, X, Z);
        CREATE INDEX IF NOT EXISTS idx_plots_owner ON plots(owner, region);
        CREATE INDEX IF NOT EXISTS idx_merges_base ON merges(region, X1, Z1);
"#;
