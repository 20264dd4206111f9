#![forbid(unsafe_code)]

mod indexes;
mod merges;
mod plots;
mod pragmas;

pub(super) use indexes::SQL as INDEXES;

pub(super) fn table_schema_sql() -> String {
    let mut sql = String::new();
    sql.push_str(pragmas::SQL);
    sql.push_str(plots::SQL);
    sql.push_str(merges::SQL);
    sql
}
