use rusqlite::{Connection, OptionalExtension, Result};

/// Current schema version, stored in `PRAGMA user_version`.
const SCHEMA_VERSION: i32 = 1;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Key-value table holding the serialized roster.
fn ensure_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn schema_version(conn: &Connection) -> Result<i32> {
    let v: Option<i32> = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .optional()?;
    Ok(v.unwrap_or(0))
}

pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    if schema_version(conn)? >= SCHEMA_VERSION {
        return Ok(());
    }

    ensure_log_table(conn)?;
    ensure_kv_table(conn)?;

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
}
