use rusqlite::{Connection, OptionalExtension, Result};

const CREATE_NOTES: &str = "20260110_0001_create_notes";
const NOTES_UPDATED_INDEX: &str = "20260112_0002_notes_updated_at_index";

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

/// Check whether a migration was already recorded in the `log` table.
fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `notes` table: one JSON payload per year.
fn migrate_create_notes(conn: &Connection) -> Result<()> {
    if is_applied(conn, CREATE_NOTES)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            year        INTEGER PRIMARY KEY,
            payload     TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, CREATE_NOTES, "Created notes table")?;
    log::info!("Migration applied: {} → notes table", CREATE_NOTES);
    Ok(())
}

fn migrate_notes_updated_index(conn: &Connection) -> Result<()> {
    if is_applied(conn, NOTES_UPDATED_INDEX)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_notes_updated_at ON notes(updated_at);",
    )?;

    mark_applied(conn, NOTES_UPDATED_INDEX, "Indexed notes by update time")?;
    log::info!(
        "Migration applied: {} → notes(updated_at) index",
        NOTES_UPDATED_INDEX
    );
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db(). Safe to run on every start.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_notes(conn)?;
    migrate_notes_updated_index(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        assert_eq!(applied_count(&conn), 2);
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='notes'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 1);
    }
}
