use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
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

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `luminarias` table with the modern schema.
fn create_luminarias_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS luminarias (
            id            TEXT PRIMARY KEY,
            lat           REAL NOT NULL,
            lng           REAL NOT NULL,
            status        TEXT NOT NULL DEFAULT 'ok'
                          CHECK(status IN ('ok','reported','confirmed','fixed')),
            problem       TEXT,
            report_date   TEXT,        -- YYYY-MM-DD
            report_time   TEXT,        -- HH:MM:SS
            fix_date      TEXT,
            fix_time      TEXT,
            brigade_notes TEXT,
            photo_path    TEXT,
            downtime      REAL,        -- hours inside the lit window
            created_by    TEXT NOT NULL DEFAULT '',
            updated_by    TEXT NOT NULL DEFAULT '',
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_luminarias_status ON luminarias(status);
        CREATE INDEX IF NOT EXISTS idx_luminarias_report_date ON luminarias(report_date);
        "#,
    )?;
    Ok(())
}

fn create_history_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS history (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            luminaria_id TEXT NOT NULL,
            date         TEXT NOT NULL,
            time         TEXT NOT NULL DEFAULT '',
            action       TEXT NOT NULL,
            details      TEXT NOT NULL DEFAULT '',
            user         TEXT NOT NULL DEFAULT '',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_history_luminaria ON history(luminaria_id);
        "#,
    )?;
    Ok(())
}

fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL UNIQUE,
            role       TEXT NOT NULL DEFAULT 'viewer'
                       CHECK(role IN ('admin','inspector','brigade','viewer')),
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Seed the default admin operator so a fresh install can run gated
/// commands out of the box.
fn seed_default_admin(conn: &Connection) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    if count == 0 {
        conn.execute(
            "INSERT INTO users (name, role, created_at) VALUES ('admin', 'admin', datetime('now'))",
            [],
        )?;
        success("Seeded default 'admin' operator.");
    }
    Ok(())
}

/// Migrate an old `luminarias` table to include the `photo_path` column
/// (added for brigade field photos in 0.3).
fn migrate_add_photo_path(conn: &Connection) -> Result<()> {
    let version = "20250402_0005_add_photo_path";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !column_exists(conn, "luminarias", "photo_path")? {
        warning("Adding 'photo_path' column to luminarias table...");
        conn.execute("ALTER TABLE luminarias ADD COLUMN photo_path TEXT;", [])?;
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added photo_path to luminarias')",
        [version],
    )?;

    Ok(())
}

/// Migrate an old `luminarias` table to include the `downtime` column
/// (added together with the downtime calculator in 0.4).
fn migrate_add_downtime(conn: &Connection) -> Result<()> {
    let version = "20250601_0008_add_downtime_hours";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if !column_exists(conn, "luminarias", "downtime")? {
        warning("Adding 'downtime' column to luminarias table...");
        conn.execute("ALTER TABLE luminarias ADD COLUMN downtime REAL;", [])?;
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added downtime hours to luminarias')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base tables
    if !table_exists(conn, "luminarias")? {
        create_luminarias_table(conn)?;
        success("Created luminarias table (modern schema).");
    }
    if !table_exists(conn, "history")? {
        create_history_table(conn)?;
    }
    if !table_exists(conn, "users")? {
        create_users_table(conn)?;
    }

    // 3) Column-level upgrades for databases created before 0.4
    migrate_add_photo_path(conn)?;
    migrate_add_downtime(conn)?;

    // 4) Indices are cheap to re-assert on every run
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_luminarias_status ON luminarias(status);
        CREATE INDEX IF NOT EXISTS idx_luminarias_report_date ON luminarias(report_date);
        CREATE INDEX IF NOT EXISTS idx_history_luminaria ON history(luminaria_id);
        "#,
    )?;

    // 5) Default operator
    seed_default_admin(conn)?;

    Ok(())
}
