// Database migrations
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    // Create bouquets table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS bouquets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            flower_type TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            price REAL NOT NULL
        )",
        [],
    )?;

    Ok(())
}
