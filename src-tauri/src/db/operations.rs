use rusqlite::{params, Row};
use crate::db::models::{Bouquet, NewBouquet};
use crate::db::connection::DatabaseConnection;
use crate::db::migrations::run_migrations;
use crate::error::StorageError;

const SELECT_BOUQUET: &str = "SELECT id, name, flower_type, quantity, price FROM bouquets";

/// Database operations for the bouquet inventory
pub struct DbOperations;

impl DbOperations {
    /// Create the bouquets table if it is missing
    pub fn ensure_schema(db: &DatabaseConnection) -> Result<(), StorageError> {
        let conn = db.open()?;
        run_migrations(&conn)?;
        Ok(())
    }

    /// Insert a bouquet and return the id storage assigned to it
    pub fn add(
        db: &DatabaseConnection,
        bouquet: &NewBouquet,
    ) -> Result<i64, StorageError> {
        let conn = db.open()?;

        conn.execute(
            "INSERT INTO bouquets (name, flower_type, quantity, price) VALUES (?1, ?2, ?3, ?4)",
            params![bouquet.name, bouquet.flower_type, bouquet.quantity, bouquet.price],
        )?;

        let id = conn.last_insert_rowid();
        tracing::info!(id, name = %bouquet.name, "bouquet added");
        Ok(id)
    }

    /// Get all bouquets in storage order
    pub fn list_all(
        db: &DatabaseConnection,
    ) -> Result<Vec<Bouquet>, StorageError> {
        let conn = db.open()?;

        let mut stmt = conn.prepare(SELECT_BOUQUET)?;
        let bouquets = stmt
            .query_map([], bouquet_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = bouquets.len(), "listed bouquets");
        Ok(bouquets)
    }

    /// Overwrite the bouquet with `id`.
    ///
    /// Returns the number of rows changed; an unknown id changes nothing and
    /// returns 0 rather than failing.
    pub fn update(
        db: &DatabaseConnection,
        id: i64,
        bouquet: &NewBouquet,
    ) -> Result<usize, StorageError> {
        let conn = db.open()?;

        let changed = conn.execute(
            "UPDATE bouquets SET name = ?1, flower_type = ?2, quantity = ?3, price = ?4 WHERE id = ?5",
            params![bouquet.name, bouquet.flower_type, bouquet.quantity, bouquet.price, id],
        )?;

        if changed == 0 {
            tracing::warn!(id, "update matched no bouquet");
        } else {
            tracing::info!(id, name = %bouquet.name, "bouquet updated");
        }
        Ok(changed)
    }

    /// Remove the bouquet with `id`, returning the number of rows removed
    pub fn delete(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<usize, StorageError> {
        let conn = db.open()?;

        let removed = conn.execute("DELETE FROM bouquets WHERE id = ?1", params![id])?;

        if removed == 0 {
            tracing::warn!(id, "delete matched no bouquet");
        } else {
            tracing::info!(id, "bouquet deleted");
        }
        Ok(removed)
    }

    /// Find bouquets whose name contains `needle`.
    ///
    /// Matching is SQLite `LIKE`: ASCII case-insensitive, and `%`/`_` in the
    /// needle keep their wildcard meaning.
    pub fn search(
        db: &DatabaseConnection,
        needle: &str,
    ) -> Result<Vec<Bouquet>, StorageError> {
        let conn = db.open()?;

        let pattern = format!("%{}%", needle);
        let mut stmt = conn.prepare(&format!("{} WHERE name LIKE ?1", SELECT_BOUQUET))?;
        let bouquets = stmt
            .query_map(params![pattern], bouquet_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(needle, count = bouquets.len(), "searched bouquets");
        Ok(bouquets)
    }
}

fn bouquet_from_row(row: &Row<'_>) -> rusqlite::Result<Bouquet> {
    Ok(Bouquet {
        id: row.get(0)?,
        name: row.get(1)?,
        flower_type: row.get(2)?,
        quantity: row.get(3)?,
        price: row.get(4)?,
    })
}
