// Application state management
use crate::db::connection::DatabaseConnection;

/// Everything the button handlers share, owned by the window runtime
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
