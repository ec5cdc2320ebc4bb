// Bouquet Shop - Desktop inventory manager
// Module declarations
#[cfg(feature = "desktop")]
mod commands;
pub mod db;
pub mod error;
pub mod settings;
pub mod shell;
pub mod state;

use anyhow::{Context, Result};
use std::path::Path;

use db::connection::DatabaseConnection;
use settings::AppSettings;
use state::AppState;

/// Load settings from `app_dir`, start logging and open the bouquet database
pub fn init_state(app_dir: &Path) -> Result<AppState> {
    let settings = AppSettings::load(app_dir)?;
    settings.logging.init()?;

    let db_path = settings.database_path(app_dir);
    let db = DatabaseConnection::new(db_path.clone())
        .with_context(|| format!("failed to initialize database at {}", db_path.display()))?;

    tracing::info!(db = %db_path.display(), "bouquet shop started");
    Ok(AppState::new(db))
}

#[cfg(feature = "desktop")]
pub fn run() -> Result<()> {
    // The database sits in the working directory
    let app_dir = std::env::current_dir().context("failed to get working directory")?;
    let app_state = init_state(&app_dir)?;

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            commands::add_bouquet,
            commands::view_bouquets,
            commands::update_bouquet,
            commands::delete_bouquet,
            commands::search_bouquets,
        ])
        .run(tauri::generate_context!())
        .context("error while running tauri application")
}
