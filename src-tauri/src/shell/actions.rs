// Button actions: read the form, call storage, describe the result
use super::form::BouquetForm;
use super::table::format_table;
use crate::db::connection::DatabaseConnection;
use crate::db::models::Bouquet;
use crate::db::operations::DbOperations;
use crate::error::ShellError;

const NO_RESULTS: &str = "No bouquets found.";

/// What a finished action shows the user
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub title: &'static str,
    pub message: String,
    /// Writes clear the form afterwards; reads leave it as typed
    pub clear_fields: bool,
}

impl Outcome {
    fn written(message: &str) -> Self {
        Self {
            title: "Success",
            message: message.to_string(),
            clear_fields: true,
        }
    }

    fn listing(title: &'static str, bouquets: &[Bouquet]) -> Self {
        let message = if bouquets.is_empty() {
            NO_RESULTS.to_string()
        } else {
            format_table(bouquets)
        };

        Self {
            title,
            message,
            clear_fields: false,
        }
    }
}

/// Severity of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A dialog ready to show, built from an action's result
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
    pub clear_fields: bool,
}

impl From<Result<Outcome, ShellError>> for Notice {
    fn from(result: Result<Outcome, ShellError>) -> Self {
        match result {
            Ok(outcome) => Notice {
                kind: NoticeKind::Info,
                title: outcome.title,
                message: outcome.message,
                clear_fields: outcome.clear_fields,
            },
            Err(e) => Notice {
                kind: NoticeKind::Error,
                title: e.title(),
                message: e.to_string(),
                clear_fields: false,
            },
        }
    }
}

pub fn add_bouquet(db: &DatabaseConnection, form: &BouquetForm) -> Result<Outcome, ShellError> {
    let draft = form.draft()?;
    DbOperations::add(db, &draft)?;
    Ok(Outcome::written("Bouquet added successfully."))
}

pub fn view_bouquets(db: &DatabaseConnection) -> Result<Outcome, ShellError> {
    let bouquets = DbOperations::list_all(db)?;
    Ok(Outcome::listing("Bouquets", &bouquets))
}

/// Overwrite the bouquet named by the id field.
///
/// An id that matches nothing still reports success; storage logs the miss.
pub fn update_bouquet(db: &DatabaseConnection, form: &BouquetForm) -> Result<Outcome, ShellError> {
    let id = form.bouquet_id()?;
    let draft = form.draft()?;
    DbOperations::update(db, id, &draft)?;
    Ok(Outcome::written("Bouquet updated successfully."))
}

pub fn delete_bouquet(db: &DatabaseConnection, form: &BouquetForm) -> Result<Outcome, ShellError> {
    let id = form.bouquet_id()?;
    DbOperations::delete(db, id)?;
    Ok(Outcome::written("Bouquet deleted successfully."))
}

/// Search by the name field
pub fn search_bouquets(db: &DatabaseConnection, form: &BouquetForm) -> Result<Outcome, ShellError> {
    let bouquets = DbOperations::search(db, &form.name)?;
    Ok(Outcome::listing("Search Results", &bouquets))
}
