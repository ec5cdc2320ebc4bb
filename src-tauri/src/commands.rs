// Tauri command handlers
use serde::Serialize;
use tauri::{AppHandle, Manager, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::error::ShellError;
use crate::shell::{actions, BouquetForm, Notice, NoticeKind, Outcome};
use crate::state::AppState;

/// Label of the form window in tauri.conf.json
const MAIN_WINDOW: &str = "main";

/// Reply to the webview once the dialog is up
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReply {
    pub clear_fields: bool,
}

/// Show the action's result (or failure) in a dialog owned by the form window
fn present(app: &AppHandle, action: &str, result: Result<Outcome, ShellError>) -> ActionReply {
    if let Err(e) = &result {
        tracing::error!(action, error = %e, "bouquet action failed");
    }

    let notice = Notice::from(result);
    let kind = match notice.kind {
        NoticeKind::Info => MessageDialogKind::Info,
        NoticeKind::Error => MessageDialogKind::Error,
    };

    let mut dialog = app
        .dialog()
        .message(notice.message)
        .title(notice.title)
        .kind(kind);
    match app.get_webview_window(MAIN_WINDOW) {
        Some(window) => dialog = dialog.parent(&window),
        None => tracing::warn!(action, "main window missing, dialog has no owner"),
    }
    dialog.show(|_| {});

    ActionReply {
        clear_fields: notice.clear_fields,
    }
}

#[tauri::command]
pub fn add_bouquet(form: BouquetForm, state: State<'_, AppState>, app: AppHandle) -> ActionReply {
    present(&app, "add", actions::add_bouquet(&state.db, &form))
}

#[tauri::command]
pub fn view_bouquets(state: State<'_, AppState>, app: AppHandle) -> ActionReply {
    present(&app, "view", actions::view_bouquets(&state.db))
}

#[tauri::command]
pub fn update_bouquet(form: BouquetForm, state: State<'_, AppState>, app: AppHandle) -> ActionReply {
    present(&app, "update", actions::update_bouquet(&state.db, &form))
}

#[tauri::command]
pub fn delete_bouquet(form: BouquetForm, state: State<'_, AppState>, app: AppHandle) -> ActionReply {
    present(&app, "delete", actions::delete_bouquet(&state.db, &form))
}

#[tauri::command]
pub fn search_bouquets(form: BouquetForm, state: State<'_, AppState>, app: AppHandle) -> ActionReply {
    present(&app, "search", actions::search_bouquets(&state.db, &form))
}
