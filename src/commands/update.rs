//! Update checks.
//!
//! Interactive checks (tray, preferences) report results and errors through
//! dialogs; the deferred startup check stays silent unless an update is
//! actually available. Network I/O runs on the async runtime and never
//! blocks window handling.

use std::time::Duration;

use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};
use tauri_plugin_updater::UpdaterExt;

/// Delay before the automatic post-startup check.
const STARTUP_CHECK_DELAY: Duration = Duration::from_secs(3 * 60);

/// User-initiated check from the tray or the preferences window.
#[tauri::command]
pub async fn check_for_updates(app: AppHandle) -> Result<(), String> {
    run_check(app, true).await;
    Ok(())
}

/// Schedule the one-shot background check. No cancel path; the timer simply
/// fires once.
pub fn schedule_startup_check(app: &AppHandle) {
    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(STARTUP_CHECK_DELAY).await;
        run_check(app, false).await;
    });
}

pub async fn run_check(app: AppHandle, interactive: bool) {
    let updater = match app.updater() {
        Ok(updater) => updater,
        Err(e) => {
            report_error(&app, interactive, &e.to_string());
            return;
        },
    };

    match updater.check().await {
        Ok(Some(update)) => prompt_install(app, update),
        Ok(None) => {
            log::info!("no update available");
            if interactive {
                app.dialog()
                    .message("Transbar is up to date.")
                    .title("Transbar")
                    .show(|_| {});
            }
        },
        Err(e) => report_error(&app, interactive, &e.to_string()),
    }
}

fn report_error(app: &AppHandle, interactive: bool, detail: &str) {
    log::warn!("update check failed: {}", detail);
    if interactive {
        app.dialog()
            .message(format!("Could not check for updates.\n\n{}", detail))
            .kind(MessageDialogKind::Error)
            .title("Transbar")
            .show(|_| {});
    }
}

fn prompt_install(app: AppHandle, update: tauri_plugin_updater::Update) {
    let message = format!(
        "Transbar {} is available. Install it and restart?",
        update.version
    );
    let handle = app.clone();
    app.dialog()
        .message(message)
        .title("Transbar")
        .buttons(MessageDialogButtons::OkCancelCustom(
            "Install".to_string(),
            "Later".to_string(),
        ))
        .show(move |install| {
            if !install {
                return;
            }
            tauri::async_runtime::spawn(async move {
                match update.download_and_install(|_, _| {}, || {}).await {
                    Ok(()) => handle.restart(),
                    Err(e) => report_error(&handle, true, &e.to_string()),
                }
            });
        });
}
