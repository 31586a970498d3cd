//! Preference commands for the webview surfaces.

use tauri::AppHandle;

use crate::settings::{Preferences, PreferencesDto};

/// Set the OS login item and mirror the flag into the settings store.
#[tauri::command]
pub async fn set_start_login(app: AppHandle, enabled: bool) -> Result<(), String> {
    #[cfg(desktop)]
    {
        use tauri_plugin_autostart::ManagerExt;

        let autostart = app.autolaunch();
        if enabled {
            autostart
                .enable()
                .map_err(|e| format!("Failed to enable login item: {}", e))?;
        } else {
            autostart
                .disable()
                .map_err(|e| format!("Failed to disable login item: {}", e))?;
        }
    }

    let prefs = Preferences::load(&app).map_err(|e| e.to_string())?;
    prefs.set_start_login(enabled);
    Ok(())
}

/// Current preferences snapshot for the preferences window.
#[tauri::command]
pub fn get_preferences(app: AppHandle) -> Result<PreferencesDto, String> {
    let prefs = Preferences::load(&app).map_err(|e| e.to_string())?;
    Ok(prefs.snapshot())
}

/// Persist whether the deferred startup update check runs.
#[tauri::command]
pub fn set_auto_update_check(app: AppHandle, enabled: bool) -> Result<(), String> {
    let prefs = Preferences::load(&app).map_err(|e| e.to_string())?;
    prefs.set_auto_update_check(enabled);
    Ok(())
}

/// Persist whether the welcome guide opens on startup. Lets the welcome
/// surface offer "don't show this again".
#[tauri::command]
pub fn set_show_welcome(app: AppHandle, show: bool) -> Result<(), String> {
    let prefs = Preferences::load(&app).map_err(|e| e.to_string())?;
    prefs.set_show_welcome(show);
    Ok(())
}
