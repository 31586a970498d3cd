//! Global shortcut registrar.
//!
//! At most one accelerator is bound process-wide at any time: every change
//! goes unregister-all-then-register, so "change" and "delete" stay
//! symmetric. A failed registration leaves zero bound shortcuts - logged and
//! emitted as an event, never fatal (a missing hotkey is cosmetic).

use std::sync::Mutex;

use tauri::{AppHandle, Emitter, Manager};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

use crate::app::tray::TrayState;
use crate::error::{TransbarError, TransbarResult};
use crate::settings::Preferences;

use super::window;

#[cfg(target_os = "macos")]
pub const DEFAULT_ACCELERATOR: &str = "Ctrl+T";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_ACCELERATOR: &str = "Ctrl+Alt+T";

/// Emitted with the offending accelerator when a binding attempt fails, for
/// surfaces that want to observe registration problems.
pub const REGISTRATION_FAILED_EVENT: &str = "shortcut-registration-failed";

/// Bind `accelerator` to showing the translation bar, replacing whatever was
/// bound before. Parses first so a bad accelerator cannot unbind the current
/// one.
pub fn register(app: &AppHandle, accelerator: &str) -> TransbarResult<()> {
    let shortcut: Shortcut = accelerator
        .parse()
        .map_err(|e| TransbarError::Shortcut(format!("invalid accelerator {:?}: {}", accelerator, e)))?;

    let shortcuts = app.global_shortcut();
    shortcuts
        .unregister_all()
        .map_err(|e| TransbarError::Shortcut(format!("failed to unregister: {}", e)))?;

    shortcuts
        .on_shortcut(shortcut, |app, _shortcut, event| {
            if let ShortcutState::Pressed = event.state() {
                if let Err(e) = window::show_translation_bar(app) {
                    log::error!("Failed to show translation bar from hotkey: {}", e);
                }
            }
        })
        .map_err(|e| TransbarError::Shortcut(format!("failed to bind {:?}: {}", accelerator, e)))?;

    Ok(())
}

/// [`register`], with failures logged and emitted instead of returned.
pub fn register_or_report(app: &AppHandle, accelerator: &str) {
    if let Err(e) = register(app, accelerator) {
        log::warn!("shortcut registration failed: {}", e);
        let _ = app.emit(REGISTRATION_FAILED_EVENT, accelerator);
    }
}

/// Rebind the global shortcut and persist the new accelerator.
#[tauri::command]
pub fn change_shortcut(app: AppHandle, accelerator: String) -> Result<(), String> {
    if accelerator.trim().is_empty() {
        return Err("accelerator must not be empty".to_string());
    }

    // Reject unparseable input before touching the existing binding.
    accelerator
        .parse::<Shortcut>()
        .map_err(|e| format!("invalid accelerator {:?}: {}", accelerator, e))?;

    register_or_report(&app, &accelerator);

    let prefs = Preferences::load(&app).map_err(|e| e.to_string())?;
    prefs.set_shortcut(&accelerator);

    refresh_tray_label(&app, &accelerator);
    Ok(())
}

/// Unbind the global shortcut and persist the empty accelerator.
#[tauri::command]
pub fn delete_shortcut(app: AppHandle) -> Result<(), String> {
    app.global_shortcut()
        .unregister_all()
        .map_err(|e| format!("Failed to unregister shortcuts: {}", e))?;

    let prefs = Preferences::load(&app).map_err(|e| e.to_string())?;
    prefs.set_shortcut("");

    refresh_tray_label(&app, "");
    Ok(())
}

fn refresh_tray_label(app: &AppHandle, accelerator: &str) {
    let Some(state) = app.try_state::<Mutex<TrayState>>() else {
        return;
    };
    match state.lock() {
        Ok(tray) => {
            if let Err(e) = tray.update_shortcut_label(accelerator) {
                log::warn!("Failed to update tray label: {}", e);
            }
        },
        Err(_) => log::warn!("tray state lock poisoned, label not updated"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accelerator_parses() {
        assert!(DEFAULT_ACCELERATOR.parse::<Shortcut>().is_ok());
    }

    #[test]
    fn test_common_accelerators_parse() {
        for accel in ["Ctrl+Alt+T", "Ctrl+T", "Shift+Alt+Space"] {
            assert!(accel.parse::<Shortcut>().is_ok(), "{} should parse", accel);
        }
    }

    #[test]
    fn test_garbage_accelerator_rejected() {
        assert!("".parse::<Shortcut>().is_err());
        assert!("Ctrl+Nope".parse::<Shortcut>().is_err());
    }
}
