//! Startup sequencing, run once from the Tauri setup hook.
//!
//! Order matters here: the shortcut must be resolved before the tray is
//! built (the tray label carries it), and the welcome decision must be made
//! before the dock presence is dropped.

use tauri::{App, Manager};

use crate::commands::{bar_position, shortcut, update, window};
use crate::settings::{self, Preferences};

use super::tray;

pub fn init(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let handle = app.handle().clone();
    let prefs = Preferences::load(&handle)?;

    // Mirror the OS login-item state into the store (OS -> store, one way).
    #[cfg(desktop)]
    {
        use tauri_plugin_autostart::ManagerExt;

        match app.autolaunch().is_enabled() {
            Ok(enabled) => prefs.set_start_login(enabled),
            Err(e) => log::warn!("Failed to read login item state: {}", e),
        }
    }

    // The bar's vertical offset depends only on the primary display and is
    // chosen once per run.
    let primary_height = handle
        .primary_monitor()?
        .map(|monitor| monitor.size().height)
        .unwrap_or(0);
    app.manage(window::BarLayout {
        y: bar_position::vertical_offset(primary_height),
    });

    // A version change (first run included) re-arms the welcome guide.
    let running_version = app.package_info().version.to_string();
    if settings::version_changed(prefs.version().as_deref(), &running_version) {
        prefs.set_version(&running_version);
        prefs.set_show_welcome(true);
    }

    let accelerator = match prefs.shortcut() {
        Some(accelerator) => accelerator,
        None => {
            prefs.set_shortcut(shortcut::DEFAULT_ACCELERATOR);
            shortcut::DEFAULT_ACCELERATOR.to_string()
        },
    };
    // An empty accelerator means the user deleted the shortcut.
    if !accelerator.is_empty() {
        shortcut::register_or_report(&handle, &accelerator);
    }

    tray::init(app, &accelerator)?;

    if prefs.auto_update_check() {
        update::schedule_startup_check(&handle);
    }

    let show_welcome = prefs.show_welcome();
    if show_welcome {
        if let Err(e) = window::show_welcome_window(&handle) {
            log::error!("Failed to show welcome window: {}", e);
        }
    }

    // Stay tray-only unless the welcome guide needs a regular presence.
    #[cfg(target_os = "macos")]
    {
        if !show_welcome {
            app.set_activation_policy(tauri::ActivationPolicy::Accessory);
        }
    }

    Ok(())
}
