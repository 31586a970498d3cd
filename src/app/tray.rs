//! System tray setup and event handling.
//!
//! The menu is built once at startup; the one stateful entry - the bar item
//! whose label carries the bound accelerator - is held in [`TrayState`] and
//! refreshed whenever the shortcut changes.

use std::sync::Mutex;

use tauri::{
    image::Image,
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::TrayIconBuilder,
    App, Manager,
};

use crate::commands::{self, window};

/// Holds the menu items whose text changes at runtime.
pub struct TrayState {
    pub show_bar: MenuItem<tauri::Wry>,
}

impl TrayState {
    /// Refresh the bar item's label with the currently bound accelerator.
    pub fn update_shortcut_label(&self, accelerator: &str) -> Result<(), tauri::Error> {
        self.show_bar.set_text(show_bar_label(accelerator))
    }
}

/// Menu label for the bar entry; the accelerator rides along for
/// discoverability and disappears when the shortcut is deleted.
pub(crate) fn show_bar_label(accelerator: &str) -> String {
    if accelerator.is_empty() {
        "Show Translation Bar".to_string()
    } else {
        format!("Show Translation Bar ({})", accelerator)
    }
}

/// Set up the system tray with menu and event handlers.
pub fn setup_system_tray(app: &App, accelerator: &str) -> Result<TrayState, Box<dyn std::error::Error>> {
    let about = MenuItem::with_id(app, "about", "About Transbar", true, None::<&str>)?;
    let check_update = MenuItem::with_id(app, "check_update", "Check for Updates", true, None::<&str>)?;
    let preferences = MenuItem::with_id(app, "preferences", "Preferences...", true, None::<&str>)?;
    let show_bar = MenuItem::with_id(app, "show_bar", show_bar_label(accelerator), true, None::<&str>)?;
    let welcome = MenuItem::with_id(app, "welcome", "Welcome Guide", true, None::<&str>)?;
    let quit = MenuItem::with_id(app, "quit", "Quit Transbar", true, None::<&str>)?;
    let separator = PredefinedMenuItem::separator(app)?;

    let menu = Menu::with_items(
        app,
        &[
            &about,
            &check_update,
            &separator,
            &preferences,
            &separator,
            &show_bar,
            &separator,
            &welcome,
            &separator,
            &quit,
        ],
    )?;

    let tray_icon =
        Image::from_bytes(include_bytes!("../../icons/32x32.png")).expect("Failed to load tray icon");

    let mut builder = TrayIconBuilder::new()
        .icon(tray_icon)
        .menu(&menu)
        .show_menu_on_left_click(true);

    #[cfg(target_os = "macos")]
    {
        builder = builder.icon_as_template(true);
    }

    let _tray = builder
        .on_menu_event(move |app, event| match event.id.as_ref() {
            "about" => {
                if let Err(e) = window::show_about_window(app) {
                    log::error!("Failed to open about window: {}", e);
                }
            },
            "check_update" => {
                let app_handle = app.clone();
                tauri::async_runtime::spawn(async move {
                    commands::update::run_check(app_handle, true).await;
                });
            },
            "preferences" => {
                if let Err(e) = window::show_preferences_window(app) {
                    log::error!("Failed to open preferences window: {}", e);
                }
            },
            "show_bar" => {
                if let Err(e) = window::show_translation_bar(app) {
                    log::error!("Failed to show translation bar: {}", e);
                }
            },
            "welcome" => {
                if let Err(e) = window::show_welcome_window(app) {
                    log::error!("Failed to open welcome window: {}", e);
                }
            },
            "quit" => {
                window::mark_shutting_down();
                {
                    use tauri_plugin_global_shortcut::GlobalShortcutExt;
                    if let Err(e) = app.global_shortcut().unregister_all() {
                        log::warn!("Failed to unregister shortcuts on quit: {}", e);
                    }
                }
                app.exit(0);
            },
            _ => {},
        })
        .build(app)?;

    Ok(TrayState { show_bar })
}

/// Initialize the system tray and register it with the app state.
///
/// This is called from the startup sequencer.
pub fn init(app: &App, accelerator: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tray_state = setup_system_tray(app, accelerator)?;
    app.manage(Mutex::new(tray_state));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_bar_label_with_accelerator() {
        assert_eq!(
            show_bar_label("Ctrl+Alt+T"),
            "Show Translation Bar (Ctrl+Alt+T)"
        );
    }

    #[test]
    fn test_show_bar_label_unbound() {
        assert_eq!(show_bar_label(""), "Show Translation Bar");
    }
}
