//! Window event handlers.
//!
//! This is where the window-lifecycle edges live: the bar hides itself on
//! focus loss, dismissing the welcome guide drops the dock presence, and an
//! unexpected bar teardown is treated as a lost render surface.

use tauri::{Manager, Window, WindowEvent};

use crate::commands;

/// Handle window events for the application.
///
/// This is called from the Tauri builder's `on_window_event` hook.
pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    match event {
        // The bar is dismissed by clicking elsewhere, not closed.
        WindowEvent::Focused(false) => {
            if window.label() == commands::window::BAR_LABEL {
                let _ = window.hide();
            }
        },

        // Dismissing the first-run guide sends the app fully background.
        WindowEvent::CloseRequested { .. } => {
            if window.label() == commands::window::WELCOME_LABEL {
                #[cfg(target_os = "macos")]
                {
                    if let Err(e) = window
                        .app_handle()
                        .set_activation_policy(tauri::ActivationPolicy::Accessory)
                    {
                        log::warn!("Failed to hide dock presence: {}", e);
                    }
                }
            }
        },

        WindowEvent::Destroyed => {
            if window.label() == commands::window::BAR_LABEL {
                commands::window::handle_bar_destroyed(window.app_handle());
            }
        },

        _ => {},
    }
}
