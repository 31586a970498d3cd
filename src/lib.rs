pub mod app;
pub mod commands;
pub mod error;
pub mod settings;

#[cfg(desktop)]
use tauri_plugin_autostart::MacosLauncher;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let mut builder = tauri::Builder::default();

    #[cfg(desktop)]
    {
        builder = builder
            .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // A second launch is a request to bring up the bar.
                if let Err(e) = commands::window::show_translation_bar(app) {
                    log::error!("Failed to show translation bar: {}", e);
                }
            }))
            .plugin(tauri_plugin_global_shortcut::Builder::new().build())
            .plugin(tauri_plugin_autostart::init(MacosLauncher::LaunchAgent, None));
    }

    builder
        .plugin(tauri_plugin_store::Builder::default().build())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_process::init())
        .plugin(tauri_plugin_updater::Builder::new().build())
        .on_window_event(app::events::handle_window_event)
        .invoke_handler(tauri::generate_handler![
            // Translation bar
            commands::window::set_bar_height,
            commands::window::hide_bar,
            commands::window::set_transparency,
            // Shortcut
            commands::shortcut::change_shortcut,
            commands::shortcut::delete_shortcut,
            // Preferences
            commands::settings::set_start_login,
            commands::settings::get_preferences,
            commands::settings::set_auto_update_check,
            commands::settings::set_show_welcome,
            // Updates
            commands::update::check_for_updates,
        ])
        .setup(|app| {
            app::startup::init(app)?;
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
