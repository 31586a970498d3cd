// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Panics surface in the log instead of dying silently in a windowed build.
    std::panic::set_hook(Box::new(|info| {
        log::error!("uncaught panic: {}", info);
    }));

    transbar_lib::run()
}
