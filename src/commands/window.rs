//! Window lifecycle for the four window roles.
//!
//! Each role is a single Tauri webview window addressed by label; the window
//! registry is the source of truth for liveness, so "create while live"
//! naturally reuses the existing handle. Windows destroy themselves on close
//! and the registry forgets them - nothing here caches a handle.

use std::sync::atomic::{AtomicBool, Ordering};

use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use super::bar_position;

/// Translation bar window label
pub(crate) const BAR_LABEL: &str = "translation-bar";

/// About window label
pub(crate) const ABOUT_LABEL: &str = "about";

/// Preferences window label
pub(crate) const PREFERENCES_LABEL: &str = "preferences";

/// Welcome guide window label
pub(crate) const WELCOME_LABEL: &str = "welcome";

/// Set once the quit path begins, so tearing the bar down during shutdown is
/// not mistaken for a lost render surface.
static SHUTTING_DOWN: AtomicBool = AtomicBool::new(false);

pub(crate) fn mark_shutting_down() {
    SHUTTING_DOWN.store(true, Ordering::SeqCst);
}

/// Vertical bar offset, computed once at startup from the primary display
/// and managed as app state.
pub struct BarLayout {
    pub y: i32,
}

// ============================================================================
// Translation bar
// ============================================================================

/// Show the translation bar, creating it on first use, and reposition it on
/// the display nearest the cursor. Safe to call while already visible.
pub fn show_translation_bar(app: &AppHandle) -> Result<(), String> {
    let window = match app.get_webview_window(BAR_LABEL) {
        Some(window) => window,
        None => match create_translation_bar(app) {
            Ok(window) => window,
            Err(e) => {
                fatal_bar_failure(app, &e);
                return Err(e);
            },
        },
    };

    let (x, y) = bar_target_position(app, &window)?;
    set_physical_position(&window, x, y)?;

    window
        .show()
        .map_err(|e| format!("Failed to show translation bar: {}", e))?;
    window
        .set_focus()
        .map_err(|e| format!("Failed to focus translation bar: {}", e))?;

    Ok(())
}

fn create_translation_bar(app: &AppHandle) -> Result<WebviewWindow, String> {
    WebviewWindowBuilder::new(app, BAR_LABEL, WebviewUrl::App("index.html".into()))
        .title("Transbar")
        .inner_size(bar_position::BAR_WIDTH as f64, bar_position::BAR_HEIGHT as f64)
        .decorations(false)
        .resizable(false)
        .maximizable(false)
        .minimizable(false)
        .transparent(true)
        .always_on_top(true)
        .visible_on_all_workspaces(true)
        .skip_taskbar(true)
        .visible(false)
        .build()
        .map_err(|e| format!("Failed to create translation bar window: {}", e))
}

/// Cursor display + startup offset -> physical bar position. Queried fresh
/// on every show, never cached.
fn bar_target_position(app: &AppHandle, window: &WebviewWindow) -> Result<(i32, i32), String> {
    let cursor = app
        .cursor_position()
        .map_err(|e| format!("Failed to read cursor position: {}", e))?;

    let monitor = app
        .monitor_from_point(cursor.x, cursor.y)
        .map_err(|e| format!("Failed to resolve display at cursor: {}", e))?
        .or_else(|| app.primary_monitor().ok().flatten())
        .ok_or_else(|| "no display available".to_string())?;

    let width = window
        .outer_size()
        .map_err(|e| format!("Failed to read window size: {}", e))?
        .width;

    let x = bar_position::horizontal_center(monitor.position().x, monitor.size().width, width);
    let y = app.state::<BarLayout>().y;

    Ok((x, y))
}

/// Hide the translation bar without destroying it (no-op when absent).
/// Unsaved input persists across hide/show cycles.
#[tauri::command]
pub fn hide_bar(app: AppHandle) -> Result<(), String> {
    if let Some(window) = app.get_webview_window(BAR_LABEL) {
        window
            .hide()
            .map_err(|e| format!("Failed to hide translation bar: {}", e))?;
    }
    Ok(())
}

/// Resize the translation bar to the height its content measured.
/// Frontend sends CSS pixels, so this resizes in logical units; the width
/// stays fixed. Acknowledged synchronously with `true`.
#[tauri::command]
pub fn set_bar_height(app: AppHandle, height: u32) -> Result<bool, String> {
    let window = app
        .get_webview_window(BAR_LABEL)
        .ok_or_else(|| "translation bar is not open".to_string())?;

    window
        .set_size(tauri::Size::Logical(tauri::LogicalSize {
            width: bar_position::BAR_WIDTH as f64,
            height: height as f64,
        }))
        .map_err(|e| format!("Failed to set size: {}", e))?;

    Ok(true)
}

/// Forward a transparency toggle to the bar's content surface.
#[tauri::command]
pub fn set_transparency(app: AppHandle, enabled: bool) -> Result<(), String> {
    if let Some(window) = app.get_webview_window(BAR_LABEL) {
        window
            .emit("set-transparency", enabled)
            .map_err(|e| format!("Failed to notify translation bar: {}", e))?;
    }
    Ok(())
}

// ============================================================================
// Panels (about / preferences / welcome)
// ============================================================================
// Single-shot panels: created on first request, a repeat request while live
// is a no-op. They close themselves; the label registry forgets them.

pub fn show_about_window(app: &AppHandle) -> Result<(), String> {
    if app.get_webview_window(ABOUT_LABEL).is_some() {
        return Ok(());
    }

    // The surface reads the running version through `get_preferences`.
    WebviewWindowBuilder::new(app, ABOUT_LABEL, WebviewUrl::App("about.html".into()))
        .title("About Transbar")
        .inner_size(520.0, 250.0)
        .resizable(false)
        .maximizable(false)
        .minimizable(false)
        .build()
        .map_err(|e| format!("Failed to create about window: {}", e))?;

    Ok(())
}

pub fn show_preferences_window(app: &AppHandle) -> Result<(), String> {
    if app.get_webview_window(PREFERENCES_LABEL).is_some() {
        return Ok(());
    }

    WebviewWindowBuilder::new(app, PREFERENCES_LABEL, WebviewUrl::App("preferences.html".into()))
        .title("Preferences")
        .inner_size(420.0, 430.0)
        .resizable(false)
        .maximizable(false)
        .minimizable(false)
        .build()
        .map_err(|e| format!("Failed to create preferences window: {}", e))?;

    Ok(())
}

pub fn show_welcome_window(app: &AppHandle) -> Result<(), String> {
    if app.get_webview_window(WELCOME_LABEL).is_some() {
        return Ok(());
    }

    WebviewWindowBuilder::new(app, WELCOME_LABEL, WebviewUrl::App("welcome.html".into()))
        .title("Welcome to Transbar")
        .inner_size(520.0, 430.0)
        .resizable(false)
        .maximizable(false)
        .minimizable(false)
        .build()
        .map_err(|e| format!("Failed to create welcome window: {}", e))?;

    Ok(())
}

// ============================================================================
// Failure handling
// ============================================================================

/// Losing the bar's render surface is fatal: notify, then quit.
fn fatal_bar_failure(app: &AppHandle, detail: &str) {
    log::error!("translation bar surface lost: {}", detail);
    mark_shutting_down();

    let handle = app.clone();
    app.dialog()
        .message(format!(
            "Transbar cannot display the translation bar and will quit.\n\n{}",
            detail
        ))
        .kind(MessageDialogKind::Error)
        .title("Transbar")
        .show(move |_| handle.exit(1));
}

/// Called when the bar window is destroyed. Outside shutdown that means the
/// surface is gone for good.
pub(crate) fn handle_bar_destroyed(app: &AppHandle) {
    if SHUTTING_DOWN.load(Ordering::SeqCst) {
        return;
    }
    fatal_bar_failure(app, "the window was destroyed unexpectedly");
}

// ============================================================================
// Physical coordinate helpers
// ============================================================================
// Monitor queries return physical (pixel) coordinates; position the bar with
// the same unit so centering holds on scaled displays.

fn set_physical_position(window: &WebviewWindow, x: i32, y: i32) -> Result<(), String> {
    window
        .set_position(tauri::Position::Physical(tauri::PhysicalPosition { x, y }))
        .map_err(|e| format!("Failed to set position: {}", e))
}
