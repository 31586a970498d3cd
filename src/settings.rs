//! Persisted preferences.
//!
//! All durable state lives in `settings.json` under five keys, read and
//! written through `tauri-plugin-store`. Components receive a [`Preferences`]
//! handle per call site instead of reaching for a process-wide global.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use tauri::AppHandle;
use tauri_plugin_store::{Store, StoreExt};
use ts_rs::TS;

use crate::error::TransbarResult;

/// Store file name, relative to the app config directory.
pub const STORE_FILE: &str = "settings.json";

const KEY_VERSION: &str = "version";
const KEY_SHORTCUT: &str = "shortcut";
const KEY_SHOW_WELCOME: &str = "show-welcome";
const KEY_AUTO_UPDATE: &str = "check-automatically-updates";
const KEY_START_LOGIN: &str = "start-login";

/// Typed accessors over the settings store.
pub struct Preferences {
    store: Arc<Store<tauri::Wry>>,
}

impl Preferences {
    pub fn load(app: &AppHandle) -> TransbarResult<Self> {
        let store = app.store(STORE_FILE)?;
        Ok(Self { store })
    }

    /// Last version this installation ran as. Absent on first run.
    pub fn version(&self) -> Option<String> {
        string_pref(self.store.get(KEY_VERSION))
    }

    pub fn set_version(&self, version: &str) {
        self.store.set(KEY_VERSION, json!(version));
    }

    /// Bound accelerator. Absent until first run; empty once deleted.
    pub fn shortcut(&self) -> Option<String> {
        string_pref(self.store.get(KEY_SHORTCUT))
    }

    pub fn set_shortcut(&self, accelerator: &str) {
        self.store.set(KEY_SHORTCUT, json!(accelerator));
    }

    pub fn show_welcome(&self) -> bool {
        bool_pref(self.store.get(KEY_SHOW_WELCOME), true)
    }

    pub fn set_show_welcome(&self, show: bool) {
        self.store.set(KEY_SHOW_WELCOME, json!(show));
    }

    pub fn auto_update_check(&self) -> bool {
        bool_pref(self.store.get(KEY_AUTO_UPDATE), true)
    }

    pub fn set_auto_update_check(&self, enabled: bool) {
        self.store.set(KEY_AUTO_UPDATE, json!(enabled));
    }

    pub fn start_login(&self) -> bool {
        bool_pref(self.store.get(KEY_START_LOGIN), false)
    }

    pub fn set_start_login(&self, enabled: bool) {
        self.store.set(KEY_START_LOGIN, json!(enabled));
    }

    /// Snapshot served to the preferences surface.
    pub fn snapshot(&self) -> PreferencesDto {
        PreferencesDto {
            version: self.version(),
            shortcut: self.shortcut(),
            show_welcome: self.show_welcome(),
            check_automatically_updates: self.auto_update_check(),
            start_login: self.start_login(),
        }
    }
}

/// Preferences as seen by the webview surfaces.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PreferencesDto {
    pub version: Option<String>,
    pub shortcut: Option<String>,
    pub show_welcome: bool,
    pub check_automatically_updates: bool,
    pub start_login: bool,
}

/// A stored version that differs from the running one (first run included)
/// re-arms the welcome guide.
pub fn version_changed(stored: Option<&str>, running: &str) -> bool {
    stored != Some(running)
}

fn string_pref(value: Option<JsonValue>) -> Option<String> {
    value.and_then(|v| v.as_str().map(str::to_owned))
}

fn bool_pref(value: Option<JsonValue>, default: bool) -> bool {
    value.and_then(|v| v.as_bool()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_counts_as_version_change() {
        assert!(version_changed(None, "0.6.2"));
    }

    #[test]
    fn test_upgrade_counts_as_version_change() {
        assert!(version_changed(Some("0.6.1"), "0.6.2"));
    }

    #[test]
    fn test_same_version_is_unchanged() {
        assert!(!version_changed(Some("0.6.2"), "0.6.2"));
    }

    #[test]
    fn test_bool_pref_defaults() {
        assert!(bool_pref(None, true));
        assert!(!bool_pref(None, false));
        assert!(!bool_pref(Some(json!(false)), true));
        // Non-bool junk in the store falls back to the default.
        assert!(bool_pref(Some(json!("yes")), true));
    }

    #[test]
    fn test_string_pref() {
        assert_eq!(string_pref(Some(json!("Ctrl+Alt+T"))), Some("Ctrl+Alt+T".to_string()));
        assert_eq!(string_pref(Some(json!(""))), Some(String::new()));
        assert_eq!(string_pref(None), None);
        assert_eq!(string_pref(Some(json!(3))), None);
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let dto = PreferencesDto {
            version: Some("0.6.2".to_string()),
            shortcut: Some("Ctrl+Alt+T".to_string()),
            show_welcome: false,
            check_automatically_updates: true,
            start_login: false,
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("showWelcome"));
        assert!(json.contains("checkAutomaticallyUpdates"));
        assert!(json.contains("startLogin"));
    }
}
