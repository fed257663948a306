//! Preference persistence coordination.
//!
//! Stores the scale form's fields and the retrigger policy in eframe's
//! persistent storage as JSON strings, so the next session starts where the
//! last one ended.

use serde::{Deserialize, Serialize};

use rangekit::{DemoConfig, RetriggerPolicy, ScaleForm};

const FORM_KEY: &str = "scale_form";
const RETRIGGER_KEY: &str = "retrigger_policy";

/// Preferences carried between sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub form: ScaleForm,
    pub retrigger: RetriggerPolicy,
}

impl Preferences {
    /// Preferences for a first run: the demo form and the configured policy.
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            form: ScaleForm::with_target(config.default_out_min, config.default_out_max),
            retrigger: config.retrigger,
        }
    }
}

/// Coordinates preference persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads preferences, falling back to `config` for anything missing or unreadable.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface, `None` when persistence is unavailable
    /// * `config` - Startup config providing the fallbacks
    pub fn load_preferences(storage: Option<&dyn eframe::Storage>, config: &DemoConfig) -> Preferences {
        let fallback = Preferences::from_config(config);
        Preferences {
            form: Self::load_setting_or(storage, FORM_KEY, fallback.form),
            retrigger: Self::load_setting_or(storage, RETRIGGER_KEY, fallback.retrigger),
        }
    }

    /// Saves preferences and flushes the storage.
    pub fn save_preferences(storage: &mut dyn eframe::Storage, preferences: &Preferences) {
        Self::save_setting(storage, FORM_KEY, &preferences.form);
        Self::save_setting(storage, RETRIGGER_KEY, &preferences.retrigger);
        storage.flush();
    }

    /// Loads one JSON-encoded setting, or `default` if missing or invalid.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Loads one JSON-encoded setting, `None` if missing or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring unreadable stored setting");
                None
            }
        }
    }

    /// Saves one setting as a JSON string. Does not flush.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(err) => tracing::warn!(key, %err, "failed to encode setting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
        flushes: usize,
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_first_run_uses_config() {
        let config = DemoConfig {
            default_out_min: -1.0,
            default_out_max: 1.0,
            retrigger: RetriggerPolicy::Replace,
            ..DemoConfig::default()
        };
        let preferences = SettingsCoordinator::load_preferences(None, &config);
        assert_eq!(preferences.form.out_min, "-1");
        assert_eq!(preferences.form.out_max, "1");
        assert_eq!(preferences.retrigger, RetriggerPolicy::Replace);
    }

    #[test]
    fn test_save_and_restore() {
        let mut storage = MockStorage::default();
        let config = DemoConfig::default();

        let mut preferences = Preferences::from_config(&config);
        preferences.form.value = "7.5".to_string();
        preferences.retrigger = RetriggerPolicy::Replace;
        SettingsCoordinator::save_preferences(&mut storage, &preferences);
        assert_eq!(storage.flushes, 1);

        let restored = SettingsCoordinator::load_preferences(Some(&storage), &config);
        assert_eq!(restored, preferences);
    }

    #[test]
    fn test_unreadable_setting_falls_back() {
        let mut storage = MockStorage::default();
        eframe::Storage::set_string(&mut storage, RETRIGGER_KEY, "\"sideways\"".to_string());

        let preferences = SettingsCoordinator::load_preferences(Some(&storage), &DemoConfig::default());
        assert_eq!(preferences.retrigger, RetriggerPolicy::Stack);
    }

    #[test]
    fn test_try_load_setting() {
        let mut storage = MockStorage::default();
        let missing: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(missing, None);

        SettingsCoordinator::save_setting(&mut storage, "answer", &42i32);
        let loaded: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "answer");
        assert_eq!(loaded, Some(42));
    }
}
