//! Settings persistence: one serialized `UserSettings` record in one storage slot.
//!
//! Reads fail open to the defaults. Writes replace the whole record, last write wins.

#[cfg(test)]
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::{SettingsPatch, UserSettings};

/// Storage slot holding the serialized settings record.
pub const SETTINGS_KEY: &str = "emailSettings";

/// A string-keyed store of string values.
pub trait SlotStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Keeps each slot as `<dir>/<key>.json`.
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        // Write then rename so a crash never leaves a half-written record.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }
}

/// Process-local storage for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl SlotStorage for MemorySlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the settings record.
#[derive(Clone)]
pub struct SettingsStore {
    storage: Arc<dyn SlotStorage>,
}

impl SettingsStore {
    pub fn new(storage: Arc<dyn SlotStorage>) -> Self {
        Self { storage }
    }

    /// Returns the stored settings merged over the defaults.
    ///
    /// Never fails: unreadable or corrupt storage yields the defaults.
    pub fn get(&self) -> UserSettings {
        let raw = match self.storage.read(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored settings, using defaults");
                return UserSettings::default();
            }
            Err(e) => {
                warn!("Error reading settings, using defaults: {e:#}");
                return UserSettings::default();
            }
        };

        match merge_over_defaults(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Error parsing settings, using defaults: {e:#}");
                UserSettings::default()
            }
        }
    }

    /// Merges `patch` onto the current record, persists it and returns it.
    ///
    /// An `openaiApiKey` equal to the masked form of the stored key is what a
    /// client read back from us, so the stored key is kept.
    pub fn save(&self, mut patch: SettingsPatch) -> Result<UserSettings, AppError> {
        let mut settings = self.get();
        if patch.openai_api_key.is_some() && patch.openai_api_key == settings.masked_api_key() {
            debug!("Ignoring masked API key in settings update");
            patch.openai_api_key = None;
        }
        settings.apply(patch);
        self.put(&settings)?;
        Ok(settings)
    }

    /// Appends a LinkedIn template. Blank input is rejected.
    pub fn add_linkedin_template(&self, template: &str) -> Result<UserSettings, AppError> {
        let template = template.trim();
        if template.is_empty() {
            return Err(AppError::Validation(
                "template cannot be empty".to_string(),
            ));
        }

        let mut settings = self.get();
        settings.linkedin_templates.push(template.to_string());
        self.put(&settings)?;
        Ok(settings)
    }

    /// Removes the LinkedIn template at `index`.
    pub fn remove_linkedin_template(&self, index: usize) -> Result<UserSettings, AppError> {
        let mut settings = self.get();
        if index >= settings.linkedin_templates.len() {
            return Err(AppError::NotFound(format!(
                "LinkedIn template {index} not found"
            )));
        }
        settings.linkedin_templates.remove(index);
        self.put(&settings)?;
        Ok(settings)
    }

    fn put(&self, settings: &UserSettings) -> Result<(), AppError> {
        let serialized =
            serde_json::to_string(settings).context("Failed to serialize settings")?;
        self.storage.write(SETTINGS_KEY, &serialized)?;
        info!("Settings saved");
        Ok(())
    }
}

/// Overlays the stored object's keys onto the serialized defaults.
/// `null` values count as missing.
fn merge_over_defaults(raw: &str) -> Result<UserSettings> {
    let stored: Value = serde_json::from_str(raw).context("stored settings are not JSON")?;
    let Value::Object(stored) = stored else {
        anyhow::bail!("stored settings are not a JSON object");
    };

    let mut merged: Map<String, Value> = match serde_json::to_value(UserSettings::default())? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, value) in stored {
        if !value.is_null() {
            merged.insert(key, value);
        }
    }

    serde_json::from_value(Value::Object(merged)).context("stored settings have invalid fields")
}
