//! Key-value settings collaborator
//!
//! The session persists the volume here and reads it back once when it is
//! restored.

use crate::error::Result;
use std::collections::HashMap;

/// Key under which the volume level is persisted
pub const SETTING_VOLUME: &str = "audio.volume";

/// Durable string key-value store
pub trait SettingsStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Settings kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_settings_round_trip() {
        let mut settings = MemorySettings::new();
        assert!(settings.get(SETTING_VOLUME).unwrap().is_none());

        settings.set(SETTING_VOLUME, "70").unwrap();
        assert_eq!(settings.get(SETTING_VOLUME).unwrap().as_deref(), Some("70"));

        settings.set(SETTING_VOLUME, "30").unwrap();
        assert_eq!(settings.get(SETTING_VOLUME).unwrap().as_deref(), Some("30"));
    }
}
