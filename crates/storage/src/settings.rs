use forma_app::{Settings, SettingsRepository};
use forma_domain::{ReadError, WriteError};
use log::warn;

use crate::KeyValueStore;

const KEY_SETTINGS: &str = "settings";

/// User settings persisted as a single JSON value. A missing or unreadable
/// entry yields the defaults.
pub struct UserSettings<S> {
    store: S,
}

impl<S: KeyValueStore> UserSettings<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> SettingsRepository for UserSettings<S> {
    async fn read_settings(&self) -> Result<Settings, ReadError> {
        match self.store.get(KEY_SETTINGS).await? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(settings) => Ok(settings),
                Err(err) => {
                    warn!("falling back to default settings: {err}");
                    Ok(Settings::default())
                }
            },
            None => Ok(Settings::default()),
        }
    }

    async fn write_settings(&self, settings: &Settings) -> Result<(), WriteError> {
        let json =
            serde_json::to_string(settings).map_err(|err| WriteError::Other(Box::new(err)))?;
        Ok(self.store.set(KEY_SETTINGS, json).await?)
    }
}
