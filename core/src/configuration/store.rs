use std::collections::HashMap;
use std::env;
use std::env::VarError;
use std::path::{Path, PathBuf};

use tracing::error;

use crate::configuration::{ConfigurationError, OAuthProperty};

/// Externally managed source of configuration values.
///
/// `Ok(None)` means the property is absent; `Err` means the store itself
/// could not be read.
pub trait PropertyStore: Send + Sync {
    fn property(&self, property: OAuthProperty) -> Result<Option<String>, ConfigurationError>;
}

/// In-memory properties keyed by either the property name or its
/// environment variable spelling.
#[derive(Debug, Clone, Default)]
pub struct MapPropertyStore(HashMap<String, String>);

impl MapPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapPropertyStore {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl PropertyStore for MapPropertyStore {
    fn property(&self, property: OAuthProperty) -> Result<Option<String>, ConfigurationError> {
        Ok(self
            .0
            .get(property.name())
            .or_else(|| self.0.get(&property.env_name()))
            .cloned())
    }
}

/// Reads properties from the process environment (`OAUTH_CLIENT_ID`, ...).
#[derive(Debug, Default, Copy, Clone)]
pub struct EnvironmentPropertyStore;

impl PropertyStore for EnvironmentPropertyStore {
    fn property(&self, property: OAuthProperty) -> Result<Option<String>, ConfigurationError> {
        let name = property.env_name();
        match env::var(&name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(err) => Err(ConfigurationError::unreadable(
                format!("environment variable {}", name),
                err,
            )),
        }
    }
}

/// `KEY=value` file parsed with dotenv rules. Re-read on every lookup so
/// edits are picked up without a restart.
#[derive(Debug, Clone)]
pub struct PropertiesFile {
    path: PathBuf,
}

impl PropertiesFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<MapPropertyStore, ConfigurationError> {
        let unreadable = |err: dotenvy::Error| {
            error!("Unable to read {}: {}", self.path.display(), err);
            ConfigurationError::unreadable(self.path.display().to_string(), err)
        };
        dotenvy::from_path_iter(&self.path)
            .map_err(unreadable)?
            .map(|item| item.map_err(unreadable))
            .collect()
    }
}

impl PropertyStore for PropertiesFile {
    fn property(&self, property: OAuthProperty) -> Result<Option<String>, ConfigurationError> {
        self.load()?.property(property)
    }
}
