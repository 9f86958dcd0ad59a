//! User preference storage for theme and language

use crate::core::error::{ParseValueError, StoreError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

const THEME_KEY: &str = "theme";
const LANGUAGE_KEY: &str = "language";

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ParseValueError::new("theme", other, "light, dark, system")),
        }
    }
}

/// Interface language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(ParseValueError::new("language", other, "en, ru")),
        }
    }
}

/// Key-value backend for persisted preferences
pub trait SettingsStore: Send + Sync {
    /// Get a stored value
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Preference store that lives and dies with the process
#[derive(Clone, Default)]
pub struct InMemorySettings {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for InMemorySettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| StoreError::LockPoisoned {
            access: "read",
            resource: "settings",
        })?;

        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned {
            access: "write",
            resource: "settings",
        })?;

        values.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

/// Preference store backed by a YAML file
///
/// The whole map is read once at load time and rewritten on every set,
/// which is fine for a file holding two keys.
pub struct YamlSettings {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl YamlSettings {
    /// Open the store, reading the file when it exists
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_yaml::from_str(&content)?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }
}

impl SettingsStore for YamlSettings {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| StoreError::LockPoisoned {
            access: "read",
            resource: "settings",
        })?;

        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| StoreError::LockPoisoned {
            access: "write",
            resource: "settings",
        })?;

        values.insert(key.to_string(), value.to_string());

        let yaml = serde_yaml::to_string(&*values)?;
        std::fs::write(&self.path, yaml)?;

        Ok(())
    }
}

/// Typed view over a preference store
///
/// Absent keys yield the defaults (system theme, English). A stored
/// value that no longer parses is logged and treated as absent rather
/// than breaking the settings page.
#[derive(Clone)]
pub struct Settings {
    store: Arc<dyn SettingsStore>,
}

impl Settings {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Settings over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySettings::new()))
    }

    pub fn theme(&self) -> Result<Theme> {
        Ok(match self.store.get(THEME_KEY)? {
            Some(raw) => raw.parse().unwrap_or_else(|err: ParseValueError| {
                tracing::warn!(error = %err, "Stored theme not recognized, using default");
                Theme::default()
            }),
            None => Theme::default(),
        })
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        tracing::debug!(theme = %theme, "Theme preference saved");
        Ok(())
    }

    pub fn language(&self) -> Result<Language> {
        Ok(match self.store.get(LANGUAGE_KEY)? {
            Some(raw) => raw.parse().unwrap_or_else(|err: ParseValueError| {
                tracing::warn!(error = %err, "Stored language not recognized, using default");
                Language::default()
            }),
            None => Language::default(),
        })
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        self.store.set(LANGUAGE_KEY, language.as_str())?;
        tracing::debug!(language = %language, "Language preference saved");
        Ok(())
    }
}
