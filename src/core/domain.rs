use serde::{Deserialize, Serialize};
use crate::core::messages::Locale;
use crate::core::repository::RepositoryStore;

// Configuration abstracts config options for the catalog console
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub locale: Locale,
    pub log_level: String,
    pub store: RepositoryStore,
}

impl Configuration {
    pub const LOCALE_VAR: &'static str = "LMS_LOCALE";
    pub const LOG_VAR: &'static str = "LMS_LOG";

    pub fn new() -> Self {
        Configuration {
            locale: Locale::Ru,
            log_level: "warn".to_string(),
            store: RepositoryStore::JsonFile,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Unknown or missing values keep their defaults.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new();
        if let Some(locale) = lookup(Self::LOCALE_VAR).and_then(|v| Locale::parse(v.as_str())) {
            config.locale = locale;
        }
        if let Some(level) = lookup(Self::LOG_VAR) {
            let level = level.trim().to_lowercase();
            if level.parse::<tracing::Level>().is_ok() {
                config.log_level = level;
            }
        }
        config
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::WARN)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
