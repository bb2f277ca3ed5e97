use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::resolver::{Environment, LocalZone, StaticSession};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub environment: Option<Environment>,
    #[serde(default)]
    pub version_name: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub logged_in: Option<bool>,
    #[serde(default)]
    pub anonymize_ip: Option<bool>,
}

impl Settings {
    pub fn environment(&self, requested: Option<Environment>) -> Environment {
        requested
            .or(self.environment)
            .unwrap_or_else(Environment::from_build)
    }

    pub fn version_name(&self) -> String {
        self.version_name
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale
            .as_deref()
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
    }

    pub fn time_zone(&self) -> AppResult<Option<LocalZone>> {
        let Some(name) = self.time_zone.as_deref() else {
            return Ok(None);
        };

        LocalZone::parse(name).map(Some).map_err(AppError::Config)
    }

    pub fn session(&self) -> StaticSession {
        StaticSession::new(self.logged_in, self.anonymize_ip)
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(&path)?;
    let settings = serde_json::from_str(&raw).map_err(|err| {
        AppError::Config(format!("invalid settings file {}: {err}", path.display()))
    })?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_environment_beats_profile() {
        let settings = Settings {
            environment: Some(Environment::Production),
            ..Settings::default()
        };
        assert_eq!(settings.environment(None), Environment::Production);
        assert_eq!(
            settings.environment(Some(Environment::Test)),
            Environment::Test
        );
    }

    #[test]
    fn version_defaults_to_crate_version() {
        assert_eq!(Settings::default().version_name(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn blank_locale_is_ignored() {
        let settings = Settings {
            locale: Some("  ".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.locale(), None);
    }

    #[test]
    fn invalid_time_zone_is_a_config_error() {
        let settings = Settings {
            time_zone: Some("Nowhere/Special".to_string()),
            ..Settings::default()
        };
        assert!(matches!(settings.time_zone(), Err(AppError::Config(_))));
    }
}
