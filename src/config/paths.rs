use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "tagvars";

#[derive(Debug, Clone)]
pub struct AppPaths {
    profiles_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        Ok(Self::under(config_root))
    }

    pub fn under(root: impl Into<PathBuf>) -> Self {
        let profiles_dir = root.into().join(APP_DIR).join("profiles");

        Self { profiles_dir }
    }

    pub fn settings_file(&self, profile: &str) -> PathBuf {
        self.profiles_dir.join(format!("{profile}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_live_under_profiles_dir() {
        let paths = AppPaths::under("/tmp/cfg");
        assert_eq!(
            paths.settings_file("staging"),
            PathBuf::from("/tmp/cfg/tagvars/profiles/staging.json")
        );
    }
}
