//! Launch configuration resolved once from the environment.

use gymdesk_core::default_log_level;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DB_PATH_VAR: &str = "GYMDESK_DB_PATH";
pub const BIND_VAR: &str = "GYMDESK_BIND";
pub const LOG_DIR_VAR: &str = "GYMDESK_LOG_DIR";
pub const LOG_LEVEL_VAR: &str = "GYMDESK_LOG_LEVEL";

const DEFAULT_DB_PATH: &str = "gym_management.db";
const DEFAULT_BIND: &str = "127.0.0.1:8501";
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: `{value}`")]
    InvalidBind { var: &'static str, value: String },
    #[error("{var} cannot be empty")]
    Empty { var: &'static str },
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub db_path: PathBuf,
    pub bind: SocketAddr,
    /// Always absolute.
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl WebConfig {
    /// Reads `GYMDESK_*` variables, falling back to defaults for unset ones.
    pub fn from_env(cwd: &Path) -> Result<Self, ConfigError> {
        Self::from_lookup(cwd, |key| std::env::var(key).ok())
    }

    /// Same as [`WebConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(
        cwd: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let db_path = non_empty(DB_PATH_VAR, lookup(DB_PATH_VAR))?
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let bind_text =
            non_empty(BIND_VAR, lookup(BIND_VAR))?.unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_text
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind {
                var: BIND_VAR,
                value: bind_text.clone(),
            })?;

        let log_dir = match non_empty(LOG_DIR_VAR, lookup(LOG_DIR_VAR))? {
            Some(dir) => absolute(cwd, Path::new(&dir)),
            None => cwd.join(DEFAULT_LOG_DIR),
        };

        let log_level = non_empty(LOG_LEVEL_VAR, lookup(LOG_LEVEL_VAR))?
            .unwrap_or_else(|| default_log_level().to_string());

        Ok(Self {
            db_path: PathBuf::from(db_path),
            bind,
            log_dir,
            log_level,
        })
    }
}

fn non_empty(var: &'static str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    match value {
        Some(text) if text.trim().is_empty() => Err(ConfigError::Empty { var }),
        Some(text) => Ok(Some(text.trim().to_string())),
        None => Ok(None),
    }
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, WebConfig, BIND_VAR, LOG_DIR_VAR};
    use std::collections::HashMap;
    use std::path::Path;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = WebConfig::from_lookup(Path::new("/srv/gym"), lookup(&[])).unwrap();

        assert_eq!(config.db_path, Path::new("gym_management.db"));
        assert_eq!(config.bind.to_string(), "127.0.0.1:8501");
        assert_eq!(config.log_dir, Path::new("/srv/gym/logs"));
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn relative_log_dir_is_resolved_against_cwd() {
        let config =
            WebConfig::from_lookup(Path::new("/srv/gym"), lookup(&[(LOG_DIR_VAR, "var/log")]))
                .unwrap();
        assert_eq!(config.log_dir, Path::new("/srv/gym/var/log"));
    }

    #[test]
    fn invalid_bind_is_rejected() {
        let err = WebConfig::from_lookup(Path::new("/srv"), lookup(&[(BIND_VAR, "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind { .. }));

        let err =
            WebConfig::from_lookup(Path::new("/srv"), lookup(&[(BIND_VAR, " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }
}
