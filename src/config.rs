use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default `EnvFilter` directive when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable that overrides the configured log level
pub const LOG_ENV_VAR: &str = "MAGIC_SEMVAR_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. "debug" or "magic_semvar=trace"
    pub level: String,
    /// Write logs to `log_path()` instead of stderr
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

impl Config {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective log filter.
    ///
    /// Precedence: command line, then `MAGIC_SEMVAR_LOG`, then the config file.
    pub fn log_filter(&self, cli_level: Option<&str>) -> String {
        log_filter_with_env(
            &self.log.level,
            std::env::var(LOG_ENV_VAR).ok().as_deref(),
            cli_level,
        )
    }
}

fn log_filter_with_env(
    configured: &str,
    env_level: Option<&str>,
    cli_level: Option<&str>,
) -> String {
    cli_level
        .or(env_level)
        .filter(|level| !level.is_empty())
        .unwrap_or(configured)
        .to_string()
}

/// Returns the path to the data directory for magic-semvar.
/// Uses $XDG_DATA_HOME/magic-semvar if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/magic-semvar,
/// or ./magic-semvar if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("magic-semvar.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("magic-semvar")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_empty_object_uses_defaults() {
        let result = serde_json::from_value::<Config>(json!({})).unwrap();

        assert_eq!(result, Config::default());
        assert_eq!(result.log.level, DEFAULT_LOG_LEVEL);
        assert!(!result.log.file);
    }

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "log": { "file": true }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                log: LogConfig {
                    level: "warn".to_string(),
                    file: true,
                }
            }
        );
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "log": {{ "level": "debug" }} }}"#).unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn load_reports_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = Config::load(&dir.path().join("missing.json")).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[rstest]
    #[case("warn", None, None, "warn")]
    #[case("warn", Some("info"), None, "info")]
    #[case("warn", Some("info"), Some("trace"), "trace")]
    #[case("warn", None, Some("debug"), "debug")]
    #[case("warn", Some(""), None, "warn")]
    fn log_filter_with_env_prefers_cli_then_env(
        #[case] configured: &str,
        #[case] env_level: Option<&str>,
        #[case] cli_level: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(
            log_filter_with_env(configured, env_level, cli_level),
            expected
        );
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/magic-semvar"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/magic-semvar"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./magic-semvar"));
    }
}
