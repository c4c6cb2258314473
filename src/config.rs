use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_INTEGRATION_PATH: &str = "integration.json";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Resolved service configuration. Precedence: CLI flags / environment
/// variables, then `config.toml` in the working directory, then defaults.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Bind address (default 127.0.0.1; use 0.0.0.0 to accept webhooks
    /// from the platform directly).
    pub bind_address: String,
    /// Log level passed to the tracing env filter.
    pub log_level: String,
    /// Log output format: "pretty" or "json".
    pub log_format: String,
    /// Optional log file path (rotated daily).
    pub log_file: Option<PathBuf>,
    /// Path of the static integration document served at /integration.json.
    pub integration_path: PathBuf,
}

/// On-disk shape of `config.toml`. Every field is optional; missing or
/// unparsable files fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlConfig {
    port: Option<u16>,
    bind_address: Option<String>,
    log_level: Option<String>,
    log_format: Option<String>,
    log_file: Option<PathBuf>,
    integration_path: Option<PathBuf>,
}

impl ServiceConfig {
    /// Merge CLI/env overrides with `config.toml` (if present) and the
    /// built-in defaults.
    pub fn resolve(
        port: Option<u16>,
        bind_address: Option<String>,
        log_level: Option<String>,
        log_format: Option<String>,
        log_file: Option<PathBuf>,
        integration_path: Option<PathBuf>,
    ) -> Self {
        let file = load_toml(Path::new("config.toml")).unwrap_or_default();
        Self {
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
            bind_address: bind_address
                .or(file.bind_address)
                .unwrap_or_else(default_bind_address),
            log_level: log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format: log_format
                .or(file.log_format)
                .unwrap_or_else(|| "pretty".to_string()),
            log_file: log_file.or(file.log_file),
            integration_path: integration_path
                .or(file.integration_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INTEGRATION_PATH)),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::resolve(None, None, None, None, None, None)
    }
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_win() {
        let cfg = ServiceConfig::resolve(
            Some(9000),
            Some("0.0.0.0".to_string()),
            Some("debug".to_string()),
            None,
            None,
            Some(PathBuf::from("/tmp/integration.json")),
        );
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.bind_address, "0.0.0.0");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.integration_path, PathBuf::from("/tmp/integration.json"));
    }

    #[test]
    fn defaults_fill_the_gaps() {
        let cfg = ServiceConfig::resolve(None, None, None, None, None, None);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.bind_address, "127.0.0.1");
        assert_eq!(cfg.log_format, "pretty");
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn toml_parse_failure_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = \"not a number").unwrap();
        assert!(load_toml(&path).is_none());
    }

    #[test]
    fn toml_fields_are_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = 4400\n").unwrap();
        let file = load_toml(&path).unwrap();
        assert_eq!(file.port, Some(4400));
        assert!(file.bind_address.is_none());
    }
}
