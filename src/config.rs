//! Startup configuration, loaded once from a YAML file and passed to
//! constructors explicitly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub env: String,
    pub description: String,
    pub http_server: HttpServerConfig,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_yaml_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let yaml = concat!(
            "env: dev\n",
            "description: clinic records backend\n",
            "http_server:\n",
            "  host: 127.0.0.1:8080\n",
            "database:\n",
            "  path: clinic.db\n",
        );
        fs::write(&path, yaml).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.env, "dev");
        assert_eq!(config.http_server.host, "127.0.0.1:8080");
        assert_eq!(config.database.path, PathBuf::from("clinic.db"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load(Path::new("/nonexistent/config.yaml")).is_err());
    }
}
