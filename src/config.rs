use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "contacts.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContactbookConfig {
    pub database: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub allowed_origin: Option<String>,
}

/// Fully resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub database: PathBuf,
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
}

impl ContactbookConfig {
    /// Config populated with every built-in default, as written by `init`.
    pub fn with_defaults() -> Self {
        Self {
            database: Some(DEFAULT_DATABASE.to_string()),
            host: Some(DEFAULT_HOST.to_string()),
            port: Some(DEFAULT_PORT),
            allowed_origin: Some(DEFAULT_ALLOWED_ORIGIN.to_string()),
        }
    }

    /// Layer `overrides` (usually CLI flags) on top of this config, then fill
    /// whatever is still unset from the defaults.
    pub fn resolve(&self, overrides: &ContactbookConfig) -> ServerSettings {
        let database = overrides
            .database
            .clone()
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        ServerSettings {
            database: PathBuf::from(database),
            host: overrides
                .host
                .clone()
                .or_else(|| self.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(self.port).unwrap_or(DEFAULT_PORT),
            allowed_origin: overrides
                .allowed_origin
                .clone()
                .or_else(|| self.allowed_origin.clone())
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("contactbook.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ContactbookConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ContactbookConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &ContactbookConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let settings = ContactbookConfig::default().resolve(&ContactbookConfig::default());
        assert_eq!(settings.database, PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
    }

    #[test]
    fn test_resolve_precedence() {
        let file = ContactbookConfig {
            database: Some("file.db".into()),
            port: Some(6000),
            ..Default::default()
        };
        let flags = ContactbookConfig {
            port: Some(7000),
            ..Default::default()
        };

        let settings = file.resolve(&flags);
        assert_eq!(settings.database, PathBuf::from("file.db"));
        assert_eq!(settings.port, 7000);
        assert_eq!(settings.host, DEFAULT_HOST);
    }

    #[test]
    fn test_write_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contactbook.toml");

        assert!(load_config(Some(&path)).unwrap().is_none());

        let config = ContactbookConfig::with_defaults();
        write_config(&path, &config, false).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(config.clone()));

        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &config, true).unwrap();
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contactbook.toml");
        std::fs::write(&path, "port = 8080\n").unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.database, None);
    }
}
