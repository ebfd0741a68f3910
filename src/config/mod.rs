mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(config)
}

/// Parse and validate configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Failed to parse config")?;
    validate_config(&config)?;
    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./formstore.toml", "~/.config/formstore/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    tracing::debug!("No config file found; using defaults");
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.database.path.trim().is_empty() {
        anyhow::bail!("Database path cannot be empty");
    }

    if config.database.pool_size == 0 {
        anyhow::bail!("Database pool size cannot be 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.database.path, "formstore.db");
        assert_eq!(config.database.pool_size, 4);
        assert_eq!(config.database.busy_timeout().as_millis(), 5000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_section() {
        let config = parse_config(
            r#"
            [database]
            path = "/var/lib/formstore/forms.db"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.path, "/var/lib/formstore/forms.db");
        assert_eq!(config.database.pool_size, 4);
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let err = parse_config("[database]\npool_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("pool size"));
    }

    #[test]
    fn test_blank_path_rejected() {
        assert!(parse_config("[database]\npath = \"  \"\n").is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(parse_config("[database\npath = 1").is_err());
    }
}
