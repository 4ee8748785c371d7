mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./renomiq.toml",
        "~/.config/renomiq/config.toml",
        "/etc/renomiq/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if !(config.matcher.min_similarity > 0.0 && config.matcher.min_similarity <= 1.0) {
        anyhow::bail!(
            "matcher.min_similarity must be in (0, 1], got {}",
            config.matcher.min_similarity
        );
    }

    if config.history.capacity == 0 {
        anyhow::bail!("history.capacity must be at least 1");
    }

    if let Err(msg) = renomiq_series::validate_template(&config.series.template) {
        anyhow::bail!("series.template is invalid: {}", msg);
    }

    Ok(())
}

/// Resolve the configured history path, expanding `~`.
pub fn history_path(config: &Config) -> std::path::PathBuf {
    let expanded = shellexpand::tilde(&config.history.path);
    std::path::PathBuf::from(expanded.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.history.capacity, 10);
        assert!((config.matcher.min_similarity - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [matcher]
            min_similarity = 0.8
            "#,
        )
        .unwrap();
        assert!((config.matcher.min_similarity - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.history.capacity, 10);
        assert_eq!(config.series.template, "{series} - S{season}E{episode}");
    }

    #[test]
    fn out_of_range_similarity_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [matcher]
            min_similarity = 1.5
            "#,
        )
        .unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn bad_template_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [series]
            template = "no placeholder"
            "#,
        )
        .unwrap();
        assert!(validate_config(&config).is_err());
    }
}
