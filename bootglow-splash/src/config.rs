//! Configuration loading
//!
//! The embedded splash.toml is always available. An override file replaces
//! it; a missing or malformed override is logged and ignored.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bootglow_core::config::SplashConfig;
use log::{debug, info, warn};

/// Embedded default configuration (compiled into the binary)
/// Edit splash.toml and rebuild to customize
pub const EMBEDDED_CONFIG: &str = include_str!("../splash.toml");

/// Environment variable naming an override file
pub const CONFIG_ENV: &str = "BOOTGLOW_CONFIG";

/// Parse a configuration document
pub fn parse_config(text: &str) -> Result<SplashConfig> {
    toml::from_str(text).context("invalid splash configuration")
}

/// Load the override file at `path`
pub fn load_file(path: &Path) -> Result<SplashConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// The embedded configuration, or the built-in defaults if it is unusable
pub fn embedded() -> SplashConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("embedded configuration rejected ({:#}), using defaults", e);
            SplashConfig::default()
        }
    }
}

/// Resolve the configuration for this run
///
/// `explicit` (from `--config`) wins over `env_path` (from
/// [`CONFIG_ENV`]); without either the embedded file is used.
pub fn load(explicit: Option<&Path>, env_path: Option<PathBuf>) -> SplashConfig {
    let path = match explicit.map(Path::to_path_buf).or(env_path) {
        Some(path) => path,
        None => {
            debug!("using embedded configuration");
            return embedded();
        }
    };

    match load_file(&path) {
        Ok(config) => {
            info!("configuration loaded from {}", path.display());
            config
        }
        Err(e) => {
            warn!("{:#}, using embedded configuration", e);
            embedded()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_matches_defaults() {
        assert_eq!(parse_config(EMBEDDED_CONFIG).unwrap(), SplashConfig::default());
    }

    #[test]
    fn test_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gesture]\ntrigger_threshold = 8\nfeedback_threshold = 2").unwrap();

        let config = load(Some(file.path()), None);
        assert_eq!(config.gesture.trigger_threshold, 8);
        assert_eq!(config.gesture.feedback_threshold, 2);
        assert_eq!(config.colors, SplashConfig::default().colors);
    }

    #[test]
    fn test_explicit_path_wins_over_env() {
        let mut explicit = tempfile::NamedTempFile::new().unwrap();
        writeln!(explicit, "[progress]\nbar_width = 300").unwrap();
        let mut env = tempfile::NamedTempFile::new().unwrap();
        writeln!(env, "[progress]\nbar_width = 200").unwrap();

        let config = load(Some(explicit.path()), Some(env.path().to_path_buf()));
        assert_eq!(config.progress.bar_width, 300);

        let config = load(None, Some(env.path().to_path_buf()));
        assert_eq!(config.progress.bar_width, 200);
    }

    #[test]
    fn test_malformed_override_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gesture\ntrigger_threshold = ").unwrap();
        assert_eq!(load(Some(file.path()), None), SplashConfig::default());
    }

    #[test]
    fn test_missing_override_falls_back() {
        let config = load(Some(Path::new("/nonexistent/splash.toml")), None);
        assert_eq!(config, SplashConfig::default());
    }
}
