use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub site: SiteConfig,

    pub verification: VerificationConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/bizdir.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    pub port: u16,

    /// Whether to set the Secure flag on session cookies.
    /// Set to false for local development without HTTPS.
    pub secure_cookies: bool,

    /// Sessions (and the flash values they carry) expire after this much inactivity.
    pub session_inactivity_minutes: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            secure_cookies: true,
            session_inactivity_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,

    pub tagline: String,

    /// Absolute origin used for canonical links, without a trailing slash.
    pub base_url: String,

    pub contact_email: String,

    /// Appended to asset URLs as `?v=` for cache busting.
    pub asset_version: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Business Directory".to_string(),
            tagline: "Find trusted local businesses".to_string(),
            base_url: "http://localhost:8080".to_string(),
            contact_email: "support@example.com".to_string(),
            asset_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl SiteConfig {
    /// Joins `path` onto the configured origin.
    #[must_use]
    pub fn canonical(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Minimum delay between two verification email resends.
    pub resend_cooldown_seconds: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    pub loki_enabled: bool,

    pub loki_url: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
            loki_enabled: false,
            loki_url: "http://localhost:3100".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            verification: VerificationConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("bizdir").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".bizdir").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be > 0");
        }

        if self.server.session_inactivity_minutes <= 0 {
            anyhow::bail!("Session inactivity timeout must be > 0 minutes");
        }

        if self.site.name.trim().is_empty() {
            anyhow::bail!("Site name cannot be empty");
        }

        url::Url::parse(&self.site.base_url)
            .with_context(|| format!("Invalid site base_url: '{}'", self.site.base_url))?;

        if self.verification.resend_cooldown_seconds < 0 {
            anyhow::bail!("Resend cooldown cannot be negative");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.verification.resend_cooldown_seconds, 60);
        assert!(config.observability.metrics_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[site]"));
        assert!(toml_str.contains("[verification]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [site]
            name = "Springfield Businesses"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.site.name, "Springfield Businesses");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.site.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.site.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_canonical_joins_paths() {
        let mut site = SiteConfig::default();
        site.base_url = "https://example.org/".to_string();
        assert_eq!(site.canonical("/news"), "https://example.org/news");
        assert_eq!(site.canonical("news"), "https://example.org/news");
    }
}
