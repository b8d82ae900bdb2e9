//! Startup configuration.
//!
//! # Responsibility
//! - Derive the deployment context and the diagnostics threshold once.
//! - Accept environment overrides before the facade is constructed.
//!
//! # Invariants
//! - Configuration is immutable after `AppConfig` is built.
//! - A development context defaults to `debug`; any other context to `warn`.

use crate::diagnostics::Severity;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable naming the serving host.
pub const ENV_HOST: &str = "GASTECH_HOST";
/// Environment variable overriding the diagnostics threshold.
pub const ENV_LOG_LEVEL: &str = "GASTECH_LOG_LEVEL";
/// Environment variable enabling rolling file logs in a directory.
pub const ENV_LOG_DIR: &str = "GASTECH_LOG_DIR";

const DEVELOPMENT_HOSTS: &[&str] = &["localhost", "127.0.0.1", ""];

/// Where the dashboard is being served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentContext {
    Development,
    Production,
}

impl DeploymentContext {
    /// Classifies a host name. Loopback and empty hosts count as development.
    pub fn from_host(host: &str) -> Self {
        if DEVELOPMENT_HOSTS.contains(&host.trim()) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn default_threshold(self) -> Severity {
        match self {
            Self::Development => Severity::Debug,
            Self::Production => Severity::Warn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(reason) => write!(f, "invalid log level: {reason}"),
            Self::RelativeLogDir(path) => write!(
                f,
                "log directory must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Immutable application configuration injected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub deployment: DeploymentContext,
    pub threshold: Severity,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Builds configuration for `host` using the context default threshold.
    pub fn for_host(host: &str) -> Self {
        let deployment = DeploymentContext::from_host(host);
        Self {
            deployment,
            threshold: deployment.default_threshold(),
            log_dir: None,
        }
    }

    /// Builds configuration from explicit values, as read from env or flags.
    ///
    /// # Errors
    /// - `InvalidLogLevel` when `level` is not a facade level.
    /// - `RelativeLogDir` when `log_dir` is not absolute.
    pub fn resolve(
        host: Option<&str>,
        level: Option<&str>,
        log_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::for_host(host.unwrap_or(""));
        if let Some(level) = level {
            config.threshold = level.parse().map_err(ConfigError::InvalidLogLevel)?;
        }
        if let Some(dir) = log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(dir);
        }
        Ok(config)
    }

    /// Reads `GASTECH_HOST`, `GASTECH_LOG_LEVEL` and `GASTECH_LOG_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var(ENV_HOST).ok();
        let level = std::env::var(ENV_LOG_LEVEL).ok();
        let log_dir = std::env::var_os(ENV_LOG_DIR).map(PathBuf::from);
        Self::resolve(host.as_deref(), level.as_deref(), log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DeploymentContext};
    use crate::diagnostics::Severity;
    use std::path::PathBuf;

    #[test]
    fn loopback_and_empty_hosts_are_development() {
        for host in ["localhost", "127.0.0.1", ""] {
            assert_eq!(
                DeploymentContext::from_host(host),
                DeploymentContext::Development
            );
        }
        assert_eq!(
            DeploymentContext::from_host("dashboard.example.org"),
            DeploymentContext::Production
        );
    }

    #[test]
    fn threshold_follows_deployment_context() {
        assert_eq!(AppConfig::for_host("localhost").threshold, Severity::Debug);
        assert_eq!(AppConfig::for_host("example.org").threshold, Severity::Warn);
    }

    #[test]
    fn explicit_level_overrides_context_default() {
        let config = AppConfig::resolve(Some("example.org"), Some("info"), None)
            .expect("info is a valid level");
        assert_eq!(config.deployment, DeploymentContext::Production);
        assert_eq!(config.threshold, Severity::Info);
    }

    #[test]
    fn rejects_unknown_level_and_relative_dir() {
        let err = AppConfig::resolve(None, Some("loud"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));

        let err = AppConfig::resolve(None, None, Some(PathBuf::from("logs"))).unwrap_err();
        assert_eq!(err, ConfigError::RelativeLogDir(PathBuf::from("logs")));
    }
}
