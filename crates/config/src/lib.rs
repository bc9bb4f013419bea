use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "catalog.toml",
    "config/catalog.toml",
    "crates/config/catalog.toml",
    "../catalog.toml",
    "../config/catalog.toml",
    "../crates/config/catalog.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub auth_service: AuthServiceConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Connection settings for the external authentication service.
///
/// ```
/// use catalog_config::AuthServiceConfig;
///
/// let auth = AuthServiceConfig::default();
/// assert_eq!(auth.register_url(), "http://localhost:8080/auth/register");
/// assert!(auth.request_timeout().is_none());
/// assert!(auth.include_credentials);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthServiceConfig {
    #[serde(default = "AuthServiceConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "AuthServiceConfig::default_register_path")]
    pub register_path: String,
    /// Unset means no client-side timeout is applied.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
    #[serde(default = "AuthServiceConfig::default_include_credentials")]
    pub include_credentials: bool,
}

impl AuthServiceConfig {
    fn default_base_url() -> String {
        "http://localhost:8080".to_string()
    }

    fn default_register_path() -> String {
        "/auth/register".to_string()
    }

    const fn default_include_credentials() -> bool {
        true
    }

    pub fn register_url(&self) -> String {
        join_url(&self.base_url, &self.register_path)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            register_path: Self::default_register_path(),
            request_timeout_seconds: None,
            include_credentials: Self::default_include_credentials(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "NavigationConfig::default_login_route")]
    pub login_route: String,
}

impl NavigationConfig {
    fn default_login_route() -> String {
        "/login".to_string()
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            login_route: Self::default_login_route(),
        }
    }
}

/// Join a base URL and a path with exactly one separating slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn seeded_builder(defaults: &AppConfig) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("auth_service.base_url", defaults.auth_service.base_url.clone())?
        .set_default(
            "auth_service.register_path",
            defaults.auth_service.register_path.clone(),
        )?
        .set_default(
            "auth_service.include_credentials",
            defaults.auth_service.include_credentials,
        )?
        .set_default(
            "navigation.login_route",
            defaults.navigation.login_route.clone(),
        )
}

/// Load the front end configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use catalog_config::load;
///
/// std::env::remove_var("CATALOG_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.auth_service.base_url.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder =
        seeded_builder(&defaults).context("unable to seed configuration defaults")?;

    let environment_overrides = config::Environment::with_prefix("CATALOG").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("CATALOG_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via CATALOG_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded front end configuration");
    Ok(config)
}
