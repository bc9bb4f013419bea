//! Test plan for the `catalog-config` crate.
//!
//! These tests exercise the configuration loader across default handling,
//! file discovery, and environment overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

use catalog_config::{load, AppConfig};

const ENV_VARS_TO_RESET: &[&str] = &[
    "CATALOG_CONFIG",
    "CATALOG__AUTH_SERVICE__BASE_URL",
    "CATALOG__AUTH_SERVICE__REGISTER_PATH",
    "CATALOG__AUTH_SERVICE__REQUEST_TIMEOUT_SECONDS",
    "CATALOG__AUTH_SERVICE__INCLUDE_CREDENTIALS",
    "CATALOG__NAVIGATION__LOGIN_ROUTE",
];

struct TestContext {
    vars: Vec<(String, Option<String>)>,
    original_dir: Option<PathBuf>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            vars: Vec::new(),
            original_dir: None,
        }
    }

    fn reset_environment(&mut self) {
        for key in ENV_VARS_TO_RESET {
            self.remove_var(key);
        }
    }

    fn set_var(&mut self, key: &str, value: impl AsRef<str>) {
        let previous = std::env::var(key).ok();
        std::env::set_var(key, value.as_ref());
        self.vars.push((key.to_string(), previous));
    }

    fn remove_var(&mut self, key: &str) {
        let previous = std::env::var(key).ok();
        std::env::remove_var(key);
        self.vars.push((key.to_string(), previous));
    }

    fn set_current_dir(&mut self, dir: &Path) {
        if self.original_dir.is_none() {
            self.original_dir =
                Some(std::env::current_dir().expect("failed to capture current directory"));
        }
        std::env::set_current_dir(dir).expect("failed to set current directory");
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(original) = self.original_dir.take() {
            let _ = std::env::set_current_dir(original);
        }

        while let Some((key, value)) = self.vars.pop() {
            match value {
                Some(val) => std::env::set_var(&key, val),
                None => std::env::remove_var(&key),
            }
        }
    }
}

fn write_config_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create config directories");
    }
    fs::write(path, contents).expect("failed to write config file");
}

#[test]
#[serial]
fn load_uses_default_values_when_no_files_found() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    let config = load().expect("configuration load should succeed without files");
    let defaults = AppConfig::default();

    assert_eq!(config.auth_service.base_url, defaults.auth_service.base_url);
    assert_eq!(
        config.auth_service.register_path,
        defaults.auth_service.register_path
    );
    assert_eq!(config.auth_service.request_timeout_seconds, None);
    assert!(config.auth_service.include_credentials);
    assert_eq!(config.navigation.login_route, "/login");
    assert_eq!(
        config.auth_service.register_url(),
        "http://localhost:8080/auth/register"
    );
}

#[test]
#[serial]
fn load_discovers_config_file_in_config_directory() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "config/catalog.toml",
        r#"
[auth_service]
base_url = "https://auth.library.test/"
request_timeout_seconds = 15

[navigation]
login_route = "/sign-in"
"#,
    );

    let config = load().expect("configuration should load from discovered file");

    assert_eq!(config.auth_service.base_url, "https://auth.library.test/");
    assert_eq!(
        config.auth_service.register_url(),
        "https://auth.library.test/auth/register"
    );
    assert_eq!(
        config.auth_service.request_timeout(),
        Some(Duration::from_secs(15))
    );
    assert_eq!(config.navigation.login_route, "/sign-in");
}

#[test]
#[serial]
fn explicit_config_path_takes_precedence_over_discovery() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "catalog.toml",
        "[auth_service]\nbase_url = \"http://discovered.test\"\n",
    );
    write_config_file(
        temp_dir.path(),
        "elsewhere/custom.toml",
        "[auth_service]\nbase_url = \"http://explicit.test\"\nregister_path = \"/v2/register\"\n",
    );

    let explicit = temp_dir.path().join("elsewhere/custom.toml");
    ctx.set_var("CATALOG_CONFIG", explicit.display().to_string());

    let config = load().expect("configuration should load from explicit path");

    assert_eq!(config.auth_service.base_url, "http://explicit.test");
    assert_eq!(
        config.auth_service.register_url(),
        "http://explicit.test/v2/register"
    );
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    write_config_file(
        temp_dir.path(),
        "catalog.toml",
        "[auth_service]\nbase_url = \"http://from-file.test\"\n",
    );

    ctx.set_var("CATALOG__AUTH_SERVICE__BASE_URL", "http://from-env.test");
    ctx.set_var("CATALOG__AUTH_SERVICE__REQUEST_TIMEOUT_SECONDS", "3");
    ctx.set_var("CATALOG__AUTH_SERVICE__INCLUDE_CREDENTIALS", "false");

    let config = load().expect("configuration should load with env overrides");

    assert_eq!(config.auth_service.base_url, "http://from-env.test");
    assert_eq!(config.auth_service.request_timeout_seconds, Some(3));
    assert!(!config.auth_service.include_credentials);
}

#[test]
#[serial]
fn missing_explicit_config_file_is_an_error() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let mut ctx = TestContext::new();
    ctx.reset_environment();
    ctx.set_current_dir(temp_dir.path());

    let missing = temp_dir.path().join("does-not-exist.toml");
    ctx.set_var("CATALOG_CONFIG", missing.display().to_string());

    let err = load().expect_err("a missing explicit file should fail");
    assert!(err.to_string().contains("unable to build configuration"));
}
