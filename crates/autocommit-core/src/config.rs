//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: ~/.config/autocommit/config.toml
//! 3. Project config: .autocommit/config.toml
//! 4. Environment variables: `AUTOCOMMIT_*`
//!
//! Each source yields a [`ConfigPatch`] - the sparse set of keys it actually
//! provides - and [`Config::merge`] replaces exactly those keys. Unset keys
//! keep the value from the previous source.
//!
//! # Example Config
//!
//! ```toml
//! main_branch = "main"
//! remote = "origin"
//!
//! [commit]
//! auto_commit_enabled = true
//! auto_push_enabled = false
//!
//! [message]
//! prefix = "auto:"
//! ```

use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::{Error, Result};

mod defaults;
mod settings;
mod types;


pub use settings::{CommitSettings, CommitSettingsPatch};
pub use types::{Config, ConfigPatch, MessageConfig, MessagePatch};

// ═══════════════════════════════════════════════════════════════════════════
// CONFIG KEY VALIDATION
// ═══════════════════════════════════════════════════════════════════════════

/// All valid configuration keys in dot-notation
///
/// This list defines the complete schema of supported configuration keys.
/// Any key not in this list is rejected with a helpful error message.
pub const VALID_KEYS: &[&str] = &[
    // Top-level keys
    "main_branch",
    "remote",
    "commit",
    "message",
    // Commit settings
    "commit.auto_commit_enabled",
    "commit.auto_push_enabled",
    // Message config
    "message.prefix",
    "message.template",
];

/// Keys whose values must parse as booleans.
const BOOL_KEYS: &[&str] = &["commit.auto_commit_enabled", "commit.auto_push_enabled"];

/// Validate a configuration key
///
/// Checks if the given key is in the list of valid configuration keys.
/// A key is also valid when it names a section ("commit" is the parent of
/// "commit.auto_commit_enabled").
///
/// # Errors
///
/// Returns `Error::Validation` if the key is not recognized. The error
/// message includes the list of valid keys.
pub fn validate_key(key: &str) -> Result<()> {
    let is_valid = VALID_KEYS
        .iter()
        .any(|valid_key| key == *valid_key || valid_key.starts_with(&format!("{key}.")));

    if is_valid {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "Unknown configuration key: '{key}'\n\nValid keys:\n  {}\n\nUse 'autocommit config' to see current configuration.",
            VALID_KEYS.iter().join("\n  ")
        )))
    }
}

/// Validate a value for a typed configuration key
///
/// The flag keys under `commit` only accept booleans; everything else is
/// stored as written.
///
/// # Errors
///
/// Returns `Error::Validation` when a boolean key receives a non-boolean
/// value.
pub fn validate_value(key: &str, value: &str) -> Result<()> {
    if BOOL_KEYS.contains(&key) && value.parse::<bool>().is_err() {
        return Err(Error::validation(format!(
            "Config key '{key}' expects a boolean (true or false), got '{value}'"
        )));
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources with hierarchy
///
/// # Errors
///
/// Returns error if:
/// - A config file is malformed TOML
/// - An environment override has an invalid value
/// - The merged config fails validation
pub async fn load_config() -> Result<Config> {
    // 1. Start with built-in defaults
    let mut config = Config::default();

    // 2. Merge global config if it exists
    if let Ok(global_path) = global_config_path() {
        if global_path.exists() {
            config.merge(load_toml_file(&global_path).await?);
        }
    }

    // 3. Merge project config if it exists (project overrides global)
    if let Ok(project_path) = project_config_path() {
        if project_path.exists() {
            config.merge(load_toml_file(&project_path).await?);
        }
    }

    // 4. Apply environment variable overrides
    config.merge(ConfigPatch::from_env()?);

    // 5. Validate the merged result
    config.validate()?;

    Ok(config)
}

/// Get path to the project config file
///
/// # Errors
///
/// Returns error if the current directory cannot be determined
pub fn project_config_path() -> Result<PathBuf> {
    std::env::current_dir()
        .map(|dir| dir.join(".autocommit/config.toml"))
        .map_err(|e| Error::io_error(format!("Failed to get current directory: {e}")))
}

/// Get path to the global config file
pub fn global_config_path() -> Result<PathBuf> {
    directories::ProjectDirs::from("", "", "autocommit")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
        .ok_or_else(|| Error::io_error("Failed to determine global config directory"))
}

/// Load a TOML file into a partial config
///
/// # Errors
///
/// Returns error if:
/// - The file cannot be read
/// - The TOML is malformed
pub async fn load_toml_file(path: &Path) -> Result<ConfigPatch> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::io_error(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    toml::from_str(&content)
        .map_err(|e| Error::parse_error(format!("Failed to parse config {}: {e}", path.display())))
}

// ═══════════════════════════════════════════════════════════════════════════
// ENVIRONMENT OVERRIDES
// ═══════════════════════════════════════════════════════════════════════════

impl ConfigPatch {
    /// Build a patch from `AUTOCOMMIT_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a boolean variable holds a non-boolean value
    pub fn from_env() -> Result<Self> {
        let mut patch = Self::default();

        if let Ok(value) = std::env::var("AUTOCOMMIT_MAIN_BRANCH") {
            patch.main_branch = Some(value);
        }

        if let Ok(value) = std::env::var("AUTOCOMMIT_REMOTE") {
            patch.remote = Some(value);
        }

        if let Ok(value) = std::env::var("AUTOCOMMIT_AUTO_COMMIT") {
            patch.commit.auto_commit_enabled = Some(parse_env_bool("AUTOCOMMIT_AUTO_COMMIT", &value)?);
        }

        if let Ok(value) = std::env::var("AUTOCOMMIT_AUTO_PUSH") {
            patch.commit.auto_push_enabled = Some(parse_env_bool("AUTOCOMMIT_AUTO_PUSH", &value)?);
        }

        if let Ok(value) = std::env::var("AUTOCOMMIT_MESSAGE_PREFIX") {
            patch.message.prefix = Some(value);
        }

        if let Ok(value) = std::env::var("AUTOCOMMIT_MESSAGE_TEMPLATE") {
            patch.message.template = Some(value);
        }

        Ok(patch)
    }
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool> {
    raw.parse()
        .map_err(|e| Error::invalid_config(format!("Invalid {name} value: {e}")))
}

// ═══════════════════════════════════════════════════════════════════════════
// MERGE IMPLEMENTATIONS
// ═══════════════════════════════════════════════════════════════════════════

impl MessageConfig {
    fn merge(&mut self, patch: MessagePatch) {
        if let Some(prefix) = patch.prefix {
            self.prefix = prefix;
        }
        if let Some(template) = patch.template {
            self.template = template;
        }
    }

    /// Render the commit message template for a branch.
    ///
    /// Substitutes the `{prefix}` and `{branch}` placeholders.
    #[must_use]
    pub fn render(&self, branch: &str) -> String {
        self.template
            .replace("{prefix}", &self.prefix)
            .replace("{branch}", branch)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CONFIG METHODS
// ═══════════════════════════════════════════════════════════════════════════

impl Config {
    /// Merge a patch into this config (the patch takes precedence)
    ///
    /// Only keys the patch actually provides are replaced; all other keys
    /// keep their current values.
    pub fn merge(&mut self, patch: ConfigPatch) {
        if let Some(main_branch) = patch.main_branch {
            self.main_branch = main_branch;
        }
        if let Some(remote) = patch.remote {
            self.remote = remote;
        }
        self.commit = self.commit.apply(patch.commit);
        self.message.merge(patch.message);
    }

    /// Validate configuration values
    ///
    /// The flag pair `auto_push_enabled && !auto_commit_enabled` is allowed
    /// but inert; it is reported as a warning, never an error.
    ///
    /// # Errors
    ///
    /// Returns error if any values are invalid
    pub fn validate(&self) -> Result<()> {
        if self.remote.is_empty() {
            return Err(Error::validation("remote must not be empty"));
        }

        if !self.message.template.contains("{branch}") {
            return Err(Error::validation(
                "message.template must contain the {branch} placeholder",
            ));
        }

        if self.commit.auto_push_enabled && !self.commit.auto_commit_enabled {
            tracing::warn!(
                "auto_push_enabled has no effect while auto_commit_enabled is false"
            );
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const ENV_VARS: &[&str] = &[
        "AUTOCOMMIT_MAIN_BRANCH",
        "AUTOCOMMIT_REMOTE",
        "AUTOCOMMIT_AUTO_COMMIT",
        "AUTOCOMMIT_AUTO_PUSH",
        "AUTOCOMMIT_MESSAGE_PREFIX",
        "AUTOCOMMIT_MESSAGE_TEMPLATE",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.main_branch, "");
        assert_eq!(config.remote, "origin");
        assert!(!config.commit.auto_commit_enabled);
        assert!(!config.commit.auto_push_enabled);
        assert_eq!(config.message.prefix, "auto:");
        assert_eq!(config.message.template, "{prefix} checkpoint on {branch}");
    }

    #[test]
    fn test_merge_replaces_only_provided_keys() {
        let mut base = Config::default();
        let patch = ConfigPatch {
            main_branch: Some("develop".to_string()),
            ..Default::default()
        };

        base.merge(patch);

        assert_eq!(base.main_branch, "develop");
        assert_eq!(base.remote, "origin"); // Should still have default
        assert!(!base.commit.auto_commit_enabled);
    }

    #[test]
    fn test_merge_project_overrides_global() {
        let mut base = Config::default();

        // First merge global
        let global = ConfigPatch {
            remote: Some("upstream".to_string()),
            ..Default::default()
        };
        base.merge(global);
        assert_eq!(base.remote, "upstream");

        // Then merge project (should override)
        let project = ConfigPatch {
            remote: Some("fork".to_string()),
            ..Default::default()
        };
        base.merge(project);

        assert_eq!(base.remote, "fork");
    }

    #[test]
    fn test_merge_nested_commit_flags() {
        let mut base = Config::default();
        let patch = ConfigPatch {
            commit: CommitSettingsPatch::default().auto_commit(true),
            ..Default::default()
        };

        base.merge(patch);

        assert!(base.commit.auto_commit_enabled);
        // Unpatched flag retained from the previous source
        assert!(!base.commit.auto_push_enabled);
    }

    #[test]
    fn test_merge_later_source_can_clear_flag() {
        let mut base = Config::default();
        base.merge(ConfigPatch {
            commit: CommitSettingsPatch::default().auto_commit(true).auto_push(true),
            ..Default::default()
        });
        base.merge(ConfigPatch {
            commit: CommitSettingsPatch::default().auto_push(false),
            ..Default::default()
        });

        assert!(base.commit.auto_commit_enabled);
        assert!(!base.commit.auto_push_enabled);
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_strings() {
        clear_env();
        std::env::set_var("AUTOCOMMIT_MAIN_BRANCH", "trunk");
        std::env::set_var("AUTOCOMMIT_MESSAGE_PREFIX", "wip:");

        let mut config = Config::default();
        let result = ConfigPatch::from_env();
        assert!(result.is_ok());
        if let Ok(patch) = result {
            config.merge(patch);
        }

        assert_eq!(config.main_branch, "trunk");
        assert_eq!(config.message.prefix, "wip:");
        assert_eq!(config.remote, "origin"); // untouched

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_var_parsing_bool() {
        clear_env();
        std::env::set_var("AUTOCOMMIT_AUTO_COMMIT", "true");
        std::env::set_var("AUTOCOMMIT_AUTO_PUSH", "false");

        let result = ConfigPatch::from_env();
        assert!(result.is_ok());
        let patch = result.unwrap_or_default();
        assert_eq!(patch.commit.auto_commit_enabled, Some(true));
        assert_eq!(patch.commit.auto_push_enabled, Some(false));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_var_invalid_bool_rejected() {
        clear_env();
        std::env::set_var("AUTOCOMMIT_AUTO_COMMIT", "maybe");

        let result = ConfigPatch::from_env();
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("AUTOCOMMIT_AUTO_COMMIT"));
        }

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_vars_absent_yield_empty_patch() {
        clear_env();

        let result = ConfigPatch::from_env();
        assert!(result.is_ok());
        assert_eq!(result.unwrap_or_default(), ConfigPatch::default());
    }

    #[test]
    fn test_validation_default_config_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_remote_rejected() {
        let config = Config {
            remote: String::new(),
            ..Default::default()
        };

        let result = config.validate();
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("remote"));
        }
    }

    #[test]
    fn test_validation_template_requires_branch_placeholder() {
        let mut config = Config::default();
        config.message.template = "checkpoint".to_string();

        let result = config.validate();
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("{branch}"));
        }
    }

    #[test]
    fn test_validation_push_without_commit_is_not_an_error() {
        // The incoherent pair warns but stays valid: construction and copy
        // are total, and the latent rule is surfaced via push_is_effective.
        let mut config = Config::default();
        config.commit.auto_push_enabled = true;

        assert!(config.validate().is_ok());
        assert!(!config.commit.push_is_effective());
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let message = MessageConfig::default();
        let rendered = message.render("feature-x");
        assert_eq!(rendered, "auto: checkpoint on feature-x");
        assert!(!rendered.contains("{branch}"));
        assert!(!rendered.contains("{prefix}"));
    }

    #[tokio::test]
    async fn test_malformed_toml_returns_parse_error() -> Result<()> {
        let temp_dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let config_path = temp_dir.path().join("bad_config.toml");

        tokio::fs::write(&config_path, b"remote = \n invalid toml [[[")
            .await
            .map_err(|e| Error::io_error(format!("Failed to write test file: {e}")))?;

        let result = load_toml_file(&config_path).await;
        assert!(result.is_err());

        if let Err(e) = result {
            assert!(matches!(e, Error::ParseError(_)));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_partial_file_yields_partial_patch() -> Result<()> {
        let temp_dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let config_path = temp_dir.path().join("config.toml");

        tokio::fs::write(&config_path, b"[commit]\nauto_commit_enabled = true\n")
            .await
            .map_err(|e| Error::io_error(format!("Failed to write test file: {e}")))?;

        let patch = load_toml_file(&config_path).await?;
        assert_eq!(patch.commit.auto_commit_enabled, Some(true));
        assert_eq!(patch.commit.auto_push_enabled, None);
        assert_eq!(patch.main_branch, None);
        assert_eq!(patch.remote, None);
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_load_config_without_files_returns_defaults() {
        clear_env();

        // No project config exists in the crate directory; global config may
        // exist on a developer machine, so only assert validity.
        let result = load_config().await;
        assert!(
            result.is_ok(),
            "load_config should succeed even without config files"
        );

        let config = result.unwrap_or_default();
        assert!(!config.remote.is_empty());
    }

    #[test]
    fn test_project_config_path() {
        let result = project_config_path();
        assert!(result.is_ok());

        let path = result.map_or_else(|_| String::new(), |p| p.to_string_lossy().to_string());

        assert!(path.ends_with("config.toml"));
        assert!(path.contains(".autocommit"));
    }

    #[test]
    fn test_validate_key_valid_top_level() {
        let valid_keys = ["main_branch", "remote", "commit", "message"];

        for key in valid_keys {
            assert!(validate_key(key).is_ok(), "Key '{key}' should be valid");
        }
    }

    #[test]
    fn test_validate_key_valid_nested() {
        let valid_keys = [
            "commit.auto_commit_enabled",
            "commit.auto_push_enabled",
            "message.prefix",
            "message.template",
        ];

        for key in valid_keys {
            assert!(validate_key(key).is_ok(), "Key '{key}' should be valid");
        }
    }

    #[test]
    fn test_validate_key_invalid_returns_error() {
        let invalid_keys = [
            "nonexistent",
            "typo_key",
            "commit.auto_comit_enabled", // Typo: should be auto_commit_enabled
            "commit.invalid_field",
            "message.body",
        ];

        for key in invalid_keys {
            let result = validate_key(key);
            assert!(
                result.is_err(),
                "Key '{key}' should be invalid but passed validation"
            );

            if let Err(e) = result {
                let error_msg = e.to_string();
                assert!(
                    error_msg.contains("Unknown configuration key"),
                    "Error should mention unknown key for '{key}': {error_msg}"
                );
                assert!(
                    error_msg.contains("Valid keys:"),
                    "Error should list valid keys for '{key}'"
                );
            }
        }
    }

    #[test]
    fn test_validate_key_empty_returns_error() {
        let result = validate_key("");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_value_boolean_keys() {
        assert!(validate_value("commit.auto_commit_enabled", "true").is_ok());
        assert!(validate_value("commit.auto_push_enabled", "false").is_ok());

        for bad in ["yes", "1", "on", "enabled", ""] {
            let result = validate_value("commit.auto_commit_enabled", bad);
            assert!(result.is_err(), "Value '{bad}' should be rejected");
            if let Err(e) = result {
                assert!(e.to_string().contains("expects a boolean"));
            }
        }
    }

    #[test]
    fn test_validate_value_string_keys_accept_anything() {
        assert!(validate_value("message.prefix", "wip:").is_ok());
        assert!(validate_value("main_branch", "true").is_ok());
    }
}
