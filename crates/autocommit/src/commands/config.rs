//! Configuration viewing and editing command

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autocommit_core::{config, Config, OutputFormat};
use serde_json::Value as JsonValue;

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct ConfigOptions {
    pub key: Option<String>,
    pub value: Option<String>,
    pub global: bool,
    pub format: OutputFormat,
}

/// Execute the config command
///
/// # Errors
///
/// Returns error if:
/// - Config files cannot be read or parsed
/// - The key is not in the schema, or the value has the wrong type
/// - The config file cannot be written
pub async fn run(options: ConfigOptions) -> Result<()> {
    // Preserve error type for proper exit code mapping
    let merged = config::load_config().await.map_err(anyhow::Error::new)?;

    match (options.key, options.value) {
        // No key, no value: show all config
        (None, None) => {
            show_all_config(&merged, options.format)?;
        }

        // Key, no value: show specific value
        (Some(key), None) => {
            config::validate_key(&key)?;
            show_config_value(&merged, &key, options.format)?;
        }

        // Key + value: set value
        (Some(key), Some(value)) => {
            config::validate_key(&key)?;
            config::validate_value(&key, &value)?;

            let config_path = scope_config_path(options.global)?;
            write_config_value(&config_path, &key, &value).await?;

            if options.format.is_json() {
                let response = serde_json::json!({
                    "success": true,
                    "key": key,
                    "value": value,
                    "scope": if options.global { "global" } else { "project" },
                });
                println!("{response}");
            } else {
                println!("✓ Set {key} = {value}");
                if options.global {
                    println!("  (in global config)");
                } else {
                    println!("  (in project config)");
                }
            }
        }

        // Value without key: invalid
        (None, Some(_)) => {
            anyhow::bail!("Cannot set value without key");
        }
    }

    Ok(())
}

/// Config file for the requested scope.
pub(crate) fn scope_config_path(global: bool) -> Result<PathBuf> {
    let path = if global {
        config::global_config_path()
    } else {
        config::project_config_path()
    };
    path.map_err(anyhow::Error::new)
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEW OPERATIONS
// ═══════════════════════════════════════════════════════════════════════════

/// Show all configuration
fn show_all_config(merged: &Config, format: OutputFormat) -> Result<()> {
    if format.is_json() {
        let json_val =
            serde_json::to_string_pretty(merged).context("Failed to serialize config to JSON")?;
        println!("{json_val}");
        return Ok(());
    }

    let toml = toml::to_string_pretty(merged).context("Failed to serialize config to TOML")?;

    println!("Current configuration (merged):");
    println!();
    println!("{toml}");

    println!();
    println!("Config sources:");
    println!("  1. Built-in defaults");
    if let Ok(global_path) = config::global_config_path() {
        println!("  2. Global: {}", global_path.display());
    }
    if let Ok(project_path) = config::project_config_path() {
        println!("  3. Project: {}", project_path.display());
    }
    println!("  4. Environment: AUTOCOMMIT_* variables");

    Ok(())
}

/// Show a specific config value
fn show_config_value(merged: &Config, key: &str, format: OutputFormat) -> Result<()> {
    if format.is_json() {
        let json_val =
            serde_json::to_value(merged).context("Failed to serialize config for value lookup")?;
        let current = lookup_json_path(&json_val, key)?;
        println!("{}", serde_json::to_string_pretty(current)?);
        return Ok(());
    }

    let value = get_nested_value(merged, key)?;
    println!("{key} = {value}");
    Ok(())
}

/// Navigate a JSON tree using dot notation
fn lookup_json_path<'a>(json: &'a JsonValue, key: &str) -> Result<&'a JsonValue> {
    key.split('.').try_fold(json, |current_value, part| {
        current_value.get(part).ok_or_else(|| {
            anyhow::Error::new(autocommit_core::Error::not_found(format!(
                "Config key '{key}'. Use 'autocommit config' to see all keys."
            )))
        })
    })
}

/// Get a nested value from config using dot notation
fn get_nested_value(merged: &Config, key: &str) -> Result<String> {
    // Convert config to JSON for easy nested access
    let json =
        serde_json::to_value(merged).context("Failed to serialize config for value lookup")?;

    let current = lookup_json_path(&json, key)?;

    // Format value based on type
    Ok(match current {
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => s.clone(),
        _ => serde_json::to_string_pretty(current)
            .context("Failed to format complex config value")?,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// SET OPERATIONS
// ═══════════════════════════════════════════════════════════════════════════

/// Set a config value in the given config file, preserving formatting
pub(crate) async fn write_config_value(config_path: &Path, key: &str, value: &str) -> Result<()> {
    // Load existing config or create new
    let mut doc = if tokio::fs::try_exists(config_path).await.is_ok_and(|v| v) {
        let content = tokio::fs::read_to_string(config_path)
            .await
            .with_context(|| {
                format!("Failed to read config file {}", config_path.display())
            })?;
        content
            .parse::<toml_edit::DocumentMut>()
            .context("Failed to parse config file as TOML")?
    } else {
        // Create parent directory if needed
        if let Some(parent) = config_path.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        toml_edit::DocumentMut::new()
    };

    let parts: Vec<&str> = key.split('.').collect();
    set_nested_value(&mut doc, &parts, value)?;

    tokio::fs::write(config_path, doc.to_string())
        .await
        .with_context(|| format!("Failed to write config file {}", config_path.display()))?;

    Ok(())
}

/// Set a nested value in a TOML document using dot notation
fn set_nested_value(doc: &mut toml_edit::DocumentMut, parts: &[&str], value: &str) -> Result<()> {
    if parts.is_empty() {
        anyhow::bail!("Empty config key");
    }

    // Navigate to the parent table, creating intermediate tables as needed
    let final_table =
        parts[..parts.len() - 1]
            .iter()
            .try_fold(doc.as_table_mut(), |current_table, &part| {
                if !current_table.contains_key(part) {
                    current_table[part] = toml_edit::table();
                }
                current_table[part].as_table_mut().ok_or_else(|| {
                    anyhow::Error::new(autocommit_core::Error::validation(format!(
                        "{part} is not a table"
                    )))
                })
            })?;

    let key = parts.last().ok_or_else(|| {
        anyhow::Error::new(autocommit_core::Error::validation("Invalid key path"))
    })?;
    final_table[key] = parse_value(value);

    Ok(())
}

/// Parse a string value into a TOML item (bool, int, or string)
fn parse_value(value: &str) -> toml_edit::Item {
    if value == "true" || value == "false" {
        toml_edit::value(value == "true")
    } else if let Ok(n) = value.parse::<i64>() {
        toml_edit::value(n)
    } else {
        toml_edit::value(value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
