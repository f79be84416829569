//! Enable/disable commands for the automation flags
//!
//! Both commands are sugar over the config command: they build a sparse
//! settings patch, persist exactly the flags it overrides, and report the
//! resulting effective settings.

use std::path::Path;

use anyhow::Result;
use autocommit_core::{config, CommitSettingsPatch, OutputFormat};

use super::config::{scope_config_path, write_config_value};

#[derive(Debug)]
pub struct ToggleOptions {
    /// true for `enable`, false for `disable`
    pub enable: bool,
    pub push: bool,
    pub global: bool,
    pub format: OutputFormat,
}

/// Execute the enable/disable command
///
/// # Errors
///
/// Returns error if the current config cannot be loaded or the target
/// config file cannot be written
pub async fn run(options: ToggleOptions) -> Result<()> {
    let patch = build_patch(options.enable, options.push);

    let merged = config::load_config().await.map_err(anyhow::Error::new)?;
    let updated = merged.commit.apply(patch);

    let config_path = scope_config_path(options.global)?;
    persist_patch(&config_path, patch).await?;

    if options.format.is_json() {
        let response = serde_json::json!({
            "success": true,
            "auto_commit_enabled": updated.auto_commit_enabled,
            "auto_push_enabled": updated.auto_push_enabled,
            "push_effective": updated.push_is_effective(),
            "scope": if options.global { "global" } else { "project" },
        });
        println!("{response}");
    } else {
        print_flag("Automatic commits", updated.auto_commit_enabled);
        print_flag("Automatic push", updated.auto_push_enabled);
        if updated.auto_push_enabled && !updated.push_is_effective() {
            println!("  note: automatic push stays inactive until automatic commits are enabled");
        }
    }

    Ok(())
}

/// Map the command form onto a settings patch.
///
/// `enable` turns commits on, `enable --push` turns both flags on.
/// `disable` turns both flags off, `disable --push` clears only the push
/// flag.
fn build_patch(enable: bool, push: bool) -> CommitSettingsPatch {
    match (enable, push) {
        (true, false) => CommitSettingsPatch::default().auto_commit(true),
        (true, true) => CommitSettingsPatch::default().auto_commit(true).auto_push(true),
        (false, true) => CommitSettingsPatch::default().auto_push(false),
        (false, false) => CommitSettingsPatch::default()
            .auto_commit(false)
            .auto_push(false),
    }
}

/// Write exactly the flags the patch overrides to the config file.
async fn persist_patch(config_path: &Path, patch: CommitSettingsPatch) -> Result<()> {
    if let Some(enabled) = patch.auto_commit_enabled {
        write_config_value(config_path, "commit.auto_commit_enabled", &enabled.to_string()).await?;
    }
    if let Some(enabled) = patch.auto_push_enabled {
        write_config_value(config_path, "commit.auto_push_enabled", &enabled.to_string()).await?;
    }
    Ok(())
}

fn print_flag(label: &str, enabled: bool) {
    println!(
        "✓ {label} {}",
        if enabled { "enabled" } else { "disabled" }
    );
}
