//! Effective settings summary command

use anyhow::{Context, Result};
use autocommit_core::{config, Config, OutputFormat};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StatusReport {
    auto_commit_enabled: bool,
    auto_push_enabled: bool,
    push_effective: bool,
    main_branch: String,
    remote: String,
    message_preview: String,
}

impl StatusReport {
    fn from_config(merged: &Config) -> Self {
        let branch = if merged.main_branch.is_empty() {
            "main"
        } else {
            &merged.main_branch
        };

        Self {
            auto_commit_enabled: merged.commit.auto_commit_enabled,
            auto_push_enabled: merged.commit.auto_push_enabled,
            push_effective: merged.commit.push_is_effective(),
            main_branch: merged.main_branch.clone(),
            remote: merged.remote.clone(),
            message_preview: merged.message.render(branch),
        }
    }
}

/// Execute the status command
///
/// # Errors
///
/// Returns error if the config cannot be loaded
pub async fn run(format: OutputFormat) -> Result<()> {
    let merged = config::load_config().await.map_err(anyhow::Error::new)?;
    let report = StatusReport::from_config(&merged);

    if format.is_json() {
        let json_val = serde_json::to_string_pretty(&report)
            .context("Failed to serialize status to JSON")?;
        println!("{json_val}");
        return Ok(());
    }

    println!("Automatic commits: {}", on_off(report.auto_commit_enabled));
    println!("Automatic push:    {}", on_off(report.auto_push_enabled));
    if report.auto_push_enabled && !report.push_effective {
        println!("  note: automatic push stays inactive until automatic commits are enabled");
    }
    println!(
        "Tracked branch:    {}",
        if report.main_branch.is_empty() {
            "(auto-detect)"
        } else {
            &report.main_branch
        }
    );
    println!("Push remote:       {}", report.remote);
    println!("Message preview:   {}", report.message_preview);

    Ok(())
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}
