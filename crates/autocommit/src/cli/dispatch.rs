//! Command dispatch logic for routing CLI commands to their handlers

use anyhow::Result;
use autocommit_core::OutputFormat;
use clap::ArgMatches;

use crate::commands::{completions, config, status, toggle};

/// Route the parsed top-level matches to the command handlers.
pub async fn dispatch(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("config", sub_m)) => handle_config_cmd(sub_m).await,
        Some(("enable", sub_m)) => handle_toggle_cmd(sub_m, true).await,
        Some(("disable", sub_m)) => handle_toggle_cmd(sub_m, false).await,
        Some(("status", sub_m)) => status::run(format_from(sub_m)).await,
        Some(("completions", sub_m)) => handle_completions_cmd(sub_m),
        _ => anyhow::bail!("Unknown command. Use 'autocommit --help' to list commands."),
    }
}

fn format_from(sub_m: &ArgMatches) -> OutputFormat {
    OutputFormat::from_json_flag(sub_m.get_flag("json"))
}

async fn handle_config_cmd(sub_m: &ArgMatches) -> Result<()> {
    config::run(config::ConfigOptions {
        key: sub_m.get_one::<String>("key").cloned(),
        value: sub_m.get_one::<String>("value").cloned(),
        global: sub_m.get_flag("global"),
        format: format_from(sub_m),
    })
    .await
}

async fn handle_toggle_cmd(sub_m: &ArgMatches, enable: bool) -> Result<()> {
    toggle::run(toggle::ToggleOptions {
        enable,
        push: sub_m.get_flag("push"),
        global: sub_m.get_flag("global"),
        format: format_from(sub_m),
    })
    .await
}

fn handle_completions_cmd(sub_m: &ArgMatches) -> Result<()> {
    let shell = sub_m
        .get_one::<String>("shell")
        .ok_or_else(|| anyhow::anyhow!("Shell name is required"))?;
    completions::run(shell)
}
