//! CLI argument definitions and command builders
//!
//! This module contains all clap command builders for the autocommit CLI.
//! Each function returns a configured `clap::Command` for a subcommand.

use clap::{Arg, ArgAction, Command};

pub fn after_help_text(examples: &[&str]) -> String {
    let mut text = String::from("EXAMPLES:\n");
    for example in examples {
        text.push_str("  ");
        text.push_str(example);
        text.push('\n');
    }
    text
}

fn arg_json() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON for machine parsing")
}

fn arg_global() -> Arg {
    Arg::new("global")
        .long("global")
        .short('g')
        .action(ArgAction::SetTrue)
        .help("Operate on the global config instead of the project config")
}

pub fn cmd_config() -> Command {
    Command::new("config")
        .about("View or modify configuration")
        .long_about(
            "View or Modify Configuration\n\
             \n\
             With no arguments, shows the merged configuration and where each\n\
             layer comes from. With a key, shows that value. With a key and a\n\
             value, writes the value to the project config file (or the global\n\
             one with --global), preserving the file's formatting.",
        )
        .arg(
            Arg::new("key")
                .required(false)
                .help("Configuration key in dot notation (e.g. commit.auto_commit_enabled)"),
        )
        .arg(
            Arg::new("value")
                .required(false)
                .help("New value for the key"),
        )
        .arg(arg_global())
        .arg(arg_json())
        .after_help(after_help_text(&[
            "autocommit config                                   Show merged configuration",
            "autocommit config commit.auto_commit_enabled        Show one value",
            "autocommit config commit.auto_commit_enabled true   Enable automatic commits",
            "autocommit config --global message.prefix wip:      Write to the global config",
        ]))
}

pub fn cmd_enable() -> Command {
    Command::new("enable")
        .about("Turn on automatic commits (and optionally push)")
        .arg(
            Arg::new("push")
                .long("push")
                .action(ArgAction::SetTrue)
                .help("Also turn on automatic push"),
        )
        .arg(arg_global())
        .arg(arg_json())
        .after_help(after_help_text(&[
            "autocommit enable                Enable automatic commits",
            "autocommit enable --push         Enable automatic commits and push",
        ]))
}

pub fn cmd_disable() -> Command {
    Command::new("disable")
        .about("Turn off automatic commits and push")
        .arg(
            Arg::new("push")
                .long("push")
                .action(ArgAction::SetTrue)
                .help("Only turn off automatic push, leave commits on"),
        )
        .arg(arg_global())
        .arg(arg_json())
        .after_help(after_help_text(&[
            "autocommit disable               Disable automatic commits and push",
            "autocommit disable --push        Disable only automatic push",
        ]))
}

pub fn cmd_status() -> Command {
    Command::new("status")
        .about("Show the effective automation settings")
        .arg(arg_json())
        .after_help(after_help_text(&[
            "autocommit status                Human-readable summary",
            "autocommit status --json         Structured output for scripts",
        ]))
}

pub fn cmd_completions() -> Command {
    Command::new("completions")
        .about("Generate shell completion scripts")
        .arg(
            Arg::new("shell")
                .required(true)
                .help("Shell to generate completions for (bash, zsh, fish)"),
        )
        .after_help(after_help_text(&[
            "autocommit completions bash > ~/.local/share/bash-completion/completions/autocommit",
            "autocommit completions zsh > ~/.zfunc/_autocommit",
        ]))
}

pub fn build_cli() -> Command {
    Command::new("autocommit")
        .about("Settings manager for automated commit and push")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd_config())
        .subcommand(cmd_enable())
        .subcommand(cmd_disable())
        .subcommand(cmd_status())
        .subcommand(cmd_completions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cli_debug_assert() {
        // clap's own consistency checks (conflicting args, ids, ...)
        build_cli().debug_assert();
    }

    #[test]
    fn test_config_accepts_key_and_value() {
        let matches = build_cli().try_get_matches_from([
            "autocommit",
            "config",
            "commit.auto_commit_enabled",
            "true",
        ]);
        assert!(matches.is_ok());
    }

    #[test]
    fn test_enable_push_flag() {
        let result = build_cli().try_get_matches_from(["autocommit", "enable", "--push"]);
        let Ok(matches) = result else {
            panic!("parse failed");
        };
        let Some(("enable", sub_m)) = matches.subcommand() else {
            panic!("expected enable subcommand");
        };
        assert!(sub_m.get_flag("push"));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        let result = build_cli().try_get_matches_from(["autocommit", "frobnicate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_after_help_text_lists_examples() {
        let text = after_help_text(&["a", "b"]);
        assert!(text.starts_with("EXAMPLES:\n"));
        assert!(text.contains("  a\n"));
        assert!(text.contains("  b\n"));
    }
}
