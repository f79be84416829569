//! Shell completion generation command
//!
//! Generates shell completion scripts for bash, zsh, and fish shells.

use std::io;

use anyhow::Result;
use clap_complete::{generate, Shell};

use crate::cli::build_cli;

/// Supported shell types for completion generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

impl CompletionShell {
    /// Parse shell name from string
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            _ => anyhow::bail!("Unsupported shell: {s}\nSupported shells: bash, zsh, fish"),
        }
    }

    /// Convert to clap Shell type
    const fn to_clap_shell(self) -> Shell {
        match self {
            Self::Bash => Shell::Bash,
            Self::Zsh => Shell::Zsh,
            Self::Fish => Shell::Fish,
        }
    }
}

/// Execute the completions command
///
/// # Errors
///
/// Returns error if the shell name is not supported
pub fn run(shell_name: &str) -> Result<()> {
    let shell = CompletionShell::from_str(shell_name)?;
    let mut cmd = build_cli();
    generate(shell.to_clap_shell(), &mut cmd, "autocommit", &mut io::stdout());
    Ok(())
}
