#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use serde::{Deserialize, Serialize};

/// `OutputFormat` enum represents the available output formats for commands.
///
/// This type-safe enum replaces a bare `json: bool` flag, making illegal
/// states (undefined output format) impossible to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format - structured, machine-readable
    Json,
    /// Human-readable output format - terminal-friendly
    Human,
}

impl OutputFormat {
    /// Check if the format is JSON.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if the format is human-readable.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Convert a `--json` flag to an `OutputFormat`.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Human
        }
    }
}

impl Default for OutputFormat {
    /// Default output format is human-readable.
    fn default() -> Self {
        Self::Human
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}
