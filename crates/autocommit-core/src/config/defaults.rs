//! Default configuration values
//!
//! This module provides Default trait implementations for all configuration
//! types.

use super::settings::CommitSettings;
use super::types::{Config, MessageConfig};

// ═══════════════════════════════════════════════════════════════════════════
// DEFAULT IMPLEMENTATIONS
// ═══════════════════════════════════════════════════════════════════════════

impl Default for Config {
    fn default() -> Self {
        Self {
            main_branch: String::new(),
            remote: "origin".to_string(),
            commit: CommitSettings::default(),
            message: MessageConfig::default(),
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for CommitSettings {
    fn default() -> Self {
        Self {
            auto_commit_enabled: false,
            auto_push_enabled: false,
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            prefix: "auto:".to_string(),
            template: "{prefix} checkpoint on {branch}".to_string(),
        }
    }
}
