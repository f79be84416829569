//! Configuration type definitions
//!
//! This module contains the configuration structures without behavior.
//! Each structure is a pure data holder with derived traits.

use serde::{Deserialize, Serialize};

use super::settings::{CommitSettings, CommitSettingsPatch};

// ═══════════════════════════════════════════════════════════════════════════
// MAIN CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════

/// Root configuration structure
///
/// Loaded from defaults → global → project → env vars
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Branch the automation tracks. Empty string means auto-detect.
    pub main_branch: String,
    /// Name of the push target remote. Data only, never dialed from here.
    pub remote: String,
    pub commit: CommitSettings,
    pub message: MessageConfig,
}

// ═══════════════════════════════════════════════════════════════════════════
// NESTED CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

/// Commit message settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessageConfig {
    pub prefix: String,
    pub template: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// PARTIAL (PATCH) STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

/// A partial configuration: exactly the fields a single source (file, env)
/// provides. Absent keys deserialize to `None` and are retained from the
/// value the patch is merged into.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    pub commit: CommitSettingsPatch,
    pub message: MessagePatch,
}

/// Partial override set for [`MessageConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}
