//! Commit automation settings
//!
//! [`CommitSettings`] is an immutable value: every change goes through
//! [`CommitSettings::apply`], which returns a new value and leaves the
//! receiver untouched. [`CommitSettingsPatch`] is the sparse override set
//! used to derive one value from another.

use serde::{Deserialize, Serialize};

/// Flags controlling automated commit and push behavior.
///
/// `auto_push_enabled` only takes effect while `auto_commit_enabled` is set;
/// the pair is never rejected, see [`CommitSettings::push_is_effective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitSettings {
    pub auto_commit_enabled: bool,
    pub auto_push_enabled: bool,
}

/// A partial override set for [`CommitSettings`].
///
/// Fields left as `None` are retained from the value the patch is applied
/// to. Deserializing a TOML/JSON fragment with absent keys yields `None`
/// for those keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_commit_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_push_enabled: Option<bool>,
}

impl CommitSettings {
    /// Derive a new value with the fields present in `patch` replaced and
    /// all other fields retained.
    ///
    /// The receiver is copied, never mutated. Total over boolean inputs:
    /// there is no error path.
    #[must_use]
    pub const fn apply(self, patch: CommitSettingsPatch) -> Self {
        Self {
            auto_commit_enabled: match patch.auto_commit_enabled {
                Some(enabled) => enabled,
                None => self.auto_commit_enabled,
            },
            auto_push_enabled: match patch.auto_push_enabled {
                Some(enabled) => enabled,
                None => self.auto_push_enabled,
            },
        }
    }

    /// Whether automatic push will actually happen.
    ///
    /// The push flag is only meaningful while automatic commits are on.
    #[must_use]
    pub const fn push_is_effective(&self) -> bool {
        self.auto_commit_enabled && self.auto_push_enabled
    }
}

impl CommitSettingsPatch {
    /// Override the auto-commit flag.
    #[must_use]
    pub const fn auto_commit(mut self, enabled: bool) -> Self {
        self.auto_commit_enabled = Some(enabled);
        self
    }

    /// Override the auto-push flag.
    #[must_use]
    pub const fn auto_push(mut self, enabled: bool) -> Self {
        self.auto_push_enabled = Some(enabled);
        self
    }

    /// True when the patch overrides nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.auto_commit_enabled.is_none() && self.auto_push_enabled.is_none()
    }
}
