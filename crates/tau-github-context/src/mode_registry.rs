use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GithubContextError;

/// Registered behavior modes, in registry order.
pub const VALID_MODES: &[ModeName] = &[
    ModeName::Tag,
    ModeName::Agent,
    ModeName::ExperimentalReview,
];

/// Mode used when `MODE` is not configured.
pub const DEFAULT_MODE: ModeName = ModeName::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Enumerates supported `ModeName` values.
pub enum ModeName {
    #[default]
    Tag,
    Agent,
    ExperimentalReview,
}

impl ModeName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Agent => "agent",
            Self::ExperimentalReview => "experimental-review",
        }
    }
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeName {
    type Err = GithubContextError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        VALID_MODES
            .iter()
            .copied()
            .find(|mode| mode.as_str() == raw)
            .ok_or_else(|| GithubContextError::InvalidMode {
                mode: raw.to_string(),
            })
    }
}

/// Return true when `raw` names a registered mode exactly.
pub fn is_valid_mode(raw: &str) -> bool {
    raw.parse::<ModeName>().is_ok()
}
