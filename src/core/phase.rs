//! The three phases of an asynchronous operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle moment an action belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Loading,
    Success,
    Error,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Loading, Phase::Success, Phase::Error];

    /// Name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// True for the two phases that settle an operation.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
