use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{ASSISTANT_ALIASES, USER_ALIASES};

/// Canonical speaker of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Normalize a raw speaker label.
    ///
    /// Matching is case-insensitive after trimming. Unrecognized labels
    /// become [`Role::User`]: an unlabeled line is assumed to be human-authored
    /// rather than discarded.
    pub fn from_label(label: &str) -> Role {
        Role::recognize(label).unwrap_or(Role::User)
    }

    /// Like [`Role::from_label`], but `None` for labels outside both alias sets.
    pub fn recognize(label: &str) -> Option<Role> {
        let label = label.trim().to_lowercase();
        if USER_ALIASES.contains(&label.as_str()) {
            Some(Role::User)
        } else if ASSISTANT_ALIASES.contains(&label.as_str()) {
            Some(Role::Assistant)
        } else {
            None
        }
    }

    /// The role expected to speak next under strict alternation.
    pub fn other(self) -> Role {
        match self {
            Role::User => Role::Assistant,
            Role::Assistant => Role::User,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
