//! Identity, routing keys and delivery records for the Mediator

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Slot a colleague occupies on the mediator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    First,
    Second,
}

impl Role {
    /// The slot a message from this role is routed to
    pub fn peer(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "one" | "1" => Ok(Self::First),
            "second" | "two" | "2" => Ok(Self::Second),
            _ => Err(format!("Unknown role: {}. Use: first or second", s)),
        }
    }
}

/// Generate a colleague ID from its label
///
/// Format: `{slug}.{uuid-v7}`, e.g. `colleague-one.01943000-...`
fn generate_id(label: &str) -> String {
    format!("{}.{}", slugify(label), uuid::Uuid::now_v7())
}

fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Identity of a colleague
///
/// Two colleagues built with the same label still get distinct IDs; the
/// mediator resolves senders by this value, never by label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColleagueId(String);

impl ColleagueId {
    /// Create a fresh ID for a colleague with the given label
    pub fn new(label: &str) -> Self {
        let id = generate_id(label);
        debug!(%id, "ColleagueId::new: called");
        Self(id)
    }

    #[cfg(test)]
    pub(crate) fn from_string(id: String) -> Self {
        Self(id)
    }

    /// Get the full ID string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColleagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One message as received by a colleague
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Label of the receiving colleague
    pub recipient: String,
    pub message: String,
}

impl Delivery {
    pub fn new(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} received: {}", self.recipient, self.message)
    }
}

/// Mediator counters for observability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediatorStats {
    /// Messages a peer accepted
    pub routed: u64,
    /// Sends that failed routing or delivery
    pub rejected: u64,
}
