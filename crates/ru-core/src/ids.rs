//! Stable agent identifiers.
//!
//! Agents are owned by the host simulation, which hands out string load IDs
//! (`"Thing_Human1234"` and the like).  The director never invents IDs; it
//! only stores and compares them, so `AgentId` is a thin `String` newtype that
//! keeps the IDs from being confused with names or other strings.

use std::borrow::Borrow;
use std::fmt;

/// The host simulation's stable unique ID for one agent.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        AgentId(id.into())
    }

    /// An empty ID never refers to a real agent.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        AgentId(s.to_owned())
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        AgentId(s)
    }
}

impl Borrow<str> for AgentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
