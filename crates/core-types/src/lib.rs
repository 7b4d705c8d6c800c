//! Shared primitives for the PhishGuard gate crates.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Shared error type for the gate crates.
#[derive(Debug, Error, Clone)]
pub enum GuardError {
    #[error("{message}")]
    Message { message: String },
}

impl GuardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

/// Identifier for one gate instance (one per page load).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GateId(pub String);

impl GateId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for GateId {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of the page a gate instance is bound to.
///
/// Captured once per page load from the host bridge and never mutated;
/// a new navigation always gets a fresh context.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageContext {
    /// Absolute URL of the page.
    pub url: String,

    /// Hostname component of the URL.
    pub hostname: String,

    /// Whether this is the outermost browsing context.
    pub is_top_frame: bool,
}

impl PageContext {
    /// Build a context, rejecting empty url/hostname.
    pub fn new(
        url: impl Into<String>,
        hostname: impl Into<String>,
        is_top_frame: bool,
    ) -> Result<Self, GuardError> {
        let url = url.into();
        let hostname = hostname.into();
        if url.is_empty() {
            return Err(GuardError::new("page context requires a non-empty url"));
        }
        if hostname.is_empty() {
            return Err(GuardError::new(
                "page context requires a non-empty hostname",
            ));
        }
        Ok(Self {
            url,
            hostname,
            is_top_frame,
        })
    }
}

impl fmt::Display for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "url={} host={} top_frame={}",
            self.url, self.hostname, self.is_top_frame
        )
    }
}

/// Binary safety determination for a URL, with classifier unavailability
/// folded in as its own outcome rather than an error.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// Classifier reported the designated safe token.
    Safe,

    /// Classifier reported any other status token.
    Unsafe,

    /// Classifier could not be reached or its response could not be read.
    Unreachable { reason: String },
}

impl Verdict {
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::Unreachable {
            reason: reason.into(),
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }

    /// True when the verdict keeps the page blocked for its lifetime.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Verdict::Unsafe)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Unsafe => "unsafe",
            Verdict::Unreachable { .. } => "unreachable",
        }
    }
}

/// Lifecycle state of one gate instance.
///
/// `Idle` is the state before (or instead of) scanning; `Resolved` is
/// terminal for the page's lifetime.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GateState {
    /// No scan started; the page was ineligible or the gate has not run.
    Idle,

    /// Scan in flight; the overlay is mounted.
    Pending,

    /// Scan settled; no further transitions.
    Resolved(Verdict),
}

impl GateState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GateState::Resolved(_))
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            GateState::Resolved(verdict) => Some(verdict),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GateState::Idle => "idle",
            GateState::Pending => "pending",
            GateState::Resolved(_) => "resolved",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_context_rejects_empty_fields() {
        assert!(PageContext::new("", "example.com", true).is_err());
        assert!(PageContext::new("http://example.com/", "", true).is_err());
        let ctx = PageContext::new("http://example.com/", "example.com", true).unwrap();
        assert!(ctx.is_top_frame);
    }

    #[test]
    fn verdict_classification_helpers() {
        assert!(Verdict::Safe.is_safe());
        assert!(Verdict::Unsafe.is_blocking());
        let unreachable = Verdict::unreachable("connection refused");
        assert!(!unreachable.is_safe());
        assert!(!unreachable.is_blocking());
        assert_eq!(unreachable.name(), "unreachable");
    }

    #[test]
    fn resolved_is_the_only_terminal_state() {
        assert!(!GateState::Idle.is_terminal());
        assert!(!GateState::Pending.is_terminal());
        let resolved = GateState::Resolved(Verdict::Safe);
        assert!(resolved.is_terminal());
        assert_eq!(resolved.verdict(), Some(&Verdict::Safe));
    }
}
