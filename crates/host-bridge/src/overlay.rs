//! Overlay content model.
//!
//! Describes what the overlay says, not how it looks; styling belongs to the
//! host environment.

use serde::{Deserialize, Serialize};

/// Visual weight of the overlay, mapped to host styling.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OverlaySeverity {
    /// Neutral progress indicator.
    Info,
    /// Positive confirmation.
    Success,
    /// Non-blocking caution notice.
    Warning,
    /// Blocking danger state.
    Danger,
}

impl OverlaySeverity {
    pub fn name(&self) -> &'static str {
        match self {
            OverlaySeverity::Info => "info",
            OverlaySeverity::Success => "success",
            OverlaySeverity::Warning => "warning",
            OverlaySeverity::Danger => "danger",
        }
    }
}

/// Content of the gate overlay.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverlayNode {
    pub severity: OverlaySeverity,

    /// Headline shown to the user.
    pub title: String,

    /// Secondary explanation line.
    pub detail: Option<String>,

    /// Whether the host may let the user dismiss the overlay. Blocking
    /// warnings are never dismissible.
    pub dismissible: bool,
}

impl OverlayNode {
    pub fn new(severity: OverlaySeverity, title: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            detail: None,
            dismissible: true,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn non_dismissible(mut self) -> Self {
        self.dismissible = false;
        self
    }
}
