//! Gate lifecycle events for observers.

use phishguard_core_types::{GateId, Verdict};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event bus the gate publishes on; observers subscribe via
/// `bus.subscribe()`. Send failures (no subscribers) are ignored.
pub type GateEventBus = broadcast::Sender<GateEvent>;

/// Events emitted across one gate lifetime, in order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GateEvent {
    /// Eligibility check declined the page; nothing else will happen.
    GateSkipped { gate: GateId, hostname: String, reason: SkipReason },

    /// Overlay mounted and the classifier request is about to go out.
    ScanStarted { gate: GateId, url: String },

    /// Classifier settled (or failed over to `Unreachable`).
    VerdictReceived { gate: GateId, verdict: Verdict },

    /// Overlay removed; the page underneath is usable again.
    OverlayReleased { gate: GateId },
}

/// Why a page was not scanned.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkipReason {
    /// Gate was invoked inside a nested frame.
    NestedFrame,

    /// Hostname matched the trust list.
    TrustedHost,
}

impl SkipReason {
    pub fn name(&self) -> &'static str {
        match self {
            SkipReason::NestedFrame => "nested_frame",
            SkipReason::TrustedHost => "trusted_host",
        }
    }
}
