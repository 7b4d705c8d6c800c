//! Overlay rendering.
//!
//! Pure functions from gate transitions to overlay content: the same verdict
//! always produces the same visible end state.

use phishguard_core_types::Verdict;
use phishguard_host_bridge::{OverlayNode, OverlaySeverity};

/// Overlay shown while the verdict is pending.
pub fn analyzing_overlay() -> OverlayNode {
    OverlayNode::new(OverlaySeverity::Info, "Analyzing Website Safety...")
        .with_detail("Please wait while we scan this URL.")
}

/// Overlay content for a settled verdict.
pub fn overlay_for_verdict(verdict: &Verdict) -> OverlayNode {
    match verdict {
        Verdict::Safe => OverlayNode::new(OverlaySeverity::Success, "Website is Safe."),
        Verdict::Unsafe => OverlayNode::new(OverlaySeverity::Danger, "WARNING: PHISHING DETECTED!")
            .with_detail(
                "This site has been identified as a phishing scam. Access is blocked.",
            )
            .non_dismissible(),
        Verdict::Unreachable { .. } => {
            OverlayNode::new(OverlaySeverity::Warning, "Analysis Failed (Server Offline?)")
        }
    }
}
