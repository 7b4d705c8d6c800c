//! Gate state machine.
//!
//! Owns the overlay lifecycle for exactly one page load. Transitions:
//!
//! ```text
//! Idle --eligible--> Pending --Safe--------> Resolved(Safe)        (overlay removed after grace delay)
//!                    Pending --Unsafe------> Resolved(Unsafe)      (overlay blocks for page lifetime)
//!                    Pending --Unreachable-> Resolved(Unreachable) (fail open, overlay removed after delay)
//! ```
//!
//! `Resolved` is terminal; an ineligible page never leaves `Idle` and touches
//! no DOM. All transitions run on one logical control path, so no locking is
//! needed within a page.

use std::sync::Arc;

use phishguard_core_types::{GateId, GateState, PageContext, Verdict};
use phishguard_host_bridge::{HostBridge, OverlayHandle};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::GateConfig;
use crate::errors::GateError;
use crate::events::{GateEvent, GateEventBus, SkipReason};
use crate::render::{analyzing_overlay, overlay_for_verdict};

pub struct GateStateMachine {
    id: GateId,
    state: GateState,
    bridge: Arc<dyn HostBridge>,
    events: GateEventBus,
    overlay: Option<OverlayHandle>,
}

impl GateStateMachine {
    pub fn new(bridge: Arc<dyn HostBridge>, events: GateEventBus) -> Self {
        Self {
            id: GateId::new(),
            state: GateState::Idle,
            bridge,
            events,
            overlay: None,
        }
    }

    pub fn id(&self) -> &GateId {
        &self.id
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// Record an ineligible page. Valid only in `Idle`; the machine stays
    /// `Idle` and performs no overlay work, so the page loads unimpeded.
    pub fn skip(&mut self, ctx: &PageContext, reason: SkipReason) -> Result<(), GateError> {
        if self.state != GateState::Idle {
            return Err(GateError::InvalidTransition {
                from: self.state.name(),
                event: "skip",
            });
        }
        info!(host = %ctx.hostname, reason = reason.name(), "page not eligible for scan");
        let _ = self.events.send(GateEvent::GateSkipped {
            gate: self.id.clone(),
            hostname: ctx.hostname.clone(),
            reason,
        });
        Ok(())
    }

    /// `Idle -> Pending`: mount the analyzing overlay ahead of the
    /// classifier request.
    pub async fn begin_scan(&mut self, ctx: &PageContext) -> Result<(), GateError> {
        if self.state != GateState::Idle {
            return Err(GateError::InvalidTransition {
                from: self.state.name(),
                event: "begin_scan",
            });
        }
        let handle = self.bridge.mount_overlay(analyzing_overlay()).await?;
        self.overlay = Some(handle);
        self.state = GateState::Pending;
        info!(url = %ctx.url, "scan started, overlay mounted");
        let _ = self.events.send(GateEvent::ScanStarted {
            gate: self.id.clone(),
            url: ctx.url.clone(),
        });
        Ok(())
    }

    /// `Pending -> Resolved(verdict)`: render the verdict on the overlay and
    /// finish its lifecycle.
    ///
    /// Safe and Unreachable remove the overlay after their configured display
    /// delays (Unreachable is the fail-open branch); Unsafe mutates it into a
    /// non-dismissible block that outlives the call. The terminal state is
    /// recorded before any delay, so a page teardown mid-delay observes
    /// `Resolved` and leaves overlay reclamation to the host.
    pub async fn resolve(
        &mut self,
        verdict: Verdict,
        config: &GateConfig,
    ) -> Result<(), GateError> {
        if self.state != GateState::Pending {
            return Err(GateError::InvalidTransition {
                from: self.state.name(),
                event: "resolve",
            });
        }
        let handle = self.overlay.take().ok_or(GateError::InvalidTransition {
            from: "pending",
            event: "resolve without overlay",
        })?;

        info!(verdict = verdict.name(), "verdict received");
        let _ = self.events.send(GateEvent::VerdictReceived {
            gate: self.id.clone(),
            verdict: verdict.clone(),
        });

        self.bridge
            .update_overlay(&handle, overlay_for_verdict(&verdict))
            .await?;
        self.state = GateState::Resolved(verdict.clone());

        match verdict {
            Verdict::Safe => {
                sleep(config.safe_display_delay()).await;
                self.release_overlay(handle).await?;
            }
            Verdict::Unsafe => {
                // Blocking is permanent for this page load; the overlay is
                // only reclaimed when the user navigates away.
                warn!("page blocked as phishing");
                self.overlay = Some(handle);
            }
            Verdict::Unreachable { ref reason } => {
                warn!(reason = %reason, "classifier unavailable, failing open");
                sleep(config.unreachable_display_delay()).await;
                self.release_overlay(handle).await?;
            }
        }
        Ok(())
    }

    async fn release_overlay(&mut self, handle: OverlayHandle) -> Result<(), GateError> {
        self.bridge.unmount_overlay(handle).await?;
        let _ = self.events.send(GateEvent::OverlayReleased {
            gate: self.id.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishguard_host_bridge::InMemoryBridge;
    use tokio::sync::broadcast;

    fn ctx() -> PageContext {
        PageContext::new("http://evil.example/login", "evil.example", true).unwrap()
    }

    fn machine_with_bridge() -> (GateStateMachine, Arc<InMemoryBridge>) {
        let bridge = Arc::new(InMemoryBridge::top_frame(
            "http://evil.example/login",
            "evil.example",
        ));
        let (bus, _rx) = broadcast::channel(16);
        (GateStateMachine::new(bridge.clone(), bus), bridge)
    }

    #[tokio::test]
    async fn begin_scan_moves_idle_to_pending() {
        let (mut machine, bridge) = machine_with_bridge();
        assert_eq!(*machine.state(), GateState::Idle);

        machine.begin_scan(&ctx()).await.unwrap();
        assert_eq!(*machine.state(), GateState::Pending);
        assert!(bridge.mounted_overlay().is_some());
    }

    #[tokio::test]
    async fn begin_scan_twice_is_an_invalid_transition() {
        let (mut machine, _bridge) = machine_with_bridge();
        machine.begin_scan(&ctx()).await.unwrap();
        let err = machine.begin_scan(&ctx()).await.unwrap_err();
        assert!(matches!(err, GateError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn resolve_requires_pending() {
        let (mut machine, _bridge) = machine_with_bridge();
        let err = machine
            .resolve(Verdict::Safe, &GateConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GateError::InvalidTransition { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn resolved_is_terminal() {
        let (mut machine, _bridge) = machine_with_bridge();
        machine.begin_scan(&ctx()).await.unwrap();
        machine
            .resolve(Verdict::Safe, &GateConfig::default())
            .await
            .unwrap();
        assert!(machine.state().is_terminal());

        let err = machine
            .resolve(Verdict::Unsafe, &GateConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GateError::InvalidTransition { .. }));
        let err = machine.begin_scan(&ctx()).await.unwrap_err();
        assert!(matches!(err, GateError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn skip_keeps_the_machine_idle() {
        let (mut machine, bridge) = machine_with_bridge();
        machine.skip(&ctx(), SkipReason::TrustedHost).unwrap();
        assert_eq!(*machine.state(), GateState::Idle);
        assert_eq!(bridge.mount_count(), 0);
    }
}
