//! Gate entry point.
//!
//! No ambient globals: the page context, configuration, host bridge and
//! classifier client are all injected, so the whole gate runs under test
//! without a real browser.

use std::sync::Arc;

use phishguard_core_types::{GateState, GuardError, PageContext, Verdict};
use phishguard_host_bridge::HostBridge;
use phishguard_trust_policy::is_eligible;
use phishguard_verdict_client::ClassifierClient;
use tokio::sync::broadcast;
use tokio::time::timeout;
use tracing::debug;

use crate::config::GateConfig;
use crate::errors::GateError;
use crate::events::{GateEventBus, SkipReason};
use crate::machine::GateStateMachine;

const EVENT_BUS_CAPACITY: usize = 16;

/// One configured gate, good for any number of page loads; each `run` binds
/// a fresh state machine to the given context, so no state leaks across
/// pages.
pub struct PhishGate {
    config: GateConfig,
    bridge: Arc<dyn HostBridge>,
    client: Arc<dyn ClassifierClient>,
    events: GateEventBus,
}

impl PhishGate {
    pub fn new(
        config: GateConfig,
        bridge: Arc<dyn HostBridge>,
        client: Arc<dyn ClassifierClient>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUS_CAPACITY);
        Self {
            config,
            bridge,
            client,
            events,
        }
    }

    /// Lifecycle event bus; subscribe before `run` to observe every event.
    pub fn events(&self) -> &GateEventBus {
        &self.events
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Run the gate for one page load to its terminal state.
    ///
    /// Ineligible pages return `Idle` with zero overlay work. Eligible pages
    /// go `Pending` (overlay mounted), then `Resolved` once the single
    /// classifier request settles. The request is additionally bounded by
    /// the configured timeout, so `Pending` cannot outlive it even for a
    /// client that hangs without erroring.
    pub async fn run(&self, ctx: PageContext) -> Result<GateState, GateError> {
        let mut machine = GateStateMachine::new(self.bridge.clone(), self.events.clone());

        if !is_eligible(&ctx, &self.config.trust_list) {
            let reason = if ctx.is_top_frame {
                SkipReason::TrustedHost
            } else {
                SkipReason::NestedFrame
            };
            machine.skip(&ctx, reason)?;
            return Ok(machine.state().clone());
        }

        machine.begin_scan(&ctx).await?;

        let verdict = match timeout(
            self.config.request_timeout(),
            self.client.request_verdict(&ctx),
        )
        .await
        {
            Ok(verdict) => verdict,
            Err(_) => Verdict::unreachable("classifier request timed out"),
        };

        machine.resolve(verdict, &self.config).await?;
        debug!(state = machine.state().name(), "gate finished");
        Ok(machine.state().clone())
    }
}

/// Capture an immutable page context from the host bridge.
pub fn capture_context(bridge: &dyn HostBridge) -> Result<PageContext, GuardError> {
    PageContext::new(
        bridge.current_url(),
        bridge.hostname(),
        bridge.is_top_level_frame(),
    )
}

/// Convenience entry point: build a gate and run it for one page load.
pub async fn run_gate(
    ctx: PageContext,
    config: GateConfig,
    bridge: Arc<dyn HostBridge>,
    client: Arc<dyn ClassifierClient>,
) -> Result<GateState, GateError> {
    PhishGate::new(config, bridge, client).run(ctx).await
}
