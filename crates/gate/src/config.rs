//! Static gate configuration.

use std::time::Duration;

use phishguard_trust_policy::{default_trust_list, TrustList};
use phishguard_verdict_client::ClassifierConfig;
use serde::{Deserialize, Serialize};

/// Configuration injected into the gate at startup. Static for the process
/// lifetime; nothing here is mutated at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateConfig {
    /// Classifier endpoint receiving `POST {"url": ...}`.
    pub classifier_endpoint: String,

    /// Hostnames exempt from scanning.
    pub trust_list: TrustList,

    /// How long the safe confirmation stays visible before the overlay is
    /// removed. Long enough to perceive, short enough not to interrupt.
    pub safe_display_delay_ms: u64,

    /// How long the "could not verify" notice stays visible before the
    /// overlay is removed and the page is released (fail-open branch).
    pub unreachable_display_delay_ms: u64,

    /// Hard bound on the classifier request so Pending can never outlive it.
    pub request_timeout_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            classifier_endpoint: "http://127.0.0.1:5000/analyze".to_string(),
            trust_list: default_trust_list(),
            safe_display_delay_ms: 500,
            unreachable_display_delay_ms: 2_000,
            request_timeout_ms: 5_000,
        }
    }
}

impl GateConfig {
    pub fn with_trust_list(mut self, trust_list: TrustList) -> Self {
        self.trust_list = trust_list;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.classifier_endpoint = endpoint.into();
        self
    }

    pub fn safe_display_delay(&self) -> Duration {
        Duration::from_millis(self.safe_display_delay_ms)
    }

    pub fn unreachable_display_delay(&self) -> Duration {
        Duration::from_millis(self.unreachable_display_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Classifier-transport view of this config.
    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            endpoint: self.classifier_endpoint.clone(),
            request_timeout: self.request_timeout(),
        }
    }
}
