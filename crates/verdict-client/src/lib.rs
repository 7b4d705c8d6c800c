//! Remote classifier client.
//!
//! Sends exactly one analysis request per page to the configured classifier
//! endpoint and normalizes whatever comes back into a [`Verdict`]. The
//! classifier being down is a normal condition, not an error: every transport
//! or parse failure resolves to `Verdict::Unreachable` so the gate can fail
//! open instead of crashing the host page.

pub mod http;

use async_trait::async_trait;
use phishguard_core_types::{PageContext, Verdict};
use thiserror::Error;

pub use http::{ClassifierConfig, HttpClassifierClient};

/// Status token the classifier uses for a clean URL. Every other token is a
/// positive phishing signal.
pub const SAFE_STATUS_TOKEN: &str = "SAFE";

/// Errors raised while constructing a client. Requests themselves never
/// error; they resolve to `Verdict::Unreachable`.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid classifier config: {0}")]
    InvalidConfig(String),
}

/// Seam between the gate and the classifier transport.
#[async_trait]
pub trait ClassifierClient: Send + Sync {
    /// Classify the page's URL. Called at most once per page; never retried
    /// and never cached across page loads.
    async fn request_verdict(&self, ctx: &PageContext) -> Verdict;
}

/// Reduce a classifier status token to the binary verdict.
pub fn verdict_from_status(status: &str) -> Verdict {
    if status == SAFE_STATUS_TOKEN {
        Verdict::Safe
    } else {
        Verdict::Unsafe
    }
}
