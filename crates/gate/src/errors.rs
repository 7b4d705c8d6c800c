//! Error types for the gate state machine.

use phishguard_core_types::GuardError;
use phishguard_host_bridge::BridgeError;
use thiserror::Error;

/// Gate error enumeration.
///
/// Classifier unavailability is not represented here: it resolves to
/// `Verdict::Unreachable` and takes the normal fail-open transition. These
/// errors cover misuse of the machine and host-bridge faults only.
#[derive(Debug, Error, Clone)]
pub enum GateError {
    /// Transition attempted from a state that does not permit it.
    #[error("invalid transition from {from}: {event}")]
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },

    /// Host bridge refused an overlay operation.
    #[error("bridge error: {0}")]
    Bridge(#[from] BridgeError),
}

impl From<GateError> for GuardError {
    fn from(value: GateError) -> Self {
        GuardError::new(value.to_string())
    }
}
