//! PhishGuard gate - blocking-overlay state machine.
//!
//! This crate wires the gate together:
//! - eligibility check (top frame + trust list) before any network call
//! - overlay lifecycle driven as a state machine (Idle / Pending / Resolved)
//! - deterministic overlay rendering per transition
//! - fail-open handling when the classifier is unreachable
//! - lifecycle events for observers
//!
//! One gate instance serves exactly one page load; a new navigation always
//! starts a fresh instance bound to a fresh [`PageContext`].
//!
//! [`PageContext`]: phishguard_core_types::PageContext

pub mod config;
pub mod errors;
pub mod events;
pub mod machine;
pub mod render;
pub mod runner;

pub use config::GateConfig;
pub use errors::GateError;
pub use events::{GateEvent, GateEventBus};
pub use machine::GateStateMachine;
pub use runner::{capture_context, run_gate, PhishGate};
