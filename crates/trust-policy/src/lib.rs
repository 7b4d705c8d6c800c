//! Trust list and scan-eligibility policy.
//!
//! Decides, before any network call, whether a page should be scanned at all:
//! nested frames are never scanned, and hostnames on the trust list are exempt.
//! The trust list is static for the process lifetime; it is loaded once at
//! initialization from builtin defaults plus an optional YAML file.

pub mod defaults;
pub mod errors;
pub mod filter;
pub mod loader;
pub mod model;

pub use defaults::default_trust_list;
pub use errors::PolicyError;
pub use filter::is_eligible;
pub use loader::load_trust_list;
pub use model::{TrustList, TrustPolicyFile};

#[cfg(test)]
mod tests;
