use phishguard_core_types::GuardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid trust policy: {0}")]
    Invalid(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("unsupported trust policy version: {0}")]
    UnsupportedVersion(u32),
}

impl From<PolicyError> for GuardError {
    fn from(value: PolicyError) -> Self {
        GuardError::new(value.to_string())
    }
}
