use std::fs;
use std::path::Path;

use tracing::debug;

use crate::defaults::default_trust_list;
use crate::errors::PolicyError;
use crate::model::{TrustList, TrustPolicyFile};

const SUPPORTED_VERSION: u32 = 1;

/// Load the trust list: builtin defaults, optionally extended or replaced
/// by a YAML policy file. A missing path falls back to the defaults.
pub fn load_trust_list(path: Option<&Path>) -> Result<TrustList, PolicyError> {
    let mut list = default_trust_list();

    let Some(path) = path else {
        return Ok(list);
    };
    if !path.exists() {
        debug!(path = %path.display(), "trust policy file absent, using builtin list");
        return Ok(list);
    }

    let content = fs::read_to_string(path).map_err(|err| PolicyError::Io(err.to_string()))?;
    let file: TrustPolicyFile =
        serde_yaml::from_str(&content).map_err(|err| PolicyError::Invalid(err.to_string()))?;
    if file.version != SUPPORTED_VERSION {
        return Err(PolicyError::UnsupportedVersion(file.version));
    }

    if file.replace_defaults {
        list = TrustList::new(file.trusted_hosts);
    } else {
        list.extend(file.trusted_hosts);
    }
    debug!(entries = list.len(), "trust list loaded");
    Ok(list)
}
