use phishguard_core_types::PageContext;
use tracing::debug;

use crate::model::TrustList;

/// Pure eligibility predicate, evaluated once per page load.
///
/// A page is scanned only when it is the top-level frame and its hostname is
/// not on the trust list. Ineligibility is a deliberate no-op outcome, not an
/// error. No result is memoized across pages.
pub fn is_eligible(ctx: &PageContext, trust_list: &TrustList) -> bool {
    if !ctx.is_top_frame {
        debug!(host = %ctx.hostname, "nested frame, skipping scan");
        return false;
    }
    if trust_list.contains_host(&ctx.hostname) {
        debug!(host = %ctx.hostname, "trusted host, skipping scan");
        return false;
    }
    true
}
