use crate::model::TrustList;

/// Builtin trust list: major search engines, exempted so the gate never
/// interrupts a user mid-search. The `www.` entries are redundant under
/// suffix matching but kept so the list reads as the operator expects.
pub fn default_trust_list() -> TrustList {
    TrustList::new(
        [
            "google.com",
            "www.google.com",
            "bing.com",
            "www.bing.com",
            "yahoo.com",
            "www.yahoo.com",
            "duckduckgo.com",
            "baidu.com",
        ]
        .map(String::from),
    )
}
