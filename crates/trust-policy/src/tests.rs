use std::io::Write;

use phishguard_core_types::PageContext;
use tempfile::NamedTempFile;

use crate::defaults::default_trust_list;
use crate::filter::is_eligible;
use crate::loader::load_trust_list;
use crate::model::TrustList;

fn ctx(hostname: &str, top_frame: bool) -> PageContext {
    PageContext::new(format!("http://{hostname}/"), hostname, top_frame).unwrap()
}

#[test]
fn exact_match_is_trusted() {
    let list = TrustList::new(["google.com".to_string()]);
    assert!(list.contains_host("google.com"));
}

#[test]
fn suffix_match_is_anchored_at_a_dot() {
    let list = TrustList::new(["google.com".to_string()]);
    assert!(list.contains_host("www.google.com"));
    assert!(list.contains_host("maps.google.com"));
    // Substring containment must never be enough.
    assert!(!list.contains_host("notgoogle.com"));
    assert!(!list.contains_host("google.com.evil.tld"));
    assert!(!list.contains_host("evilgoogle.com"));
}

#[test]
fn matching_is_case_sensitive() {
    let list = TrustList::new(["google.com".to_string()]);
    assert!(!list.contains_host("Google.com"));
    assert!(!list.contains_host("WWW.GOOGLE.COM"));
}

#[test]
fn duplicates_and_blanks_are_dropped() {
    let list = TrustList::new(
        ["bing.com", "", "  ", "bing.com", "yahoo.com"]
            .map(String::from),
    );
    assert_eq!(list.entries(), ["bing.com", "yahoo.com"]);
}

#[test]
fn nested_frames_are_never_eligible() {
    let list = TrustList::empty();
    assert!(!is_eligible(&ctx("evil.example", false), &list));
}

#[test]
fn trusted_hosts_are_not_eligible() {
    let list = default_trust_list();
    assert!(!is_eligible(&ctx("www.google.com", true), &list));
    assert!(!is_eligible(&ctx("duckduckgo.com", true), &list));
}

#[test]
fn untrusted_top_frames_are_eligible() {
    let list = default_trust_list();
    assert!(is_eligible(&ctx("evil.example", true), &list));
    assert!(is_eligible(&ctx("notgoogle.com", true), &list));
}

#[test]
fn loader_falls_back_to_builtin_defaults() {
    let list = load_trust_list(None).unwrap();
    assert_eq!(list, default_trust_list());

    let missing = std::path::Path::new("/nonexistent/trust-policy.yaml");
    let list = load_trust_list(Some(missing)).unwrap();
    assert_eq!(list, default_trust_list());
}

#[test]
fn loader_extends_defaults_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "version: 1\ntrusted_hosts:\n  - intranet.example\n  - google.com"
    )
    .unwrap();

    let list = load_trust_list(Some(file.path())).unwrap();
    assert!(list.contains_host("intranet.example"));
    assert!(list.contains_host("www.bing.com"));
    // google.com was already builtin; no duplicate entry.
    assert_eq!(
        list.len(),
        default_trust_list().len() + 1
    );
}

#[test]
fn loader_can_replace_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "version: 1\nreplace_defaults: true\ntrusted_hosts:\n  - intranet.example"
    )
    .unwrap();

    let list = load_trust_list(Some(file.path())).unwrap();
    assert_eq!(list.entries(), ["intranet.example"]);
    assert!(!list.contains_host("google.com"));
}

#[test]
fn loader_rejects_unknown_version() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "version: 9\ntrusted_hosts: []").unwrap();
    assert!(load_trust_list(Some(file.path())).is_err());
}
