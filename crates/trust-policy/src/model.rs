use serde::{Deserialize, Serialize};

/// Ordered set of hostnames exempt from scanning.
///
/// Matching is case-sensitive and anchored: a hostname is trusted when it
/// equals an entry exactly or ends with `".{entry}"`. A trusted name can
/// therefore never be satisfied by substring containment
/// (`notgoogle.com.evil.tld` does not match `google.com`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrustList {
    entries: Vec<String>,
}

impl TrustList {
    /// Build a list from hostname entries, dropping empties and duplicates
    /// while preserving first-seen order.
    pub fn new(entries: impl IntoIterator<Item = String>) -> Self {
        let mut seen = Vec::new();
        for entry in entries {
            let entry = entry.trim().to_string();
            if entry.is_empty() || seen.contains(&entry) {
                continue;
            }
            seen.push(entry);
        }
        Self { entries: seen }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact-or-suffix membership test against a hostname.
    pub fn contains_host(&self, hostname: &str) -> bool {
        self.entries.iter().any(|entry| {
            hostname == entry
                || (hostname.len() > entry.len()
                    && hostname.ends_with(entry.as_str())
                    && hostname.as_bytes()[hostname.len() - entry.len() - 1] == b'.')
        })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Append further entries, keeping existing order and dedup rules.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = String>) {
        for entry in entries {
            let entry = entry.trim().to_string();
            if entry.is_empty() || self.entries.contains(&entry) {
                continue;
            }
            self.entries.push(entry);
        }
    }
}

impl From<Vec<String>> for TrustList {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

/// On-disk trust policy document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrustPolicyFile {
    pub version: u32,

    /// Hostnames to trust in addition to the builtin list.
    pub trusted_hosts: Vec<String>,

    /// When true, the file list replaces the builtin defaults instead of
    /// extending them.
    #[serde(default)]
    pub replace_defaults: bool,
}
