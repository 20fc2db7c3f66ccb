//! Serde model of the remote image-address manifest.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::listing::ArchiveType;

/// Root manifest: board display names plus per-distributor address trees.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Board key → display name.
    #[serde(default)]
    pub boards: BTreeMap<String, String>,
    /// Distributor name → mirror addresses.
    pub distributors: BTreeMap<String, Distributor>,
}

/// One distributor: a mirror base URL, its listing format, and the boards
/// it serves. The base URL ends in a path separator by convention.
#[derive(Debug, Deserialize)]
pub struct Distributor {
    pub base_url: String,
    pub archive_type: ArchiveType,
    /// Board key → OS key → entry.
    #[serde(default)]
    pub boards: BTreeMap<String, BTreeMap<String, OsEntry>>,
}

/// An OS row under a board: either a bare URL fragment, or a fragment with
/// required-substring name filters (comma-separated in the manifest).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OsEntry {
    Path(String),
    Detailed {
        url: String,
        #[serde(default)]
        name_filters: String,
    },
}

impl OsEntry {
    /// URL fragment appended to the distributor's base URL.
    pub fn url_fragment(&self) -> &str {
        match self {
            OsEntry::Path(url) => url,
            OsEntry::Detailed { url, .. } => url,
        }
    }

    /// Name filters as lowercase substrings; empty for bare entries.
    pub fn name_filters(&self) -> Vec<String> {
        match self {
            OsEntry::Path(_) => Vec::new(),
            OsEntry::Detailed { name_filters, .. } => name_filters
                .split(',')
                .map(|f| f.trim().to_lowercase())
                .filter(|f| !f.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
pub(super) const MANIFEST_FIXTURE: &str = r#"{
    "boards": {
        "C4": "ODROID-C4",
        "N2": "ODROID-N2",
        "XU4": "ODROID-XU4"
    },
    "distributors": {
        "HARDKERNEL": {
            "base_url": "https://dn.odroid.com/",
            "archive_type": "apache",
            "boards": {
                "C4": {
                    "UBUNTU": {
                        "url": "S905X3/ODROID-C4/Ubuntu/",
                        "name_filters": "ubuntu,minimal"
                    },
                    "ANDROID_PIE_64": "S905X3/ODROID-C4/Android/pie/64/"
                },
                "N2": {
                    "UBUNTU": "S922X/ODROID-N2/Ubuntu/"
                }
            }
        },
        "THIRD_PARTY": {
            "base_url": "https://github.com/example/odroid-images/releases",
            "archive_type": "github",
            "boards": {
                "C4": {
                    "COMMUNITY": ""
                }
            }
        }
    }
}"#;
