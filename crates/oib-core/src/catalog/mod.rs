//! Vendor catalog: typed manifest model and navigation-path resolution.
//!
//! The catalog is trusted structured data fetched as JSON (see
//! `crate::manifest`); this module gives it a typed shape and explicit
//! lookup functions that fail with `CatalogError` instead of silently
//! returning nothing.

mod model;
mod resolve;

pub use model::{Distributor, Manifest, OsEntry};

use thiserror::Error;

use crate::listing::ArchiveType;

/// Resolved addressing data for one listing fetch: where to get the page,
/// how to read it, and which name filters apply. Built per navigation path
/// and passed by value; there is no ambient filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSource {
    /// Full listing URL (distributor base plus the OS entry's fragment).
    /// Ends in a path separator so file names append directly.
    pub base_url: String,
    /// Listing format, selecting the parser adapter.
    pub archive_type: ArchiveType,
    /// Lowercase substrings every candidate filename must contain.
    pub name_filters: Vec<String>,
}

/// Lookup failure while resolving a navigation path against the manifest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown board: {0}")]
    BoardNotFound(String),
    #[error("unknown distributor: {0}")]
    DistributorNotFound(String),
    #[error("distributor {distributor} does not serve board {board}")]
    BoardNotServed { distributor: String, board: String },
    #[error("no OS entry '{os}' for board {board} at {distributor}")]
    OsNotFound {
        distributor: String,
        board: String,
        os: String,
    },
}
