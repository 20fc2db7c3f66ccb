//! Catalog lookups: board → distributor → OS → listing source.

use super::model::Manifest;
use super::{CatalogError, ListingSource};

impl Manifest {
    /// Board keys with display names, sorted by key.
    pub fn board_list(&self) -> Vec<(&str, &str)> {
        self.boards
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_str()))
            .collect()
    }

    /// Distributors that serve the given board.
    pub fn distributors_for_board(&self, board: &str) -> Result<Vec<&str>, CatalogError> {
        if !self.boards.contains_key(board) {
            return Err(CatalogError::BoardNotFound(board.to_string()));
        }
        Ok(self
            .distributors
            .iter()
            .filter(|(_, dist)| dist.boards.contains_key(board))
            .map(|(name, _)| name.as_str())
            .collect())
    }

    /// OS entry names a distributor offers for a board.
    pub fn os_names(&self, board: &str, distributor: &str) -> Result<Vec<&str>, CatalogError> {
        let dist = self
            .distributors
            .get(distributor)
            .ok_or_else(|| CatalogError::DistributorNotFound(distributor.to_string()))?;
        let entries = dist
            .boards
            .get(board)
            .ok_or_else(|| CatalogError::BoardNotServed {
                distributor: distributor.to_string(),
                board: board.to_string(),
            })?;
        Ok(entries.keys().map(String::as_str).collect())
    }

    /// Resolve a full navigation path into the addressing data for one
    /// listing fetch. Name filters are rebuilt from the entry every time;
    /// nothing carries over from a previous resolution.
    pub fn resolve(
        &self,
        board: &str,
        distributor: &str,
        os: &str,
    ) -> Result<ListingSource, CatalogError> {
        let dist = self
            .distributors
            .get(distributor)
            .ok_or_else(|| CatalogError::DistributorNotFound(distributor.to_string()))?;
        let entries = dist
            .boards
            .get(board)
            .ok_or_else(|| CatalogError::BoardNotServed {
                distributor: distributor.to_string(),
                board: board.to_string(),
            })?;
        let entry = entries.get(os).ok_or_else(|| CatalogError::OsNotFound {
            distributor: distributor.to_string(),
            board: board.to_string(),
            os: os.to_string(),
        })?;

        Ok(ListingSource {
            base_url: format!("{}{}", dist.base_url, entry.url_fragment()),
            archive_type: dist.archive_type,
            name_filters: entry.name_filters(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::MANIFEST_FIXTURE;
    use super::*;
    use crate::listing::ArchiveType;

    fn manifest() -> Manifest {
        serde_json::from_str(MANIFEST_FIXTURE).unwrap()
    }

    #[test]
    fn board_list_pairs_keys_and_names() {
        let m = manifest();
        let boards = m.board_list();
        assert!(boards.contains(&("C4", "ODROID-C4")));
        assert!(boards.contains(&("XU4", "ODROID-XU4")));
    }

    #[test]
    fn distributors_for_served_board() {
        let m = manifest();
        assert_eq!(
            m.distributors_for_board("C4").unwrap(),
            ["HARDKERNEL", "THIRD_PARTY"]
        );
        assert_eq!(m.distributors_for_board("N2").unwrap(), ["HARDKERNEL"]);
    }

    #[test]
    fn board_without_distributors_is_empty_not_an_error() {
        let m = manifest();
        assert!(m.distributors_for_board("XU4").unwrap().is_empty());
    }

    #[test]
    fn unknown_board_fails() {
        let m = manifest();
        assert_eq!(
            m.distributors_for_board("H2").unwrap_err(),
            CatalogError::BoardNotFound("H2".to_string())
        );
    }

    #[test]
    fn os_names_for_pair() {
        let m = manifest();
        assert_eq!(
            m.os_names("C4", "HARDKERNEL").unwrap(),
            ["ANDROID_PIE_64", "UBUNTU"]
        );
    }

    #[test]
    fn os_names_unknown_distributor_fails() {
        let m = manifest();
        assert_eq!(
            m.os_names("C4", "NOBODY").unwrap_err(),
            CatalogError::DistributorNotFound("NOBODY".to_string())
        );
    }

    #[test]
    fn os_names_unserved_board_fails() {
        let m = manifest();
        assert_eq!(
            m.os_names("N2", "THIRD_PARTY").unwrap_err(),
            CatalogError::BoardNotServed {
                distributor: "THIRD_PARTY".to_string(),
                board: "N2".to_string(),
            }
        );
    }

    #[test]
    fn resolve_detailed_entry() {
        let m = manifest();
        let source = m.resolve("C4", "HARDKERNEL", "UBUNTU").unwrap();
        assert_eq!(
            source.base_url,
            "https://dn.odroid.com/S905X3/ODROID-C4/Ubuntu/"
        );
        assert_eq!(source.archive_type, ArchiveType::Apache);
        assert_eq!(source.name_filters, ["ubuntu", "minimal"]);
    }

    #[test]
    fn resolve_bare_entry_has_no_filters() {
        let m = manifest();
        let source = m.resolve("C4", "HARDKERNEL", "ANDROID_PIE_64").unwrap();
        assert_eq!(
            source.base_url,
            "https://dn.odroid.com/S905X3/ODROID-C4/Android/pie/64/"
        );
        assert!(source.name_filters.is_empty());
    }

    #[test]
    fn resolve_empty_fragment_keeps_base_url() {
        let m = manifest();
        let source = m.resolve("C4", "THIRD_PARTY", "COMMUNITY").unwrap();
        assert_eq!(
            source.base_url,
            "https://github.com/example/odroid-images/releases"
        );
        assert_eq!(source.archive_type, ArchiveType::Github);
    }

    #[test]
    fn resolve_unknown_os_fails() {
        let m = manifest();
        assert_eq!(
            m.resolve("C4", "HARDKERNEL", "GENTOO").unwrap_err(),
            CatalogError::OsNotFound {
                distributor: "HARDKERNEL".to_string(),
                board: "C4".to_string(),
                os: "GENTOO".to_string(),
            }
        );
    }
}
