//! Apache-style directory-listing adapter.

use super::fetch::ListingPage;
use super::filter;
use super::table::{walk_rows, ColumnMapping};
use super::ImageFile;

/// Cell layout on the vendor's Apache mirrors: icon, name, date, size.
const COLUMNS: ColumnMapping = ColumnMapping {
    name: 1,
    date: 2,
    size: 3,
};

/// Extracts image files from an Apache `mod_autoindex` table listing.
///
/// A row is kept only if its size string carries an `M` or `G` magnitude
/// (directories and placeholders show `-`) and the filename survives the
/// exclusion and name-filter checks. Download URLs are the page URL plus
/// the file name; the catalog guarantees the trailing separator.
pub(super) fn parse(page: &ListingPage, name_filters: &[String]) -> Vec<ImageFile> {
    walk_rows(page, &COLUMNS)
        .into_iter()
        .filter(|row| row.file_size.contains('M') || row.file_size.contains('G'))
        .filter(|row| filter::passes(&row.file_name, name_filters))
        .map(|row| ImageFile {
            download_url: format!("{}{}", page.url, row.file_name),
            file_name: row.file_name,
            file_size: row.file_size,
            last_modified: row.last_modified,
        })
        .collect()
}
