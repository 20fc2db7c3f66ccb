//! Shared row walker for HTML table directory listings.

use scraper::{ElementRef, Selector};

use super::fetch::ListingPage;

/// Positional cell layout of a directory-listing table.
pub(super) struct ColumnMapping {
    pub name: usize,
    pub date: usize,
    pub size: usize,
}

/// Extracted cells of one table row. Missing cells come back empty.
pub(super) struct RowFields {
    pub file_name: String,
    pub last_modified: String,
    pub file_size: String,
}

/// Parse a selector known at compile time.
pub(super) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Walks `body table tbody tr`, yielding the mapped cells per row.
///
/// Rows without a name cell (header rows, decorations) are skipped; other
/// missing cells degrade to empty strings so the adapters' filename and
/// size rules decide the row's fate.
pub(super) fn walk_rows(page: &ListingPage, columns: &ColumnMapping) -> Vec<RowFields> {
    let row_sel = selector("body table tbody tr");
    let cell_sel = selector("td");

    let mut rows = Vec::new();
    for row in page.document.select(&row_sel) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell_sel).collect();
        let file_name = match cell_text(&cells, columns.name) {
            Some(name) => name,
            None => continue,
        };
        rows.push(RowFields {
            file_name,
            last_modified: cell_text(&cells, columns.date).unwrap_or_default(),
            file_size: cell_text(&cells, columns.size).unwrap_or_default(),
        });
    }
    rows
}

fn cell_text(cells: &[ElementRef<'_>], index: usize) -> Option<String> {
    cells
        .get(index)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
}
