//! h5ai-style directory-listing adapter.

use super::fetch::ListingPage;
use super::filter;
use super::table::{walk_rows, ColumnMapping};
use super::{ImageFile, UNAVAILABLE};

/// Same positional layout as the Apache mirrors for name and date. h5ai's
/// size column is not usable as a directory-vs-file signal, so it is never
/// read; `file_size` is reported as unavailable.
const COLUMNS: ColumnMapping = ColumnMapping {
    name: 1,
    date: 2,
    size: 3,
};

/// Extracts image files from an h5ai table listing.
///
/// No size-based inclusion test: every row whose filename survives the
/// exclusion and name-filter checks is kept.
pub(super) fn parse(page: &ListingPage, name_filters: &[String]) -> Vec<ImageFile> {
    walk_rows(page, &COLUMNS)
        .into_iter()
        .filter(|row| filter::passes(&row.file_name, name_filters))
        .map(|row| ImageFile {
            download_url: format!("{}{}", page.url, row.file_name),
            file_name: row.file_name,
            file_size: UNAVAILABLE.to_string(),
            last_modified: row.last_modified,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const BASE: &str = "https://de.eu.odroid.in/mirror/dn.odroid.com/Minimal/";

    const LISTING: &str = r#"
        <html><body>
        <div id="content"><table>
        <tr><td class="fb-i"></td><td><a href="../">..</a></td><td>2021-01-12 09:15</td></tr>
        <tr><td class="fb-i"></td><td><a href="ubuntu-minimal-odroid.img.xz">ubuntu-minimal-odroid.img.xz</a></td><td>2021-01-12 09:15</td></tr>
        <tr><td class="fb-i"></td><td><a href="readme.txt">readme.txt</a></td><td>2020-11-02 10:00</td></tr>
        </table></div>
        </body></html>"#;

    fn page() -> ListingPage {
        ListingPage {
            url: BASE.to_string(),
            document: Html::parse_document(LISTING),
        }
    }

    #[test]
    fn keeps_image_rows_without_a_size_test() {
        let files = parse(&page(), &[]);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "ubuntu-minimal-odroid.img.xz");
        assert_eq!(files[0].last_modified, "2021-01-12 09:15");
    }

    #[test]
    fn size_is_reported_unavailable() {
        let files = parse(&page(), &[]);
        assert_eq!(files[0].file_size, "N/A");
    }

    #[test]
    fn readme_txt_is_excluded() {
        let files = parse(&page(), &[]);
        assert!(files.iter().all(|f| f.file_name != "readme.txt"));
    }

    #[test]
    fn download_url_is_base_plus_name() {
        let files = parse(&page(), &[]);
        assert_eq!(
            files[0].download_url,
            format!("{}{}", BASE, files[0].file_name)
        );
    }

    #[test]
    fn name_filters_apply() {
        let filters = vec!["android".to_string()];
        assert!(parse(&page(), &filters).is_empty());
    }
}
