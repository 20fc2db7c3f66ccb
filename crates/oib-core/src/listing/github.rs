//! Code-hosting releases-page adapter.

use url::Url;

use super::fetch::ListingPage;
use super::filter;
use super::table::selector;
use super::{ImageFile, UNAVAILABLE};

/// Extracts image files from a releases page's asset blocks.
///
/// Each block holds a download link and a small size label. Blocks without
/// a resolvable link are skipped. The link's href is host-rooted, so the
/// download URL is the page origin (`scheme://host`) plus the href, not a
/// concatenation with the page's full path. Per-asset timestamps are not
/// exposed on this page style.
pub(super) fn parse(page: &ListingPage, name_filters: &[String]) -> Vec<ImageFile> {
    let block_sel = selector("body main details div div .flex-items-center");
    let link_sel = selector("a");
    let size_sel = selector("small");

    let origin = match page_origin(&page.url) {
        Some(origin) => origin,
        None => return Vec::new(),
    };

    let mut files = Vec::new();
    for block in page.document.select(&block_sel) {
        let href = match block
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            Some(href) => href,
            None => continue,
        };
        let file_name = match href.rsplit('/').next() {
            Some(segment) if !segment.is_empty() => segment.to_string(),
            _ => continue,
        };
        if !filter::passes(&file_name, name_filters) {
            continue;
        }

        let file_size = block
            .select(&size_sel)
            .next()
            .map(|s| s.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        files.push(ImageFile {
            download_url: format!("{}{}", origin, href),
            file_name,
            file_size,
            last_modified: UNAVAILABLE.to_string(),
        });
    }
    files
}

/// `scheme://host[:port]` of the listing URL.
fn page_origin(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    match parsed.origin() {
        origin @ url::Origin::Tuple(..) => Some(origin.ascii_serialization()),
        url::Origin::Opaque(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const BASE: &str = "https://github.com/example/odroid-images/releases";

    const RELEASES: &str = r#"
        <html><body><main>
        <details>
        <div><div>
        <div class="flex-items-center">
            <a href="/example/odroid-images/releases/download/v1.0/odroid-c4-ubuntu.img.xz">odroid-c4-ubuntu.img.xz</a>
            <small>498 MB</small>
        </div>
        <div class="flex-items-center">
            <a href="/example/odroid-images/releases/download/v1.0/odroid-c4-ubuntu.img.xz.sha256">odroid-c4-ubuntu.img.xz.sha256</a>
            <small>64 Bytes</small>
        </div>
        <div class="flex-items-center">
            <small>Source code (zip)</small>
        </div>
        </div></div>
        </details>
        </main></body></html>"#;

    fn page() -> ListingPage {
        ListingPage {
            url: BASE.to_string(),
            document: Html::parse_document(RELEASES),
        }
    }

    #[test]
    fn keeps_linked_image_assets_only() {
        let files = parse(&page(), &[]);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "odroid-c4-ubuntu.img.xz");
        assert_eq!(files[0].file_size, "498 MB");
    }

    #[test]
    fn download_url_joins_origin_and_href() {
        let files = parse(&page(), &[]);
        assert_eq!(
            files[0].download_url,
            "https://github.com/example/odroid-images/releases/download/v1.0/odroid-c4-ubuntu.img.xz"
        );
    }

    #[test]
    fn last_modified_is_unavailable() {
        let files = parse(&page(), &[]);
        assert_eq!(files[0].last_modified, "N/A");
    }

    #[test]
    fn blocks_without_links_are_skipped() {
        // The "Source code (zip)" block has no anchor; it must not panic
        // or produce a record.
        let files = parse(&page(), &[]);
        assert!(files.iter().all(|f| !f.file_name.contains("Source")));
    }

    #[test]
    fn sha_sidecar_is_excluded() {
        let files = parse(&page(), &[]);
        assert!(files.iter().all(|f| !f.file_name.contains(".sha")));
    }

    #[test]
    fn name_filters_apply_to_the_path_segment() {
        let filters = vec!["android".to_string()];
        assert!(parse(&page(), &filters).is_empty());
    }

    #[test]
    fn origin_keeps_scheme_host_and_port() {
        assert_eq!(
            page_origin("https://github.com/org/repo/releases").as_deref(),
            Some("https://github.com")
        );
        assert_eq!(
            page_origin("http://mirror.example.com:8080/releases").as_deref(),
            Some("http://mirror.example.com:8080")
        );
        assert!(page_origin("not a url").is_none());
    }
}
