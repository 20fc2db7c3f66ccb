//! Filename filtering shared by all listing adapters.

/// Checksum/signature/metadata sidecars that must never be offered as images.
const SIDECAR_MARKERS: [&str; 5] = [".md5", ".asc", ".sha", ".txt", ".torrent"];

/// True if the name is excluded by extension rules.
///
/// Anything whose lowercase form lacks `.img` is out; so is anything
/// carrying a sidecar marker (`.md5`, `.asc`, `.sha`, `.txt`, `.torrent`).
/// Net effect: only image-archive files pass.
pub fn has_exclude_extensions(name: &str) -> bool {
    let lower = name.to_lowercase();
    if !lower.contains(".img") {
        return true;
    }
    SIDECAR_MARKERS.iter().any(|m| lower.contains(m))
}

/// True if the name is filtered out by the required-substring filters.
///
/// Every filter must appear in the lowercased name (AND semantics); an
/// empty filter list filters nothing.
pub fn is_filtered_by_name_filters(name: &str, filters: &[String]) -> bool {
    let lower = name.to_lowercase();
    filters.iter().any(|f| !lower.contains(f.as_str()))
}

/// True if the name survives both checks.
pub(crate) fn passes(name: &str, filters: &[String]) -> bool {
    !has_exclude_extensions(name) && !is_filtered_by_name_filters(name, filters)
}
