//! `oib files` – fetch a mirror listing and show its image files.

use anyhow::{Context, Result};
use oib_core::catalog::Manifest;
use oib_core::config::OibConfig;
use oib_core::listing;

pub fn run_files(
    manifest: &Manifest,
    cfg: &OibConfig,
    board: &str,
    distributor: &str,
    os: &str,
    urls: bool,
    json: bool,
) -> Result<()> {
    let source = manifest.resolve(board, distributor, os)?;
    tracing::info!(url = %source.base_url, "fetching mirror listing");
    let files = listing::fetch_and_parse(&source, cfg.listing_timeouts())
        .with_context(|| format!("fetch listing {}", source.base_url))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    if files.is_empty() {
        println!("No image files on {} (after filters).", source.base_url);
        return Ok(());
    }

    println!("{:<56} {:<10} {}", "FILE", "SIZE", "LAST MODIFIED");
    for f in &files {
        println!("{:<56} {:<10} {}", f.file_name, f.file_size, f.last_modified);
        if urls {
            println!("    {}", f.download_url);
        }
    }
    Ok(())
}
