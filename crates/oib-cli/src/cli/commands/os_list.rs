//! `oib os <board> <distributor>` – OS entries for a board/distributor pair.

use anyhow::Result;
use oib_core::catalog::Manifest;

pub fn run_os(manifest: &Manifest, board: &str, distributor: &str) -> Result<()> {
    let names = manifest.os_names(board, distributor)?;
    if names.is_empty() {
        println!("No OS entries for board {board} at {distributor}.");
        return Ok(());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
