//! `oib boards` – list boards from the image manifest.

use anyhow::Result;
use oib_core::catalog::Manifest;

pub fn run_boards(manifest: &Manifest) -> Result<()> {
    let boards = manifest.board_list();
    if boards.is_empty() {
        println!("No boards in manifest.");
        return Ok(());
    }
    println!("{:<12} {}", "KEY", "BOARD");
    for (key, name) in boards {
        println!("{:<12} {}", key, name);
    }
    Ok(())
}
