//! `oib distributors <board>` – distributors serving a board.

use anyhow::Result;
use oib_core::catalog::Manifest;

pub fn run_distributors(manifest: &Manifest, board: &str) -> Result<()> {
    let names = manifest.distributors_for_board(board)?;
    if names.is_empty() {
        println!("No distributors serve board {board}.");
        return Ok(());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
