//! CLI for the OIB image browser.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use oib_core::config;
use oib_core::manifest;

use commands::{
    run_boards, run_completions, run_distributors, run_files, run_man, run_os, run_url,
};

/// Top-level CLI for the OIB image browser.
#[derive(Debug, Parser)]
#[command(name = "oib")]
#[command(about = "OIB: browse Odroid image mirrors and resolve download URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List boards available in the image manifest.
    Boards,

    /// List distributors that serve a board.
    Distributors {
        /// Board key as shown by `oib boards`.
        board: String,
    },

    /// List OS entries a distributor offers for a board.
    Os {
        /// Board key as shown by `oib boards`.
        board: String,
        /// Distributor name as shown by `oib distributors`.
        distributor: String,
    },

    /// Fetch the mirror listing and show the image files on it.
    Files {
        /// Board key as shown by `oib boards`.
        board: String,
        /// Distributor name as shown by `oib distributors`.
        distributor: String,
        /// OS entry as shown by `oib os`.
        os: String,
        /// Also print each file's download URL.
        #[arg(long)]
        urls: bool,
        /// Emit the file list as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the download URL for one file on the mirror listing.
    Url {
        /// Board key as shown by `oib boards`.
        board: String,
        /// Distributor name as shown by `oib distributors`.
        distributor: String,
        /// OS entry as shown by `oib os`.
        os: String,
        /// Exact file name as shown by `oib files`.
        file: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Render the man page to stdout.
    #[command(hide = true)]
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions and man render locally; everything else needs the manifest.
        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let manifest = manifest::fetch_manifest(&cfg)?;

        match cli.command {
            CliCommand::Boards => run_boards(&manifest)?,
            CliCommand::Distributors { board } => run_distributors(&manifest, &board)?,
            CliCommand::Os { board, distributor } => run_os(&manifest, &board, &distributor)?,
            CliCommand::Files {
                board,
                distributor,
                os,
                urls,
                json,
            } => run_files(&manifest, &cfg, &board, &distributor, &os, urls, json)?,
            CliCommand::Url {
                board,
                distributor,
                os,
                file,
            } => run_url(&manifest, &cfg, &board, &distributor, &os, &file)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
