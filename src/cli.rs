//! CLI argument parsing for zodiac-extract.
//!
//! Commands: extract, rewards, copy-input, paste
//! Flags: --debug/-d

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zodiac-extract")]
#[command(version, about = "Pick zodiac material ids out of an inventory JSON dump")]
pub struct Args {
    /// Write a debug log next to the executable
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Mode {
    /// Extract material ids for a reward
    Extract(ExtractArgs),
    /// List the known reward keys
    Rewards,
    /// Copy the raw input to the clipboard
    CopyInput {
        /// Read input from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the clipboard contents
    Paste,
}

#[derive(ClapArgs, Debug, PartialEq)]
pub struct ExtractArgs {
    /// Reward key, e.g. UPOINT_200K
    #[arg(short, long)]
    pub reward: String,

    /// Animal to collect three of (UPOINT_68686 only)
    #[arg(short, long)]
    pub animal: Option<String>,

    /// Read input from this file instead of stdin
    #[arg(short, long, conflicts_with = "paste")]
    pub file: Option<PathBuf>,

    /// Read input from the clipboard
    #[arg(short, long)]
    pub paste: bool,

    /// Also copy the result to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}
