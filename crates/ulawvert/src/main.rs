//! A tool to convert audio files into G.711 mu-law.
//!
//! See [`ulawvert`] documentation for more information.
//!
//! [`ulawvert`]: https://crates.io/crates/ulawvert

use anyhow::Result;
use clap::Parser;

/// Convert an audio file into G.711 mu-law (8kHz, mono).
#[derive(Parser)]
#[command(author, version, about, max_term_width = 80)]
pub struct Opts {
    #[command(flatten)]
    inner: ulawvert::cli::Ulawvert,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    ulawvert::cli::entry(&opts.inner)
}
