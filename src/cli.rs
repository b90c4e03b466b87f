//! Command-line interface for the harvest task
//!
//! Run parameters can come from flags or, mirroring the hosted task runner,
//! from a JSON work-item payload whose keys override the flag defaults.

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

/// Command-line arguments for one harvest run.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// News portal to open
    #[arg(long, default_value = "https://news.yahoo.com/")]
    pub url: String,

    /// Search keyword submitted to the portal
    #[arg(short, long, default_value = "car sale increase")]
    pub search_phrase: String,

    /// How many months back an article may be to stay in the report
    #[arg(short, long, default_value_t = 1)]
    pub months: u32,

    /// Directory receiving the spreadsheet and downloaded pictures
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Optional JSON work item overriding `search_phrase` and `months`
    #[arg(long)]
    pub payload: Option<PathBuf>,
}

/// Work-item payload shape accepted via `--payload`.
#[derive(Debug, Default, Deserialize)]
pub struct Payload {
    pub search_phrase: Option<String>,
    pub months: Option<u32>,
}
