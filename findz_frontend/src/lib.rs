use clap::Parser;
use serde::{Deserialize, Serialize};

pub mod logging;
pub mod report;
pub mod tour;

#[derive(Parser, Serialize, Deserialize)]
pub struct DriverArgs {
    /// Dump the membership report as JSON instead of labeled text lines.
    #[clap(short, long)]
    pub json: bool,
    /// Log per-variant comparison costs to stderr.
    #[clap(short, long)]
    pub verbose: bool,
}
