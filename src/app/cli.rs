use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds every minimum-weight route between the node pairs of a weighted map.", long_about = None)]
pub struct Cli {
    /// Map file declaring the node count and the weighted links
    pub map_file: PathBuf,

    /// Write the route report to this file in addition to stdout
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress verbose output, only printing the report and 'Done.' on success.
    #[clap(short, long)]
    pub quiet: bool,
}
