mod app;
mod graph;
mod map_loader;
mod path;
mod report;

use app::Cli;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = app::run_app(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
