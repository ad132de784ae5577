//! Artline CLI - Convert ASCII diagrams to SVG

mod cli;
mod colorizer;

use clap::Parser;

fn main() {
    // Logging is initialized inside run() once flags and env vars are known
    let cli_args = cli::Cli::parse();

    let mut app = cli::ArtlineApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
