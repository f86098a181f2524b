//! Defines the command-line interface for the application.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "godebug",
    version,
    about = "Split Go sources into debug and nodebug build variants."
)]
pub struct Cli {
    /// Print informational progress messages.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print debug messages (implies --verbose).
    #[arg(short, long)]
    pub debug: bool,
}
