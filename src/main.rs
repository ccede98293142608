//! barscan CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run one
//! recognition pass, and exit with appropriate status. For programmatic
//! use, prefer the library API (`barscan::reader`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
