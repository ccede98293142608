//! Command Line Interface (CLI) layer for barscan.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! output formatting (`output`), and the orchestration logic (`runner`)
//! for one recognition run. It wires user-provided options to the
//! underlying library functionality exposed via `barscan::reader`.
//!
//! If you are embedding recognition into another application, prefer
//! using the `barscan::reader` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod output;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
