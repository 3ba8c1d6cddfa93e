//! Lexis command line.
//!
//! The `lexis` binary parses arguments and installs logging; the commands
//! themselves live here and write their output to any `io::Write` so they can
//! be driven from tests.

mod args;
mod commands;
mod format;

pub use args::{Cli, Command};
pub use commands::{run, Outcome};
pub use format::{diagnostic_line, display_path};
