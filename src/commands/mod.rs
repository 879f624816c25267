//! Command-line interface for the `uagen` binary
//!
//! The binary is a thin shell over [`Generator`](crate::Generator). `run` parses the arguments,
//! loads the configuration, and writes one generated User-Agent per line to the host's output.
//! Without arguments it prints the demo listing: ten random User-Agents, then three Chrome
//! and three Mobile ones under their own headings.
//!
//! All I/O goes through the [`Host`] trait so the command can be driven from tests with
//! in-memory buffers.

mod host;
mod run;

pub use host::Host;
pub use run::{LogLevel, run};
