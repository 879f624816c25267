//! browscap-uagen
//!
//! Synthesizes plausible browser User-Agent strings for tests and fixtures by sampling the
//! browscap pattern dataset. The dataset ships as a ZIP archive holding a CSV file whose first
//! column is a wildcard pattern such as `Mozilla/5.0 (*Windows NT 10.0*) Gecko/* Firefox/121.0*`.
//!
//! # Module Organization
//!
//! - [`source`]: locating the archive, picking its CSV entry and streaming rows
//! - [`normalize`]: turning a raw pattern into a candidate User-Agent, or rejecting it
//! - [`sampler`]: uniform random selection over a pool of candidates
//! - [`generator`]: the public facade tying loading and sampling together
//! - [`config`]: policy knobs with defaults embedded from `default_config.toml`
//! - [`commands`]: the `uagen` command-line front end
//!
//! ```no_run
//! use browscap_uagen::{Config, Generator};
//!
//! let mut generator = Generator::new(&Config::default());
//! let ua = generator.generate_one_filtered(Some("Chrome"), None)?;
//! assert!(ua.starts_with("Mozilla"));
//! # Ok::<(), browscap_uagen::GenerateError>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod config;
mod error;
pub mod generator;
pub mod normalize;
mod pool;
pub mod sampler;
pub mod source;

#[cfg(test)]
mod test_support;

pub use crate::commands::{Host, run};
pub use crate::config::Config;
pub use crate::error::{GenerateError, RowParseError};
pub use crate::generator::{Generator, generate_many, generate_one, generate_one_filtered};
pub use crate::normalize::{NormalizeRules, normalize, normalize_with};
pub use crate::pool::{LoadStats, Pool};
pub use crate::source::{ResourceLocator, SourceLoader};
