//! Argument parsing and output for the `uagen` binary

use super::Host;
use crate::config::Config;
use crate::{GenerateError, Generator, Result};
use camino::Utf8PathBuf;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, ValueEnum};
use ohno::app_err;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

/// Log target for the command-line front end
const LOG_TARGET: &str = "  commands";

const DEMO_RANDOM_COUNT: usize = 10;
const DEMO_FILTERED_COUNT: usize = 3;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

#[derive(Parser, Debug)]
#[command(name = "uagen", author, version, long_about = None)]
#[command(about = "Generate plausible browser User-Agent strings from the browscap dataset")]
#[command(styles = CLAP_STYLES)]
struct Args {
    /// Number of User-Agents to generate [default: 10 random ones, or 1 with --browser/--platform]
    #[arg(long, short = 'n', value_name = "N")]
    count: Option<usize>,

    /// Only generate User-Agents containing this text, ignoring case
    #[arg(long, short = 'b', value_name = "TEXT")]
    browser: Option<String>,

    /// Only generate User-Agents containing this text, ignoring case
    #[arg(long, short = 'p', value_name = "TEXT")]
    platform: Option<String>,

    /// Path to configuration file [default: uagen.toml if present]
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// Read this browscap archive instead of searching the resource directories
    #[arg(long, value_name = "PATH")]
    archive: Option<Utf8PathBuf>,

    /// Seed the random generator for reproducible output
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Write the default configuration file to PATH and exit
    #[arg(long, value_name = "PATH", conflicts_with_all = ["count", "browser", "platform", "archive", "seed"])]
    default_config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    log_level: LogLevel,
}

/// Parse command-line arguments and print the requested User-Agents
///
/// With no `--count`, `--browser` or `--platform`, prints ten random User-Agents followed by
/// three Chrome ones and three Mobile ones.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or no User-Agent can be generated.
/// Generation failures are also reported on the host's error stream with exit code 1.
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = Args::parse_from(args);
    init_logging(args.log_level);

    if let Some(path) = &args.default_config {
        Config::save_default(path)?;
        let _ = writeln!(host.output(), "Generated default configuration file: {path}");
        return Ok(());
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(archive) = &args.archive {
        config.archive_path = Some(archive.clone());
    }

    // one invocation samples many times from the same archive
    config.cache_pool = true;

    let rng = args.seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut generator = Generator::with_rng(&config, rng);
    log::debug!(target: LOG_TARGET, "{generator:?}");

    match generate_lines(&mut generator, &args) {
        Ok(lines) => {
            let mut out = host.output();
            for line in &lines {
                let _ = writeln!(out, "{line}");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "Error generating user agents: {e}");
            host.exit(1);
            Err(app_err!("{e}"))
        }
    }
}

fn generate_lines<R: Rng>(generator: &mut Generator<R>, args: &Args) -> Result<Vec<String>, GenerateError> {
    if args.browser.is_none() && args.platform.is_none() {
        return match args.count {
            Some(count) => generator.generate_many(count),
            None => demo_lines(generator),
        };
    }

    let browser = args.browser.as_deref();
    let platform = args.platform.as_deref();

    (0..args.count.unwrap_or(1))
        .map(|_| generator.generate_one_filtered(browser, platform))
        .collect()
}

fn demo_lines<R: Rng>(generator: &mut Generator<R>) -> Result<Vec<String>, GenerateError> {
    let mut lines = Vec::with_capacity(DEMO_RANDOM_COUNT + 2 * (DEMO_FILTERED_COUNT + 2));

    for i in 1..=DEMO_RANDOM_COUNT {
        lines.push(format!("Random User Agent {i}: {}", generator.generate_one()?));
    }

    lines.push(String::new());
    lines.push("--- Chrome User Agents ---".to_string());
    for i in 1..=DEMO_FILTERED_COUNT {
        lines.push(format!("Chrome UA {i}: {}", generator.generate_one_filtered(Some("Chrome"), None)?));
    }

    lines.push(String::new());
    lines.push("--- Mobile User Agents ---".to_string());
    for i in 1..=DEMO_FILTERED_COUNT {
        lines.push(format!("Mobile UA {i}: {}", generator.generate_one_filtered(None, Some("Mobile"))?));
    }

    Ok(lines)
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when run is called more than once in a process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
