//! Loading the User-Agent pool from the packaged browscap archive.
//!
//! Loading happens in three steps: [`ResourceLocator`] finds the archive file, the first CSV
//! entry inside the archive is selected, and its rows are streamed through the normalizer. Every
//! load is independent: the file, ZIP reader and CSV reader are scoped to the call and closed on
//! every exit path, including the record cap and mid-stream parse errors.

mod archive;
mod locator;
mod rows;

pub use archive::{CSV_EXTENSION, read_first_csv};
pub use locator::{RESOURCE_DIR, ResourceLocator};
pub use rows::read_patterns;

use crate::config::Config;
use crate::normalize::NormalizeRules;
use crate::{GenerateError, Pool};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::IntoAppError;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::time::Instant;

/// Log target for the source loader
pub(crate) const LOG_TARGET: &str = "    source";

/// Materializes a fresh [`Pool`] from the browscap archive on every call.
#[derive(Debug, Clone)]
pub struct SourceLoader {
    locator: ResourceLocator,
    archive_name: String,
    archive_path: Option<Utf8PathBuf>,
    rules: NormalizeRules,
    max_records: usize,
}

impl SourceLoader {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            locator: ResourceLocator::new(config.resource_dirs.iter().cloned()),
            archive_name: config.archive_name.clone(),
            archive_path: config.archive_path.clone(),
            rules: config.rules(),
            max_records: config.max_records,
        }
    }

    /// Replace the resource locator used to find the archive.
    #[must_use]
    pub fn with_locator(mut self, locator: ResourceLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Always read the archive at `path` instead of searching for it.
    #[must_use]
    pub fn with_archive_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.archive_path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    #[must_use]
    pub const fn rules(&self) -> &NormalizeRules {
        &self.rules
    }

    #[must_use]
    pub const fn max_records(&self) -> usize {
        self.max_records
    }

    /// Load the pool from the configured archive.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ResourceNotFound`] if the archive cannot be found or opened, or if it
    /// holds no CSV entry. Row-level failures are not errors; see [`read_patterns`].
    pub fn load(&self) -> Result<Pool, GenerateError> {
        let path = match &self.archive_path {
            Some(path) => path.clone(),
            None => self.locator.locate(&self.archive_name).map_err(GenerateError::ResourceNotFound)?,
        };

        self.load_from_path(&path)
    }

    /// Load the pool from the archive at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ResourceNotFound`] if the file cannot be opened or holds no CSV entry.
    pub fn load_from_path(&self, path: &Utf8Path) -> Result<Pool, GenerateError> {
        let file = File::open(path)
            .into_app_err_with(|| format!("unable to open browscap archive '{path}'"))
            .map_err(GenerateError::ResourceNotFound)?;

        log::info!(target: LOG_TARGET, "Opened browscap archive '{path}'");
        self.load_from_reader(BufReader::new(file))
    }

    /// Load the pool from an archive already held in memory or opened by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ResourceNotFound`] if `reader` is not a readable ZIP archive or holds no CSV entry.
    pub fn load_from_reader<R: Read + Seek>(&self, reader: R) -> Result<Pool, GenerateError> {
        let start = Instant::now();
        let pool = read_first_csv(reader, &self.rules, self.max_records).map_err(GenerateError::ResourceNotFound)?;

        let stats = pool.stats();
        log::info!(
            target: LOG_TARGET,
            "Loaded {} user agents from {} records ({} rejected, {} blank) in {:.3}s",
            pool.len(),
            stats.records_read,
            stats.rejected,
            stats.blank_patterns,
            start.elapsed().as_secs_f64()
        );

        if stats.reached_record_cap {
            log::debug!(target: LOG_TARGET, "Stopped at the {} record cap", self.max_records);
        }

        Ok(pool)
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
