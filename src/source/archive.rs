use super::LOG_TARGET;
use super::rows::read_patterns;
use crate::normalize::NormalizeRules;
use crate::{Pool, Result};
use ohno::{IntoAppError, bail};
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Extension identifying the tabular entry inside the archive
pub const CSV_EXTENSION: &str = ".csv";

/// Read patterns from the first CSV entry of the ZIP archive in `reader`.
///
/// Entries are visited in the archive's own order. The first file whose name ends in `.csv` is
/// read and the result returned, even if it yields nothing; later entries are never looked at.
pub fn read_first_csv<R: Read + Seek>(reader: R, rules: &NormalizeRules, max_records: usize) -> Result<Pool> {
    let mut archive = ZipArchive::new(reader).into_app_err("unable to open browscap archive")?;

    for index in 0..archive.len() {
        let entry = archive
            .by_index(index)
            .into_app_err_with(|| format!("unable to read entry {index} of browscap archive"))?;

        if entry.is_dir() || !entry.name().ends_with(CSV_EXTENSION) {
            log::debug!(target: LOG_TARGET, "Skipping archive entry '{}'", entry.name());
            continue;
        }

        log::info!(target: LOG_TARGET, "Reading browscap patterns from '{}'", entry.name());
        return Ok(read_patterns(entry, rules, max_records));
    }

    bail!("no CSV file found in the browscap archive")
}
