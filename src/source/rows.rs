use super::LOG_TARGET;
use crate::normalize::{NormalizeRules, normalize_with};
use crate::{LoadStats, Pool, RowParseError};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// Stream CSV records from `input` and collect the patterns that survive normalization.
///
/// Column 0 of each record is the pattern; every other column is ignored and records may have
/// differing field counts. No header row is assumed. At most `max_records` records are read.
///
/// A read or UTF-8 decode failure does NOT fail the load. It is logged, recorded in
/// [`LoadStats::parse_error`], and ends iteration with whatever was collected up to that point.
/// Callers that need a complete pool must check [`Pool::is_truncated`].
pub fn read_patterns(input: impl Read, rules: &NormalizeRules, max_records: usize) -> Pool {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quote(b'"')
        .flexible(true)
        .from_reader(input);

    let mut agents = Vec::new();
    let mut stats = LoadStats::default();
    let mut record = StringRecord::new();

    while stats.records_read < max_records {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                let error = RowParseError {
                    record: stats.records_read,
                    line: e.position().map(csv::Position::line),
                    message: e.to_string(),
                };

                log::warn!(
                    target: LOG_TARGET,
                    "Stopped reading browscap rows early, keeping {} user agents collected so far: {error}",
                    agents.len()
                );

                stats.parse_error = Some(error);
                break;
            }
        }

        stats.records_read += 1;

        let pattern = record.get(0).unwrap_or_default();
        if pattern.trim().is_empty() {
            stats.blank_patterns += 1;
            continue;
        }

        match normalize_with(pattern, rules) {
            Some(agent) => agents.push(agent),
            None => stats.rejected += 1,
        }
    }

    stats.reached_record_cap = stats.records_read >= max_records;

    Pool::new(agents, stats)
}
