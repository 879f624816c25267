use crate::RowParseError;

/// Counters describing one pass over the CSV entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Records read from the CSV entry, including blank and rejected ones.
    pub records_read: usize,

    /// Records whose pattern column was empty or whitespace.
    pub blank_patterns: usize,

    /// Records whose pattern was rejected by normalization.
    pub rejected: usize,

    /// Reading stopped because the record cap was reached.
    pub reached_record_cap: bool,

    /// The error that ended row iteration early, if any.
    ///
    /// When this is set the pool only holds the candidates from rows before the failure. The
    /// load still counts as successful, so callers that care about completeness must check it.
    pub parse_error: Option<RowParseError>,
}

/// Validated User-Agent candidates from one load, in row order.
///
/// Entries are not deduplicated: rows that normalize to the same string appear once per row.
#[derive(Debug, Clone, Default)]
pub struct Pool {
    agents: Vec<String>,
    stats: LoadStats,
}

impl Pool {
    #[must_use]
    pub const fn new(agents: Vec<String>, stats: LoadStats) -> Self {
        Self { agents, stats }
    }

    #[must_use]
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    #[must_use]
    pub const fn stats(&self) -> &LoadStats {
        &self.stats
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Whether row iteration was cut short by a parse error.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.stats.parse_error.is_some()
    }

    #[must_use]
    pub fn into_agents(self) -> Vec<String> {
        self.agents
    }
}
