//! Conversion of browscap patterns into candidate User-Agent strings.
//!
//! Browscap patterns are match templates: `*` stands for any substring and `?` for any single
//! character. A candidate is produced by deleting the wildcards and tidying the whitespace they
//! leave behind. Patterns that carry too little concrete text, or that clean up into something
//! that does not look like a browser User-Agent, are rejected.
//!
//! Rejection checks run in a fixed order. The first three look at the trimmed raw pattern:
//!
//! 1. empty, or exactly `*`
//! 2. shorter than [`NormalizeRules::min_pattern_len`]
//! 3. more wildcards than `length / wildcard_density_divisor`
//!
//! The pattern is then cleaned, and the rest look at the result:
//!
//! 4. does not start with `Mozilla`
//! 5. shorter than [`NormalizeRules::min_candidate_len`]
//! 6. contains malformed residue (`**`, `??`, `" /"`, `"/ "`, a trailing `/`, or `()`)

use regex::Regex;
use std::sync::LazyLock;

const REQUIRED_PREFIX: &str = "Mozilla";
const MALFORMED_RESIDUE: [&str; 5] = ["**", "??", " /", "/ ", "()"];

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static OPEN_PAREN_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s+").expect("valid regex"));
static SPACE_CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\)").expect("valid regex"));
static SEMICOLON_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*;\s*").expect("valid regex"));
static SLASH_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*/\s*").expect("valid regex"));

/// Thresholds applied while normalizing a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeRules {
    /// Minimum length of the trimmed raw pattern, in characters.
    pub min_pattern_len: usize,

    /// A pattern is rejected when its wildcard count exceeds `length / wildcard_density_divisor`
    /// (integer division). Zero disables the check.
    pub wildcard_density_divisor: usize,

    /// Minimum length of the cleaned candidate, in characters.
    pub min_candidate_len: usize,
}

impl NormalizeRules {
    pub const DEFAULT: Self = Self {
        min_pattern_len: 20,
        wildcard_density_divisor: 3,
        min_candidate_len: 30,
    };
}

impl Default for NormalizeRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Normalize a pattern using [`NormalizeRules::DEFAULT`].
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    normalize_with(raw, &NormalizeRules::DEFAULT)
}

/// Turn a raw browscap pattern into a candidate User-Agent, or `None` if it is rejected.
///
/// This is a pure function: the same input and rules always give the same answer.
#[must_use]
pub fn normalize_with(raw: &str, rules: &NormalizeRules) -> Option<String> {
    let pattern = raw.trim();
    if pattern.is_empty() || pattern == "*" {
        return None;
    }

    let len = pattern.chars().count();
    if len < rules.min_pattern_len {
        return None;
    }

    let wildcards = pattern.chars().filter(|&c| is_wildcard(c)).count();
    if let Some(limit) = len.checked_div(rules.wildcard_density_divisor)
        && wildcards > limit
    {
        return None;
    }

    let candidate = clean(pattern);

    if !candidate.starts_with(REQUIRED_PREFIX) || candidate.chars().count() < rules.min_candidate_len {
        return None;
    }

    if has_malformed_residue(&candidate) {
        return None;
    }

    Some(candidate)
}

const fn is_wildcard(c: char) -> bool {
    matches!(c, '*' | '?')
}

fn clean(pattern: &str) -> String {
    let stripped: String = pattern.chars().filter(|&c| !is_wildcard(c)).collect();

    let text = WHITESPACE_RUN.replace_all(&stripped, " ");
    let text = OPEN_PAREN_SPACE.replace_all(&text, "(");
    let text = SPACE_CLOSE_PAREN.replace_all(&text, ")");
    let text = SEMICOLON_SPACING.replace_all(&text, "; ");
    let text = SLASH_SPACING.replace_all(&text, "/");

    text.trim().to_string()
}

fn has_malformed_residue(candidate: &str) -> bool {
    candidate.ends_with('/') || MALFORMED_RESIDUE.iter().any(|residue| candidate.contains(residue))
}
