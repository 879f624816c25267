//! Uniform random selection over a pool of User-Agent strings.
//!
//! The random source is always supplied by the caller, so tests can pin it with a seeded
//! generator such as [`rand::rngs::StdRng::seed_from_u64`](rand::SeedableRng::seed_from_u64).

use crate::GenerateError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Pick one entry uniformly at random.
///
/// # Errors
///
/// Returns [`GenerateError::NoDataFound`] if `pool` is empty.
pub fn pick_one<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Result<String, GenerateError> {
    pool.choose(rng).cloned().ok_or(GenerateError::NoDataFound)
}

/// Pick one entry uniformly at random among those matching both filters.
///
/// An entry matches when its lowercase text contains the lowercase `browser` (if given) and the
/// lowercase `platform` (if given). With neither filter every entry matches.
///
/// # Errors
///
/// Returns [`GenerateError::NoMatchFound`] if no entry matches, including when `pool` is empty.
pub fn pick_one_filtered<R: Rng + ?Sized>(
    pool: &[String],
    browser: Option<&str>,
    platform: Option<&str>,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let browser_needle = browser.map(str::to_lowercase);
    let platform_needle = platform.map(str::to_lowercase);

    let matches: Vec<&String> = pool
        .iter()
        .filter(|agent| {
            let haystack = agent.to_lowercase();
            browser_needle.as_deref().is_none_or(|needle| haystack.contains(needle))
                && platform_needle.as_deref().is_none_or(|needle| haystack.contains(needle))
        })
        .collect();

    log::trace!("{} of {} user agents match the filters", matches.len(), pool.len());

    matches
        .choose(rng)
        .map(|agent| (*agent).clone())
        .ok_or_else(|| GenerateError::NoMatchFound {
            browser: browser.map(str::to_owned),
            platform: platform.map(str::to_owned),
        })
}

/// Draw `min(count, pool.len())` entries independently, with replacement.
///
/// An empty pool yields an empty vector rather than an error.
pub fn pick_many<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    if pool.is_empty() {
        return Vec::new();
    }

    (0..count.min(pool.len()))
        .map(|_| pool[rng.gen_range(0..pool.len())].clone())
        .collect()
}
