//! Public facade: load the pool and sample from it.
//!
//! By default every operation reloads the archive, so each call reflects a freshly loaded pool
//! and nothing is shared between calls. Setting `cache_pool` in [`Config`] keeps the first pool
//! around until [`Generator::reload`] or [`Generator::invalidate`] is called.

use crate::config::Config;
use crate::sampler;
use crate::source::SourceLoader;
use crate::{GenerateError, Pool};
use core::fmt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates User-Agent strings from the browscap pool using an injected random source.
pub struct Generator<R = StdRng> {
    loader: SourceLoader,
    rng: R,
    cache_pool: bool,
    cached: Option<Pool>,
}

impl Generator<StdRng> {
    /// A generator seeded from operating system entropy.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Generator<R> {
    /// A generator drawing from `rng`. Pass a seeded generator for reproducible output.
    #[must_use]
    pub fn with_rng(config: &Config, rng: R) -> Self {
        Self::with_loader(SourceLoader::new(config), config.cache_pool, rng)
    }

    #[must_use]
    pub const fn with_loader(loader: SourceLoader, cache_pool: bool, rng: R) -> Self {
        Self {
            loader,
            rng,
            cache_pool,
            cached: None,
        }
    }

    #[must_use]
    pub const fn loader(&self) -> &SourceLoader {
        &self.loader
    }

    #[must_use]
    pub const fn is_caching(&self) -> bool {
        self.cache_pool
    }

    /// Generate one User-Agent picked uniformly from the whole pool.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ResourceNotFound`] if the archive cannot be loaded and
    /// [`GenerateError::NoDataFound`] if the pool is empty.
    pub fn generate_one(&mut self) -> Result<String, GenerateError> {
        self.with_pool(|agents, rng| sampler::pick_one(agents, rng))?
    }

    /// Generate one User-Agent containing `browser` and `platform` (case-insensitively), when given.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ResourceNotFound`] if the archive cannot be loaded and
    /// [`GenerateError::NoMatchFound`] if no entry matches the filters.
    pub fn generate_one_filtered(&mut self, browser: Option<&str>, platform: Option<&str>) -> Result<String, GenerateError> {
        self.with_pool(|agents, rng| sampler::pick_one_filtered(agents, browser, platform, rng))?
    }

    /// Generate `min(count, pool size)` User-Agents, drawn independently with replacement.
    ///
    /// An empty pool yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ResourceNotFound`] if the archive cannot be loaded.
    pub fn generate_many(&mut self, count: usize) -> Result<Vec<String>, GenerateError> {
        self.with_pool(|agents, rng| sampler::pick_many(agents, count, rng))
    }

    /// The pool the next operation would sample from.
    ///
    /// Without caching this is a fresh load. With caching, the cached pool is loaded if needed
    /// and a copy returned.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ResourceNotFound`] if the archive cannot be loaded.
    pub fn pool(&mut self) -> Result<Pool, GenerateError> {
        if !self.cache_pool {
            return self.loader.load();
        }

        if let Some(pool) = &self.cached {
            return Ok(pool.clone());
        }

        Ok(self.reload()?.clone())
    }

    /// Load a fresh pool into the cache, replacing any cached one.
    ///
    /// This works whether or not caching is enabled; without caching the stored pool is simply
    /// never consulted.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ResourceNotFound`] if the archive cannot be loaded. The previous
    /// cached pool is dropped in that case.
    pub fn reload(&mut self) -> Result<&Pool, GenerateError> {
        self.cached = None;
        let pool = self.loader.load()?;
        Ok(self.cached.insert(pool))
    }

    /// Drop the cached pool so the next operation loads the archive again.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    fn with_pool<T>(&mut self, f: impl FnOnce(&[String], &mut R) -> T) -> Result<T, GenerateError> {
        if !self.cache_pool {
            let pool = self.loader.load()?;
            return Ok(f(pool.agents(), &mut self.rng));
        }

        let pool = match self.cached.take() {
            Some(pool) => pool,
            None => self.loader.load()?,
        };

        let result = f(pool.agents(), &mut self.rng);
        self.cached = Some(pool);
        Ok(result)
    }
}

impl<R> fmt::Debug for Generator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("loader", &self.loader)
            .field("cache_pool", &self.cache_pool)
            .field("cached_len", &self.cached.as_ref().map(Pool::len))
            .finish_non_exhaustive()
    }
}

/// Generate one User-Agent with the default configuration.
///
/// # Errors
///
/// See [`Generator::generate_one`].
pub fn generate_one() -> Result<String, GenerateError> {
    Generator::new(&Config::default()).generate_one()
}

/// Generate one filtered User-Agent with the default configuration.
///
/// # Errors
///
/// See [`Generator::generate_one_filtered`].
pub fn generate_one_filtered(browser: Option<&str>, platform: Option<&str>) -> Result<String, GenerateError> {
    Generator::new(&Config::default()).generate_one_filtered(browser, platform)
}

/// Generate up to `count` User-Agents with the default configuration.
///
/// # Errors
///
/// See [`Generator::generate_many`].
pub fn generate_many(count: usize) -> Result<Vec<String>, GenerateError> {
    Generator::new(&Config::default()).generate_many(count)
}
