use crate::Result;
use crate::normalize::NormalizeRules;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{EnrichableExt, IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

/// Name of the configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "uagen.toml";

const REQUIRED_PREFIX_LEN: usize = "Mozilla".len();

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File name of the bundled browscap archive
    #[serde(default = "default_archive_name")]
    pub archive_name: String,

    /// Explicit archive location, bypassing the resource directory search
    #[serde(default)]
    pub archive_path: Option<Utf8PathBuf>,

    /// Directories searched for `archive_name` before the built-in resource directories
    #[serde(default)]
    pub resource_dirs: Vec<Utf8PathBuf>,

    /// Maximum number of CSV records read per load
    #[serde(default = "default_max_records")]
    pub max_records: usize,

    /// Minimum trimmed length of a raw pattern
    #[serde(default = "default_min_pattern_len")]
    pub min_pattern_len: usize,

    /// Wildcard count limit is `length / wildcard_density_divisor`; zero disables the check
    #[serde(default = "default_wildcard_density_divisor")]
    pub wildcard_density_divisor: usize,

    /// Minimum length of a cleaned candidate
    #[serde(default = "default_min_candidate_len")]
    pub min_candidate_len: usize,

    /// Keep the loaded pool between calls instead of reloading the archive each time
    #[serde(default)]
    pub cache_pool: bool,
}

fn default_archive_name() -> String {
    "browscap-6001008.zip".to_string()
}

const fn default_max_records() -> usize {
    10_000
}

const fn default_min_pattern_len() -> usize {
    NormalizeRules::DEFAULT.min_pattern_len
}

const fn default_wildcard_density_divisor() -> usize {
    NormalizeRules::DEFAULT.wildcard_density_divisor
}

const fn default_min_candidate_len() -> usize {
    NormalizeRules::DEFAULT.min_candidate_len
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `uagen.toml` in the working directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading uagen configuration file '{path}'"))?;
            (path.to_path_buf(), text)
        } else {
            let path = Utf8PathBuf::from(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("No {DEFAULT_CONFIG_FILE} found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading uagen configuration file '{path}'")),
            }
        };

        Self::parse(&text).map_err(|e| e.enrich_with(|| format!("parsing configuration file '{final_path}'")))
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this configuration or holds invalid values
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).into_app_err("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// The normalization thresholds carried by this configuration
    #[must_use]
    pub const fn rules(&self) -> NormalizeRules {
        NormalizeRules {
            min_pattern_len: self.min_pattern_len,
            wildcard_density_divisor: self.wildcard_density_divisor,
            min_candidate_len: self.min_candidate_len,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.archive_name.trim().is_empty() {
            return Err(app_err!("archive_name must not be empty"));
        }

        if self.max_records == 0 {
            return Err(app_err!("max_records must be greater than 0"));
        }

        if self.min_candidate_len < REQUIRED_PREFIX_LEN {
            return Err(app_err!(
                "min_candidate_len must be at least {REQUIRED_PREFIX_LEN}, got {}",
                self.min_candidate_len
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
