use anyhow::{bail, Context, Result};

use crate::detector::{DEFAULT_MAX_NUM_BYTES, DEFAULT_MAX_RESULTS, DEFAULT_MIN_NUM_BYTES};
use crate::filter::{FilterConfig, DEFAULT_PROPORTION_THRESHOLD};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub max_upload_bytes: usize,

    // Filtering
    pub proportion_threshold: f64,
    pub reliable_only_default: bool,

    // Classifier
    pub min_num_bytes: usize,
    pub max_num_bytes: usize,
    pub max_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            max_upload_bytes: 10 * 1024 * 1024,
            proportion_threshold: DEFAULT_PROPORTION_THRESHOLD,
            reliable_only_default: true,
            min_num_bytes: DEFAULT_MIN_NUM_BYTES,
            max_num_bytes: DEFAULT_MAX_NUM_BYTES,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Parse an optional environment variable, failing if it is set but invalid.
fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            // Server
            port: env_or("PORT", defaults.port)?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,

            // Filtering
            proportion_threshold: env_or("PROPORTION_THRESHOLD", defaults.proportion_threshold)?,
            reliable_only_default: env_or("RELIABLE_ONLY_DEFAULT", defaults.reliable_only_default)?,

            // Classifier
            min_num_bytes: env_or("MIN_NUM_BYTES", defaults.min_num_bytes)?,
            max_num_bytes: env_or("MAX_NUM_BYTES", defaults.max_num_bytes)?,
            max_results: env_or("MAX_RESULTS", defaults.max_results)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.proportion_threshold) {
            bail!(
                "PROPORTION_THRESHOLD must be between 0 and 1, got {}",
                self.proportion_threshold
            );
        }
        if self.max_num_bytes == 0 || self.max_num_bytes < self.min_num_bytes {
            bail!(
                "MAX_NUM_BYTES ({}) must be positive and at least MIN_NUM_BYTES ({})",
                self.max_num_bytes,
                self.min_num_bytes
            );
        }
        if self.max_results == 0 {
            bail!("MAX_RESULTS must be positive");
        }
        if self.max_upload_bytes == 0 {
            bail!("MAX_UPLOAD_BYTES must be positive");
        }
        Ok(())
    }

    /// Filter settings for one request, given the user's reliability choice.
    pub fn filter(&self, reliable_only: bool) -> FilterConfig {
        FilterConfig {
            proportion_threshold: self.proportion_threshold,
            reliable_only,
        }
    }
}
