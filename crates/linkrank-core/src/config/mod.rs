//! Configuration management

use crate::error::{LinkRankError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of random-surfer samples
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default cap on iterative sweeps
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Estimator settings
    #[serde(default)]
    pub rank: RankConfig,

    /// Corpus crawling settings
    #[serde(default)]
    pub crawl: CrawlConfig,
}

/// Parameters shared by the rank estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following an outbound link rather than teleporting
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of random-surfer steps taken by the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Seed for the sampling estimator (random when unset)
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,

    /// Safety cap on iterative sweeps
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            seed: default_seed(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl RankConfig {
    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the sample count
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the sampling seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Check that every parameter is in range
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples < 1 {
            return Err(LinkRankError::InvalidArgument(
                "sample count must be at least 1".to_string(),
            ));
        }
        if self.max_iterations < 1 {
            return Err(LinkRankError::InvalidArgument(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reject damping factors outside the open interval (0, 1)
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(LinkRankError::InvalidArgument(format!(
            "damping factor must be in (0, 1), got {}",
            damping
        )))
    }
}

fn default_damping() -> f64 {
    std::env::var("LINKRANK_DAMPING")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DAMPING)
}

fn default_samples() -> usize {
    std::env::var("LINKRANK_SAMPLES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SAMPLES)
}

fn default_seed() -> Option<u64> {
    std::env::var("LINKRANK_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
}

fn default_max_iterations() -> usize {
    std::env::var("LINKRANK_MAX_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_ITERATIONS)
}

/// Corpus crawling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Glob pattern for documents, matched against the path relative to the corpus root
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            recursive: false,
        }
    }
}

fn default_pattern() -> String {
    "*.html".to_string()
}

impl Config {
    /// Load config from `$LINKRANK_CONFIG` or the default path
    pub fn load() -> Result<Self> {
        let path = std::env::var("LINKRANK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        Self::load_from(&path)
    }

    /// Load config from a YAML file, falling back to defaults when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to a YAML file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }
}
