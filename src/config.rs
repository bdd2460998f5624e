use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Runtime knobs for matrix building.
///
/// None of these change the numbers that come out; they only decide
/// how the work is scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// use the rayon pool for per-row and per-pair work
    pub parallel: bool,
    /// corpora smaller than this stay on the calling thread
    pub parallel_min_docs: usize,
    /// vectorize every document once per report instead of once per matrix
    pub memoize_counts: bool,
    /// decimal places used when a matrix is rendered with `Display`
    pub display_precision: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_min_docs: 64,
            memoize_counts: false,
            display_precision: 4,
        }
    }
}

impl VectorizerConfig {
    /// Parse from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config { path: None, source })
    }

    /// Load from a TOML file and apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text).map_err(|source| Error::Config {
            path: Some(path.to_path_buf()),
            source,
        })?;
        Ok(config.with_env_overrides())
    }

    /// `TFIDF_PARALLEL` and `TFIDF_MEMOIZE` accept 1/0/true/false
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_flag("TFIDF_PARALLEL") {
            self.parallel = v;
        }
        if let Some(v) = env_flag("TFIDF_MEMOIZE") {
            self.memoize_counts = v;
        }
        self
    }

    /// Whether a corpus of `doc_num` documents should go to the pool
    #[inline]
    pub fn use_parallel(&self, doc_num: usize) -> bool {
        self.parallel && doc_num >= self.parallel_min_docs
    }
}

fn env_flag(key: &str) -> Option<bool> {
    match env::var(key).ok()?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
