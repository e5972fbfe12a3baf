//! TOML configuration for the knowledge base tools
//!
//! Every section is optional; omitted values fall back to the built-in
//! knowledge base defaults.
//!
//! ```toml
//! [annotations]
//! keep = ["Google Drive", "Role Spec"]
//! exclude_markers = [".git", "__pycache__"]
//!
//! [count]
//! extensions = ["md"]
//! top = 10
//!
//! [faq]
//! keyword_separator = "、"
//! ```

use anyhow::Context;
use annotation_engine::AllowList;
use corpus_core::DiscoveryOptions;
use faq_markdown::FaqLabels;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the root when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "kb-tools.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub annotations: AnnotationsConfig,
    pub count: CountConfig,
    pub faq: FaqLabels,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path must exist. Without one, `kb-tools.toml` in `root`
    /// is used when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>, root: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate: PathBuf = root.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }
}

/// Annotation scan and removal settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationsConfig {
    /// Allow-list for selective removal; the built-in list when absent
    pub keep: Option<AllowList>,
    pub exclude_markers: Vec<String>,
}

impl Default for AnnotationsConfig {
    fn default() -> Self {
        Self {
            keep: None,
            exclude_markers: DiscoveryOptions::markdown().exclude_markers,
        }
    }
}

impl AnnotationsConfig {
    pub fn allow_list(&self) -> AllowList {
        self.keep.clone().unwrap_or_else(AllowList::knowledge_base)
    }

    pub fn discovery(&self) -> DiscoveryOptions {
        DiscoveryOptions::new(["md"], self.exclude_markers.iter().cloned())
    }
}

/// Word counter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountConfig {
    pub extensions: Vec<String>,
    pub exclude_markers: Vec<String>,
    /// Length of the largest-files list
    pub top: usize,
}

impl Default for CountConfig {
    fn default() -> Self {
        let discovery = DiscoveryOptions::word_count();
        Self {
            extensions: discovery.extensions,
            exclude_markers: discovery.exclude_markers,
            top: 10,
        }
    }
}

impl CountConfig {
    pub fn discovery(&self) -> DiscoveryOptions {
        DiscoveryOptions::new(&self.extensions, self.exclude_markers.iter().cloned())
    }
}
