use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::{ReferrerRule, ReferrerTable, TruncateOptions};

pub const CONFIG_FILE: &str = "linkfmt.toml";

const BLOCKED_IMAGE_DOMAINS: &[&str] = &["notion.site", "abs.xyz", "github.com", "railway.xyz", "t.me"];

const KNOWN_BAD_IMAGES: &[&str] = &[
    "https://paragraph.xyz/share/share_img.jpg",
    "https://s.turbifycdn.com/aah/paulgraham/essays-5.gif",
];

/// Settings read from `linkfmt.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub truncate: TruncateOptions,
    /// Extra platforms, consulted after the built-in ones.
    #[serde(rename = "referrer")]
    pub referrers: Vec<ReferrerRule>,
    pub images: ImageConfig,
}

/// Additions to the built-in preview image blocklists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    pub blocked_domains: Vec<String>,
    pub known_bad: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Loads `explicit` if given, else the nearest `linkfmt.toml`, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match std::env::current_dir().ok().and_then(|dir| find_config_file(&dir)) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn referrer_table(&self) -> ReferrerTable {
        ReferrerTable::with_extra(self.referrers.iter().cloned())
    }

    pub fn image_policy(&self) -> ImagePolicy {
        ImagePolicy::with_extra(&self.images)
    }
}

/// Finds `linkfmt.toml` by walking up from `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start;

    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        dir = dir.parent()?;
    }
}

/// Decides whether a story's preview image is worth showing.
///
/// Some sites serve the same generic image for every page, so whole domains
/// are skipped along with a few specific image URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePolicy {
    blocked_domains: Vec<String>,
    known_bad: Vec<String>,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            blocked_domains: BLOCKED_IMAGE_DOMAINS.iter().map(|&d| d.to_owned()).collect(),
            known_bad: KNOWN_BAD_IMAGES.iter().map(|&i| i.to_owned()).collect(),
        }
    }
}

impl ImagePolicy {
    pub fn with_extra(extra: &ImageConfig) -> Self {
        let mut policy = Self::default();
        policy.blocked_domains.extend(extra.blocked_domains.iter().cloned());
        policy.known_bad.extend(extra.known_bad.iter().cloned());
        policy
    }

    /// `domain` is the registrable domain of the story link.
    pub fn allows(&self, domain: &str, image: &str) -> bool {
        !self.blocked_domains.iter().any(|d| d == domain) && !self.known_bad.iter().any(|i| i == image)
    }
}
