use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use werset_index::ChapterEndPolicy;

/// Looked up when neither `--config` nor `WERSET_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterEnd {
    /// A whole-chapter reference into the corpus's final chapter reports end 0
    #[default]
    Legacy,
    /// ... or the last verse of the corpus
    Clamp,
}

impl From<ChapterEnd> for ChapterEndPolicy {
    fn from(value: ChapterEnd) -> Self {
        match value {
            ChapterEnd::Legacy => ChapterEndPolicy::Legacy,
            ChapterEnd::Clamp => ChapterEndPolicy::ClampToCorpusEnd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub books_path: PathBuf,
    pub text_path: PathBuf,
    pub plan_path: Option<PathBuf>,
    /// Compiled corpus; preferred over the text files when set
    pub snapshot_path: Option<PathBuf>,
    pub chapter_end: ChapterEnd,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            books_path: PathBuf::from("data/ksiegi.txt"),
            text_path: PathBuf::from("data/bt.txt"),
            plan_path: None,
            snapshot_path: None,
            chapter_end: ChapterEnd::default(),
        }
    }
}

impl Config {
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// An explicit path must exist; the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    tracing::debug!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("error loading config {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}
