use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::Error;
use crate::Opt;

const DEFAULT_BASE_URL: &str = "https://www.bing.com";

/// Resolved settings for one run: CLI flags merged over the optional JSON
/// config file, with built-in defaults underneath.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    /// Provider origin whose homepage carries the wallpaper link.
    pub base_url: Url,
    pub output_dir: PathBuf,
    pub filename: Option<String>,
    pub convert_png: bool,
}

impl Config {
    /// Merge the config file (if any) with options passed on the command line
    pub fn initialize(opt: &Opt) -> anyhow::Result<Self> {
        let raw = match opt.config_path.as_deref() {
            Some(path) => Raw::from_file(path)?,
            None => match default_config_file() {
                Some(path) if path.try_exists()? => Raw::from_file(&path)?,
                _ => Raw::default(),
            },
        };

        Self::initialize_with_raw(opt, raw)
    }

    fn initialize_with_raw(opt: &Opt, raw: Raw) -> anyhow::Result<Self> {
        let base_url = match opt.base_url.as_ref().or(raw.base_url.as_ref()) {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let output_dir = opt
            .output_dir
            .clone()
            .or(raw.output_dir)
            .ok_or_else(|| {
                Error::Usage(
                    "an output directory is required; pass --output-dir or set output_dir in the config file"
                        .to_string(),
                )
            })?;

        Ok(Self {
            base_url,
            output_dir,
            filename: opt.filename.clone().or(raw.filename),
            convert_png: opt.convert_png || raw.convert_png.unwrap_or(false),
        })
    }
}

/// Config file contents before merging. Every field is optional; a missing
/// file behaves like an empty one.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Raw {
    pub base_url: Option<Url>,
    pub output_dir: Option<PathBuf>,
    pub filename: Option<String>,
    pub convert_png: Option<bool>,
}

impl Raw {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", env!("CARGO_CRATE_NAME"))
        .map(|dirs| dirs.config_dir().join("config.json"))
}
