use std::path::{Path, PathBuf};

use anyhow::Context as _;
use url::Url;

use crate::cli::{Args, FailurePolicy, ProgressMode};

/// Which artifacts get written next to each article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    pub csv: bool,
    pub json: bool,
}

impl SaveOptions {
    pub fn none() -> Self {
        Self {
            csv: false,
            json: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub urls: Vec<String>,
    pub output_root: PathBuf,
    pub fallback_dir: PathBuf,
    pub save: SaveOptions,
    pub api_base: Url,
    pub on_error: FailurePolicy,
    pub user_agent: String,
    pub progress: ProgressMode,
}

impl Config {
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let urls = if args.url.is_empty() {
            read_urls(&args.urls)?
        } else {
            args.url.iter().map(|u| u.to_string()).collect()
        };

        let save = if args.no_save {
            SaveOptions::none()
        } else {
            SaveOptions {
                csv: !args.no_csv,
                json: !args.no_json,
            }
        };

        Ok(Self {
            urls,
            output_root: args.out,
            fallback_dir: args.fallback_dir,
            save,
            api_base: with_trailing_slash(args.api_base),
            on_error: args.on_error,
            user_agent: args.user_agent,
            progress: args.progress,
        })
    }
}

pub fn read_urls(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read url list {}", path.display()))?;
    Ok(parse_url_list(&text))
}

fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

// `Url::join` replaces the last path segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
