use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://discussion.theguardian.com/discussion-api/discussion/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Log the failed article and move on to the next URL.
    Continue,
    /// Stop the whole batch at the first failed article.
    Abort,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Text file with one article URL per line. Blank lines and `#` comments are skipped.
    #[arg(long, default_value = "urls.txt")]
    pub urls: PathBuf,

    /// Article URL to export. May be repeated; when given, `--urls` is not read.
    #[arg(long = "url")]
    pub url: Vec<Url>,

    /// Output root. Each article gets `<out>/<sanitized title>/`.
    #[arg(long, default_value = "data")]
    pub out: PathBuf,

    /// Directory used for the CSV file when the per-article directory cannot be created.
    #[arg(long, default_value = "article")]
    pub fallback_dir: PathBuf,

    /// Print the comment table only; write nothing to disk.
    #[arg(long)]
    pub no_save: bool,

    /// Skip `guardian_comments.csv`.
    #[arg(long)]
    pub no_csv: bool,

    /// Skip `discussion.json`.
    #[arg(long)]
    pub no_json: bool,

    /// Discussion API endpoint; the discussion identifier is appended to it.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: Url,

    /// What to do when one article fails to resolve or download.
    #[arg(long, value_enum, default_value = "continue")]
    pub on_error: FailurePolicy,

    /// HTTP User-Agent used for article pages and the discussion API.
    #[arg(long, default_value = "guardian-comment-export/0.1")]
    pub user_agent: String,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}
