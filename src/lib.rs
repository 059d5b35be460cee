mod cli;
mod config;
mod discussion;
mod export;
mod fetcher;
mod flatten;
mod progress;
mod resolver;
mod sanitize;
mod table;

use std::sync::Arc;

use anyhow::Context as _;
use fetcher::Fetcher;
use progress::Progress;
use url::Url;

pub use cli::{Args as CliArgs, DEFAULT_API_BASE, FailurePolicy, ProgressMode};
pub use config::{Config, SaveOptions};
pub use discussion::{Discussion, DiscussionDocument};
pub use export::{ArticleDir, CSV_FILE_NAME, ExportOutcome, JSON_FILE_NAME};
pub use flatten::{CommentRecord, flatten, strip_html_tags};
pub use resolver::find_short_url_id;
pub use sanitize::sanitize_title;
pub use table::render_table;

/// What happened to one article URL.
#[derive(Debug)]
pub struct ArticleReport {
    pub url: String,
    pub title: String,
    pub records: Vec<CommentRecord>,
    pub csv: ExportOutcome,
    pub json: ExportOutcome,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub articles: Vec<ArticleReport>,
    /// URL and rendered error chain for every article that could not be fetched.
    pub failures: Vec<(String, String)>,
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        self.articles.len() + self.failures.len()
    }
}

pub async fn run(args: CliArgs) -> anyhow::Result<RunSummary> {
    let config = Config::from_args(args)?;
    run_with_config(&config).await
}

pub async fn run_with_config(config: &Config) -> anyhow::Result<RunSummary> {
    use std::io::IsTerminal as _;

    let progress_enabled = match config.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let progress = Progress::new(progress_enabled, config.urls.len());
    let fetcher = Fetcher::new(&config.user_agent, Some(progress.clone()))?;

    tracing::info!(
        count = config.urls.len(),
        out = %config.output_root.display(),
        "exporting discussions"
    );

    let mut summary = RunSummary::default();
    for raw_url in &config.urls {
        match process_article(raw_url, config, &fetcher, &progress).await {
            Ok(report) => {
                progress.article_done(true);
                summary.articles.push(report);
            }
            Err(e) => {
                progress.article_done(false);
                match config.on_error {
                    FailurePolicy::Abort => {
                        progress.finish();
                        return Err(e);
                    }
                    FailurePolicy::Continue => {
                        tracing::error!(url = %raw_url, error = %format!("{e:#}"), "article failed");
                        summary.failures.push((raw_url.clone(), format!("{e:#}")));
                    }
                }
            }
        }
    }

    progress.finish();
    Ok(summary)
}

async fn process_article(
    raw_url: &str,
    config: &Config,
    fetcher: &Fetcher,
    progress: &Arc<Progress>,
) -> anyhow::Result<ArticleReport> {
    let article = Url::parse(raw_url).with_context(|| format!("parse article url {raw_url}"))?;

    progress.set_stage("resolving discussion id");
    let id = resolver::resolve_discussion_id(fetcher, &article).await?;

    progress.set_stage("downloading discussion");
    let doc = discussion::fetch_discussion(fetcher, &config.api_base, &id).await?;

    let records = flatten(&doc.discussion);
    let title = doc.discussion.title.clone();
    progress.println(format!("Title: {title}"));
    progress.println(render_table(&records));

    let dir = ArticleDir::new(
        &config.output_root,
        &config.fallback_dir,
        &sanitize_title(&title),
    );

    let csv = export::export_csv(&records, &dir, config.save.csv);
    report_outcome(progress, &csv, "Saved data to", "Failed to save csv file");

    let json = export::export_json(&doc.raw, &dir, config.save.json);
    report_outcome(progress, &json, "Saved JSON file to", "Failed to save JSON file");

    Ok(ArticleReport {
        url: raw_url.to_string(),
        title,
        records,
        csv,
        json,
    })
}

fn report_outcome(progress: &Progress, outcome: &ExportOutcome, saved: &str, failed: &str) {
    match outcome {
        ExportOutcome::Skipped => {}
        ExportOutcome::Saved(path) => progress.println(format!("{saved} {}", path.display())),
        ExportOutcome::Failed(e) => {
            tracing::warn!(error = %format!("{e:#}"), "{failed}");
            progress.println(failed);
        }
    }
}
