use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Serialize as _;

use crate::flatten::CommentRecord;
use crate::table::{COLUMNS, bool_label};

pub const CSV_FILE_NAME: &str = "guardian_comments.csv";
pub const JSON_FILE_NAME: &str = "discussion.json";

/// Result of one sink for one article. Never fatal to the run.
#[derive(Debug)]
pub enum ExportOutcome {
    /// Saving is turned off for this sink.
    Skipped,
    Saved(PathBuf),
    Failed(anyhow::Error),
}

impl ExportOutcome {
    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Saved(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ExportOutcome::Failed(_))
    }
}

/// Where one article's artifacts go.
#[derive(Debug, Clone)]
pub struct ArticleDir {
    pub primary: PathBuf,
    pub fallback: PathBuf,
}

impl ArticleDir {
    pub fn new(output_root: &Path, fallback: &Path, sanitized_title: &str) -> Self {
        // A title made only of punctuation sanitizes to nothing; don't write into the root.
        let primary = if sanitized_title.trim().is_empty() {
            fallback.to_path_buf()
        } else {
            output_root.join(sanitized_title)
        };
        Self {
            primary,
            fallback: fallback.to_path_buf(),
        }
    }
}

pub fn export_csv(records: &[CommentRecord], dir: &ArticleDir, enabled: bool) -> ExportOutcome {
    if !enabled {
        return ExportOutcome::Skipped;
    }
    match write_csv(records, dir) {
        Ok(path) => ExportOutcome::Saved(path),
        Err(e) => ExportOutcome::Failed(e),
    }
}

pub fn export_json(raw: &serde_json::Value, dir: &ArticleDir, enabled: bool) -> ExportOutcome {
    if !enabled {
        return ExportOutcome::Skipped;
    }
    match write_json(raw, &dir.primary) {
        Ok(path) => ExportOutcome::Saved(path),
        Err(e) => ExportOutcome::Failed(e),
    }
}

fn write_csv(records: &[CommentRecord], dir: &ArticleDir) -> anyhow::Result<PathBuf> {
    let folder = match std::fs::create_dir_all(&dir.primary) {
        Ok(()) => dir.primary.clone(),
        Err(e) => {
            tracing::warn!(
                primary = %dir.primary.display(),
                fallback = %dir.fallback.display(),
                error = %e,
                "cannot create article directory; using fallback"
            );
            std::fs::create_dir_all(&dir.fallback)
                .with_context(|| format!("create {}", dir.fallback.display()))?;
            dir.fallback.clone()
        }
    };

    let path = folder.join(CSV_FILE_NAME);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("create {}", path.display()))?;
    write_csv_rows(&mut writer, records)?;
    writer
        .flush()
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

fn write_csv_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[CommentRecord],
) -> anyhow::Result<()> {
    let mut header = vec![""];
    header.extend(COLUMNS);
    writer.write_record(&header).context("write csv header")?;

    for (i, r) in records.iter().enumerate() {
        let index = (i + 1).to_string();
        let likes = r.likes.to_string();
        writer
            .write_record([
                index.as_str(),
                r.name.as_str(),
                r.date.as_str(),
                likes.as_str(),
                bool_label(r.is_pinned),
                r.comment.as_str(),
            ])
            .with_context(|| format!("write csv row {}", i + 1))?;
    }
    Ok(())
}

fn write_json(raw: &serde_json::Value, folder: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(folder).with_context(|| format!("create {}", folder.display()))?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    raw.serialize(&mut ser).context("serialize discussion json")?;

    let path = folder.join(JSON_FILE_NAME);
    let mut file =
        std::fs::File::create(&path).with_context(|| format!("create {}", path.display()))?;
    file.write_all(&buf)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
