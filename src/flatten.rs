use std::sync::LazyLock;

use regex::Regex;

use crate::discussion::{Comment, Discussion, Response};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("tag regex"));

/// One row of the output table. Comments and responses share this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub name: String,
    pub date: String,
    pub likes: i64,
    pub is_pinned: bool,
    pub comment: String,
}

impl From<&Comment> for CommentRecord {
    fn from(c: &Comment) -> Self {
        Self {
            name: c.user_profile.display_name.clone(),
            date: c.date.clone(),
            likes: c.num_recommends,
            is_pinned: c.is_highlighted,
            comment: clean_body(&c.body),
        }
    }
}

impl From<&Response> for CommentRecord {
    fn from(r: &Response) -> Self {
        Self {
            name: r.user_profile.display_name.clone(),
            date: r.date.clone(),
            likes: r.num_recommends,
            is_pinned: r.is_highlighted,
            comment: clean_body(&r.body),
        }
    }
}

/// Each top-level comment followed by its responses, in API order.
pub fn flatten(discussion: &Discussion) -> Vec<CommentRecord> {
    let total = discussion
        .comments
        .iter()
        .map(|c| 1 + c.responses.len())
        .sum();
    let mut rows = Vec::with_capacity(total);
    for comment in &discussion.comments {
        rows.push(CommentRecord::from(comment));
        rows.extend(comment.responses.iter().map(CommentRecord::from));
    }
    rows
}

/// Removes anything that looks like a tag. Not an HTML parser: entities stay encoded and
/// a lone `<` without a closing `>` on the same line is kept.
pub fn strip_html_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

fn clean_body(body: &str) -> String {
    strip_html_tags(body).trim().to_string()
}
