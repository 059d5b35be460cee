use anyhow::Context as _;
use url::Url;

use crate::fetcher::Fetcher;

const SHORT_URL_MARKER: &str = "\"shortUrlId\":";

/// Extracts the discussion identifier embedded in an article page.
///
/// The page carries a JSON blob with `"shortUrlId":"/p/abc12"`. The value runs from the
/// marker to the next `,` or `}` and is stripped of whitespace and quotes. Returns `None`
/// when the marker is missing or the value is empty.
pub fn find_short_url_id(body: &str) -> Option<String> {
    let start = body.find(SHORT_URL_MARKER)? + SHORT_URL_MARKER.len();
    let rest = &body[start..];
    let end = rest.find([',', '}']).unwrap_or(rest.len());
    let id = rest[..end].trim().trim_matches('"').trim();
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

pub async fn resolve_discussion_id(fetcher: &Fetcher, article: &Url) -> anyhow::Result<String> {
    let body = fetcher
        .get_text(article.clone())
        .await
        .with_context(|| format!("download article {}", article))?;

    let id = find_short_url_id(&body)
        .with_context(|| format!("no shortUrlId marker in article {}", article))?;
    tracing::debug!(%article, id = %id, "resolved discussion id");
    Ok(id)
}
