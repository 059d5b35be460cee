use anyhow::Context as _;
use serde::Deserialize;
use url::Url;

use crate::fetcher::Fetcher;

/// Discussion API payload: the raw JSON for archiving plus the typed view used for flattening.
#[derive(Debug)]
pub struct DiscussionDocument {
    pub raw: serde_json::Value,
    pub discussion: Discussion,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    discussion: Discussion,
}

#[derive(Debug, Deserialize)]
pub struct Discussion {
    pub title: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub user_profile: UserProfile,
    pub date: String,
    pub num_recommends: i64,
    pub is_highlighted: bool,
    pub body: String,
    #[serde(default)]
    pub responses: Vec<Response>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub user_profile: UserProfile,
    pub date: String,
    pub num_recommends: i64,
    pub is_highlighted: bool,
    pub body: String,
}

impl DiscussionDocument {
    pub fn from_value(raw: serde_json::Value) -> anyhow::Result<Self> {
        let envelope = Envelope::deserialize(&raw).context("decode discussion document")?;
        Ok(Self {
            raw,
            discussion: envelope.discussion,
        })
    }
}

pub fn discussion_url(api_base: &Url, id: &str) -> anyhow::Result<Url> {
    // Short ids look like `/p/abc12`; keep the path relative to the base.
    let rel = id.trim_start_matches('/');
    api_base
        .join(rel)
        .with_context(|| format!("build discussion url for {}", id))
}

pub async fn fetch_discussion(
    fetcher: &Fetcher,
    api_base: &Url,
    id: &str,
) -> anyhow::Result<DiscussionDocument> {
    let url = discussion_url(api_base, id)?;
    let raw = fetcher
        .get_json(url.clone())
        .await
        .with_context(|| format!("download discussion {}", url))?;
    DiscussionDocument::from_value(raw).with_context(|| format!("discussion {}", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discussion_url_from_short_id() {
        let base = Url::parse(crate::cli::DEFAULT_API_BASE).unwrap();
        assert_eq!(
            discussion_url(&base, "/p/abc12").unwrap().as_str(),
            "http://discussion.theguardian.com/discussion-api/discussion/p/abc12"
        );
    }

    #[test]
    fn decodes_comments_with_and_without_responses() {
        let raw = serde_json::json!({
            "status": "ok",
            "discussion": {
                "key": "/p/abc12",
                "title": "A title",
                "comments": [
                    {
                        "id": 1,
                        "body": "<p>one</p>",
                        "date": "01 January 2024 10:00am",
                        "isHighlighted": true,
                        "numRecommends": 4,
                        "userProfile": { "displayName": "alice", "userId": "1" },
                        "responses": [
                            {
                                "id": 2,
                                "body": "<p>two</p>",
                                "date": "01 January 2024 10:05am",
                                "isHighlighted": false,
                                "numRecommends": 0,
                                "userProfile": { "displayName": "bob" }
                            }
                        ]
                    },
                    {
                        "id": 3,
                        "body": "three",
                        "date": "01 January 2024 11:00am",
                        "isHighlighted": false,
                        "numRecommends": 1,
                        "userProfile": { "displayName": "carol" }
                    }
                ]
            }
        });
        let doc = DiscussionDocument::from_value(raw.clone()).unwrap();
        assert_eq!(doc.raw, raw);
        assert_eq!(doc.discussion.title, "A title");
        assert_eq!(doc.discussion.comments.len(), 2);
        assert_eq!(doc.discussion.comments[0].responses.len(), 1);
        assert!(doc.discussion.comments[1].responses.is_empty());
    }

    #[test]
    fn unexpected_shape_is_an_error() {
        let raw = serde_json::json!({ "status": "error", "message": "not found" });
        assert!(DiscussionDocument::from_value(raw).is_err());
    }
}
