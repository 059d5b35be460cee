use std::sync::Arc;

use anyhow::{Context as _, anyhow};
use bytes::Bytes;
use url::Url;

use crate::progress::Progress;

/// Plain GET client shared by the identifier resolver and the discussion fetcher.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    progress: Option<Arc<Progress>>,
}

impl Fetcher {
    pub fn new(user_agent: &str, progress: Option<Arc<Progress>>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build reqwest client")?;
        Ok(Self { client, progress })
    }

    pub async fn get_bytes(&self, url: Url) -> anyhow::Result<Bytes> {
        if let Some(p) = &self.progress {
            p.set_stage(format!("GET {url}"));
        }
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("GET {} failed with status {}", url, status));
        }

        let bytes = resp.bytes().await.context("read response body")?;
        tracing::debug!(%url, bytes = bytes.len(), "GET ok");
        Ok(bytes)
    }

    /// Response body decoded lossily; article pages are only scanned for a marker.
    pub async fn get_text(&self, url: Url) -> anyhow::Result<String> {
        let bytes = self.get_bytes(url).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub async fn get_json(&self, url: Url) -> anyhow::Result<serde_json::Value> {
        let bytes = self.get_bytes(url.clone()).await?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse json from {}", url))
    }
}
