use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use url::Url;

use crate::domain::page::Page;

use super::PipelineError;

pub struct PageFetcher {
    client: reqwest::Client,
    page_path: PathBuf,
}

impl PageFetcher {
    pub fn new(
        user_agent: &str,
        timeout: Duration,
        page_path: impl Into<PathBuf>,
    ) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(PageFetcher {
            client,
            page_path: page_path.into(),
        })
    }

    pub fn page_path(&self) -> &Path {
        &self.page_path
    }

    /// Single GET, no retries. 4xx/5xx count as network failures. The raw
    /// markup is written to `page_path` before the page is handed back.
    pub async fn fetch(&self, url: &Url) -> Result<Page, PipelineError> {
        let res = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;

        let html_content = res.text().await?;
        log::info!("Fetched {} bytes from {}", html_content.len(), url);

        tokio::fs::write(&self.page_path, &html_content).await?;

        Ok(Page::new(url.clone(), html_content))
    }
}
