//! Calendar feed fetcher.
//!
//! Retrieves the raw iCalendar document over HTTP. Any transport failure or
//! non-success status is reported as a single feed error; no partial results.

use std::time::Duration;

use crate::errors::AppError;

/// HTTP client for the external iCalendar feed.
#[derive(Clone)]
pub struct FeedClient {
    http: reqwest::Client,
}

impl FeedClient {
    pub fn new() -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { http })
    }

    /// Fetch the raw feed text from `url`.
    pub async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::Feed(format!(
                "Feed request failed with status {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}
