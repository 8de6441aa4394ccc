//! Draw result endpoints (`/lottery`).

use super::client::{HttpClient, RequestOptions};
use crate::error::Result;
use crate::models::{LotteryResult, LotteryStats, NewLotteryResult, PageQuery, PageResult};

/// Draw data endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LotteryApi<'a> {
    client: &'a HttpClient,
}

impl HttpClient {
    pub fn lottery(&self) -> LotteryApi<'_> {
        LotteryApi { client: self }
    }
}

impl LotteryApi<'_> {
    pub const DEFAULT_RECENT_SIZE: u32 = 10;

    /// Most recent draw, `None` when the backend has no draws yet.
    pub async fn latest(&self) -> Result<Option<LotteryResult>> {
        self.client.get("/lottery/latest", RequestOptions::new()).await
    }

    /// Last `size` draws (default 10).
    pub async fn recent(&self, size: Option<u32>) -> Result<Vec<LotteryResult>> {
        let options =
            RequestOptions::new().query("size", size.unwrap_or(Self::DEFAULT_RECENT_SIZE));
        self.client.get("/lottery/recent", options).await
    }

    /// Paged draw history.
    pub async fn list(&self, page: PageQuery) -> Result<PageResult<LotteryResult>> {
        let options = RequestOptions::new().query_pairs(page.to_query());
        self.client.get("/lottery/list", options).await
    }

    /// Paged search by keyword (issue or numbers).
    pub async fn search(&self, keyword: &str, page: PageQuery) -> Result<PageResult<LotteryResult>> {
        let options = RequestOptions::new()
            .query("keyword", keyword)
            .query_pairs(page.to_query());
        self.client.get("/lottery/search", options).await
    }

    /// Single draw by issue.
    pub async fn by_issue(&self, issue: &str) -> Result<Option<LotteryResult>> {
        let path = format!("/lottery/issue/{}", urlencoding::encode(issue));
        self.client.get(&path, RequestOptions::new()).await
    }

    /// Add a draw; returns the backend-assigned id.
    pub async fn add(&self, result: &NewLotteryResult) -> Result<u64> {
        let options = RequestOptions::new().json(result)?;
        self.client.post("/lottery/add", options).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("/lottery/delete/{id}"), RequestOptions::new())
            .await
    }

    pub async fn stats(&self) -> Result<LotteryStats> {
        self.client.get("/lottery/stats", RequestOptions::new()).await
    }
}
