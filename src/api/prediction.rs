//! Prediction endpoints (`/prediction`).

use super::client::{HttpClient, RequestOptions};
use crate::error::Result;
use crate::models::{PageQuery, PageResult, PredictionMethodInfo, PredictionRecord, PredictionResult};

/// Prediction endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PredictionApi<'a> {
    client: &'a HttpClient,
}

impl HttpClient {
    pub fn prediction(&self) -> PredictionApi<'_> {
        PredictionApi { client: self }
    }
}

impl PredictionApi<'_> {
    pub const DEFAULT_COUNT: u32 = 5;
    pub const DEFAULT_CANDIDATE_COUNT: u32 = 10;
    pub const DEFAULT_RECENT_LIMIT: u32 = 20;

    /// Methods the backend can run.
    pub async fn methods(&self) -> Result<Vec<PredictionMethodInfo>> {
        self.client.get("/prediction/methods", RequestOptions::new()).await
    }

    /// Generate and store `count` predictions (default 5).
    ///
    /// `method` is a method code such as `"MARKOV"`; the backend picks when
    /// absent. Absent optionals are left out of the query.
    pub async fn generate(
        &self,
        count: Option<u32>,
        method: Option<&str>,
        target_issue: Option<&str>,
    ) -> Result<Vec<PredictionResult>> {
        let options = RequestOptions::new()
            .query("count", count.unwrap_or(Self::DEFAULT_COUNT))
            .query_opt("method", method)
            .query_opt("targetIssue", target_issue);
        self.client.post("/prediction/generate", options).await
    }

    /// Best ticket per method, chosen among `candidate_count` candidates.
    pub async fn generate_best(
        &self,
        candidate_count: Option<u32>,
        target_issue: Option<&str>,
    ) -> Result<Vec<PredictionResult>> {
        let options = RequestOptions::new()
            .query(
                "candidateCount",
                candidate_count.unwrap_or(Self::DEFAULT_CANDIDATE_COUNT),
            )
            .query_opt("targetIssue", target_issue);
        self.client.post("/prediction/generate/best", options).await
    }

    pub async fn by_issue(&self, issue: &str) -> Result<Vec<PredictionResult>> {
        let path = format!("/prediction/issue/{}", urlencoding::encode(issue));
        self.client.get(&path, RequestOptions::new()).await
    }

    pub async fn recent(&self, limit: Option<u32>) -> Result<Vec<PredictionResult>> {
        let options =
            RequestOptions::new().query("limit", limit.unwrap_or(Self::DEFAULT_RECENT_LIMIT));
        self.client.get("/prediction/recent", options).await
    }

    pub async fn list(&self, page: PageQuery) -> Result<PageResult<PredictionRecord>> {
        let options = RequestOptions::new().query_pairs(page.to_query());
        self.client.get("/prediction/list", options).await
    }

    pub async fn detail(&self, id: u64) -> Result<PredictionRecord> {
        self.client
            .get(&format!("/prediction/{id}"), RequestOptions::new())
            .await
    }

    /// Target issues that still have unverified predictions, newest first.
    pub async fn unverified_issues(&self) -> Result<Vec<String>> {
        self.client
            .get("/prediction/unverified/issues", RequestOptions::new())
            .await
    }

    /// Score predictions; the backend returns them sorted by descending score.
    pub async fn score(&self, predictions: &[PredictionResult]) -> Result<Vec<PredictionResult>> {
        let options = RequestOptions::new().json(predictions)?;
        self.client.post("/prediction/score", options).await
    }
}
