//! Verification, accuracy ranking and backtest endpoints (`/verification`).

use super::client::{HttpClient, RequestOptions};
use crate::error::Result;
use crate::models::{
    AccuracyStats, BacktestResult, PageQuery, PageResult, PredictionResult, RankingSort,
    VerificationHistoryRecord,
};

/// Verification endpoints.
#[derive(Debug, Clone, Copy)]
pub struct VerificationApi<'a> {
    client: &'a HttpClient,
}

impl HttpClient {
    pub fn verification(&self) -> VerificationApi<'_> {
        VerificationApi { client: self }
    }
}

impl VerificationApi<'_> {
    pub const DEFAULT_ISSUE_COUNT: u32 = 50;
    pub const DEFAULT_PREDICTIONS_PER_ISSUE: u32 = 5;

    /// Accuracy per prediction method.
    pub async fn accuracy_stats(&self) -> Result<Vec<AccuracyStats>> {
        self.client
            .get("/verification/stats", RequestOptions::new())
            .await
    }

    /// Accuracy ranking, descending unless `ascending` is set.
    pub async fn accuracy_ranking(
        &self,
        sort_by: RankingSort,
        ascending: Option<bool>,
    ) -> Result<Vec<AccuracyStats>> {
        let options = RequestOptions::new()
            .query("sortBy", sort_by.as_str())
            .query("ascending", ascending.unwrap_or(false));
        self.client
            .get("/verification/stats/ranking", options)
            .await
    }

    pub async fn history(&self, page: PageQuery) -> Result<PageResult<VerificationHistoryRecord>> {
        let options = RequestOptions::new().query_pairs(page.to_query());
        self.client.get("/verification/history", options).await
    }

    pub async fn unverified_issues(&self) -> Result<Vec<String>> {
        self.client
            .get("/verification/unverified/issues", RequestOptions::new())
            .await
    }

    /// Whether the draw for `issue` has been recorded.
    pub async fn check_draw_result(&self, issue: &str) -> Result<bool> {
        let path = format!("/verification/check/{}", urlencoding::encode(issue));
        self.client.get(&path, RequestOptions::new()).await
    }

    /// Verify every stored prediction for `issue` against its draw.
    pub async fn trigger_verify(&self, issue: &str) -> Result<Vec<PredictionResult>> {
        let path = format!("/verification/verify/{}", urlencoding::encode(issue));
        self.client.post(&path, RequestOptions::new()).await
    }

    /// Replay methods over past draws.
    ///
    /// Runs under the longer backtest timeout instead of the client default.
    /// With no `method` every method is backtested.
    pub async fn run_backtest(
        &self,
        method: Option<&str>,
        issue_count: Option<u32>,
        predictions_per_issue: Option<u32>,
    ) -> Result<Vec<BacktestResult>> {
        let options = RequestOptions::new()
            .query_opt("method", method)
            .query("issueCount", issue_count.unwrap_or(Self::DEFAULT_ISSUE_COUNT))
            .query(
                "predictionsPerIssue",
                predictions_per_issue.unwrap_or(Self::DEFAULT_PREDICTIONS_PER_ISSUE),
            )
            .timeout(self.client.backtest_timeout());
        tracing::info!(?method, timeout = ?self.client.backtest_timeout(), "Starting backtest");
        self.client.post("/verification/backtest", options).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{query, stub_client, url};
    use super::super::transport::Method;
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_backtest_uses_long_timeout() {
        let (client, transport) = stub_client(json!([]));
        client
            .verification()
            .run_backtest(None, None, None)
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, url("/verification/backtest"));
        assert_eq!(request.timeout, Duration::from_millis(120_000));
        assert_eq!(
            query(&request),
            vec![("issueCount", "50"), ("predictionsPerIssue", "5")]
        );
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_other_calls_use_default_timeout() {
        let (client, transport) = stub_client(json!([]));
        client.verification().accuracy_stats().await.unwrap();
        assert_eq!(transport.last().timeout, Duration::from_millis(30_000));
    }

    #[tokio::test]
    async fn test_backtest_with_method() {
        let (client, transport) = stub_client(json!([{
            "method": "MARKOV", "methodName": "Markov Chain",
            "totalIssues": 20, "avgFrontHit": 1.25, "details": []
        }]));
        let results = client
            .verification()
            .run_backtest(Some("MARKOV"), Some(20), Some(3))
            .await
            .unwrap();
        assert_eq!(results[0].total_issues, 20);
        assert_eq!(
            query(&transport.last()),
            vec![("method", "MARKOV"), ("issueCount", "20"), ("predictionsPerIssue", "3")]
        );
    }

    #[tokio::test]
    async fn test_ranking_defaults() {
        let (client, transport) = stub_client(json!([]));
        client
            .verification()
            .accuracy_ranking(RankingSort::default(), None)
            .await
            .unwrap();
        assert_eq!(
            query(&transport.last()),
            vec![("sortBy", "composite"), ("ascending", "false")]
        );

        client
            .verification()
            .accuracy_ranking(RankingSort::Prize, Some(true))
            .await
            .unwrap();
        assert_eq!(
            query(&transport.last()),
            vec![("sortBy", "prize"), ("ascending", "true")]
        );
    }

    #[tokio::test]
    async fn test_stats_tolerate_null_aggregates() {
        let (client, _transport) = stub_client(json!([{
            "methodName": "Hot", "totalPredictions": null,
            "frontAvgHit": null, "backAvgHit": null, "prizeRate": null
        }]));
        let stats = client.verification().accuracy_stats().await.unwrap();
        assert_eq!(stats[0].total_predictions, 0);
        assert_eq!(stats[0].method_name, "Hot");
    }

    #[tokio::test]
    async fn test_check_and_verify_paths() {
        let (client, transport) = stub_client(json!(true));
        assert!(client.verification().check_draw_result("24010").await.unwrap());
        assert_eq!(transport.last().url, url("/verification/check/24010"));

        let (client, transport) = stub_client(json!([]));
        let verified = client.verification().trigger_verify("24010").await.unwrap();
        assert!(verified.is_empty());
        assert_eq!(transport.last().method, Method::Post);
        assert_eq!(transport.last().url, url("/verification/verify/24010"));
    }

    #[tokio::test]
    async fn test_history_page() {
        let (client, transport) = stub_client(json!({
            "records": [{"id": 4, "targetIssue": "24009", "frontHitCount": 2, "backHitCount": 1, "prizeLevel": "9"}],
            "total": 1, "size": 10, "current": 1, "pages": 1
        }));
        let page = client
            .verification()
            .history(PageQuery::new(1, 10))
            .await
            .unwrap();
        assert_eq!(page.records[0].front_hit_count, 2);
        assert_eq!(query(&transport.last()), vec![("page", "1"), ("size", "10")]);
    }
}
