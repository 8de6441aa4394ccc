//! Home dashboard aggregate (`/index`).

use super::client::{HttpClient, RequestOptions};
use crate::error::Result;
use crate::models::DashboardData;

#[derive(Debug, Clone, Copy)]
pub struct DashboardApi<'a> {
    client: &'a HttpClient,
}

impl HttpClient {
    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi { client: self }
    }
}

impl DashboardApi<'_> {
    /// Latest draw, recent draws and headline counters in one call.
    pub async fn index(&self) -> Result<DashboardData> {
        self.client.get("/index", RequestOptions::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{stub_client, url};
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_index_without_draws() {
        let (client, transport) = stub_client(json!({
            "latest": null,
            "recentResults": [],
            "stats": {"totalCount": 0, "nextIssue": "24001", "methodCount": 10, "statsCount": 0},
            "oddEvenStats": {}
        }));
        let data = client.dashboard().index().await.unwrap();
        assert_eq!(data.latest, None);
        assert_eq!(data.stats.next_issue.as_deref(), Some("24001"));
        assert_eq!(transport.last().url, url("/index"));
    }
}
