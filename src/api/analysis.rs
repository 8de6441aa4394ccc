//! Statistical analysis endpoints (`/analysis`).

use super::client::{HttpClient, RequestOptions};
use crate::error::Result;
use crate::models::{AssociationRule, Frequency, Missing, NumberPicks, TrendPoint, Zone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Analysis endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisApi<'a> {
    client: &'a HttpClient,
}

impl HttpClient {
    pub fn analysis(&self) -> AnalysisApi<'_> {
        AnalysisApi { client: self }
    }
}

/// Combined statistics returned by [`AnalysisApi::stats`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedStats {
    #[serde(default)]
    pub odd_even_stats: BTreeMap<String, u32>,
    #[serde(default)]
    pub sum_range_stats: BTreeMap<String, u32>,
}

impl AnalysisApi<'_> {
    pub const DEFAULT_TREND_SIZE: u32 = 30;
    pub const DEFAULT_PICK_COUNT: u32 = 10;
    pub const DEFAULT_NETWORK_TOP_N: u32 = 50;

    /// Front-zone frequency, over the last `recent_count` draws when given.
    pub async fn front_frequency(&self, recent_count: Option<u32>) -> Result<Vec<Frequency>> {
        self.frequency(Zone::Front, recent_count).await
    }

    /// Back-zone frequency, over the last `recent_count` draws when given.
    pub async fn back_frequency(&self, recent_count: Option<u32>) -> Result<Vec<Frequency>> {
        self.frequency(Zone::Back, recent_count).await
    }

    async fn frequency(&self, zone: Zone, recent_count: Option<u32>) -> Result<Vec<Frequency>> {
        // Zero means "all draws" and is not sent.
        let options =
            RequestOptions::new().query_opt("recentCount", recent_count.filter(|n| *n != 0));
        self.client
            .get(&format!("/analysis/frequency/{zone}"), options)
            .await
    }

    pub async fn front_missing(&self) -> Result<Vec<Missing>> {
        self.client
            .get("/analysis/missing/front", RequestOptions::new())
            .await
    }

    pub async fn back_missing(&self) -> Result<Vec<Missing>> {
        self.client
            .get("/analysis/missing/back", RequestOptions::new())
            .await
    }

    /// Trend rows for the last `size` draws (default 30).
    pub async fn trend(&self, size: Option<u32>) -> Result<Vec<TrendPoint>> {
        let options =
            RequestOptions::new().query("size", size.unwrap_or(Self::DEFAULT_TREND_SIZE));
        self.client.get("/analysis/trend", options).await
    }

    /// Odd:even ratio distribution, keyed like `"3:2"`.
    pub async fn odd_even_stats(&self) -> Result<BTreeMap<String, u32>> {
        self.client
            .get("/analysis/stats/odd-even", RequestOptions::new())
            .await
    }

    /// Front sum distribution by range.
    pub async fn sum_stats(&self) -> Result<BTreeMap<String, u32>> {
        self.client
            .get("/analysis/stats/sum", RequestOptions::new())
            .await
    }

    /// Draw counts keyed by number of consecutive pairs.
    pub async fn consecutive_stats(&self) -> Result<BTreeMap<u32, u32>> {
        let raw: BTreeMap<String, u32> = self
            .client
            .get("/analysis/stats/consecutive", RequestOptions::new())
            .await?;
        // JSON object keys are strings on the wire.
        Ok(raw
            .into_iter()
            .filter_map(|(k, v)| k.parse().ok().map(|k| (k, v)))
            .collect())
    }

    pub async fn hot_numbers(&self, count: Option<u32>) -> Result<NumberPicks> {
        self.picks("/analysis/hot", count).await
    }

    pub async fn cold_numbers(&self, count: Option<u32>) -> Result<NumberPicks> {
        self.picks("/analysis/cold", count).await
    }

    /// Numbers whose missing streak is about to exceed its average.
    pub async fn missing_due(&self, count: Option<u32>) -> Result<NumberPicks> {
        self.picks("/analysis/missing-due", count).await
    }

    async fn picks(&self, path: &str, count: Option<u32>) -> Result<NumberPicks> {
        let options =
            RequestOptions::new().query("count", count.unwrap_or(Self::DEFAULT_PICK_COUNT));
        self.client.get(path, options).await
    }

    /// Mined association rules for a zone (default front).
    pub async fn association_rules(&self, zone: Option<Zone>) -> Result<Vec<AssociationRule>> {
        let options = RequestOptions::new().query("zone", zone.unwrap_or_default());
        self.client.get("/analysis/association", options).await
    }

    /// Association graph (nodes, links, rules) as received.
    pub async fn association_network(
        &self,
        zone: Option<Zone>,
        top_n: Option<u32>,
    ) -> Result<serde_json::Value> {
        let options = RequestOptions::new()
            .query("zone", zone.unwrap_or_default())
            .query("topN", top_n.unwrap_or(Self::DEFAULT_NETWORK_TOP_N));
        self.client
            .get("/analysis/association/network", options)
            .await
    }

    /// Compatibility call on the odd/even endpoint. Only `odd_even_stats`
    /// is filled; sum ranges come from [`Self::sum_stats`].
    pub async fn stats(&self) -> Result<CombinedStats> {
        Ok(CombinedStats {
            odd_even_stats: self.odd_even_stats().await?,
            sum_range_stats: BTreeMap::new(),
        })
    }
}
