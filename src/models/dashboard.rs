//! Home dashboard payload from `/index`.

use super::LotteryResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the home view shows in one round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub latest: Option<LotteryResult>,
    #[serde(default)]
    pub recent_results: Vec<LotteryResult>,
    pub stats: DashboardStats,
    #[serde(default)]
    pub odd_even_stats: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_count: u64,
    #[serde(default)]
    pub next_issue: Option<String>,
    #[serde(default)]
    pub method_count: u32,
    #[serde(default)]
    pub stats_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dashboard_without_draws() {
        let data: DashboardData = serde_json::from_value(json!({
            "latest": null,
            "recentResults": [],
            "stats": {"totalCount": 0, "nextIssue": "24001", "methodCount": 5, "statsCount": 0},
            "oddEvenStats": {"3:2": 12, "2:3": 10}
        }))
        .unwrap();

        assert!(data.latest.is_none());
        assert_eq!(data.stats.next_issue.as_deref(), Some("24001"));
        assert_eq!(data.odd_even_stats.get("3:2"), Some(&12));
    }
}
