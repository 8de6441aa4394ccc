//! Verification, accuracy ranking and backtest payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated verification metrics for one prediction method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyStats {
    #[serde(default)]
    pub predict_method: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub method_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_predictions: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub front_avg_hit: Decimal,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub back_avg_hit: Decimal,
    #[serde(default)]
    pub prize_count1: Option<u32>,
    #[serde(default)]
    pub prize_count2: Option<u32>,
    #[serde(default)]
    pub prize_count3: Option<u32>,
    #[serde(default)]
    pub prize_count4: Option<u32>,
    #[serde(default)]
    pub prize_count5: Option<u32>,
    #[serde(default)]
    pub prize_count6: Option<u32>,
    #[serde(default)]
    pub prize_count7: Option<u32>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_prize_count: u32,
    #[serde(default)]
    pub prize_rate: Option<f64>,
    #[serde(default)]
    pub front_hit_rate: Option<f64>,
    #[serde(default)]
    pub back_hit_rate: Option<f64>,
    #[serde(default)]
    pub composite_score: Option<f64>,
    #[serde(default)]
    pub high_prize_count: Option<u32>,
    #[serde(default)]
    pub rank: Option<u32>,
}

impl AccuracyStats {
    /// Per-level prize counts, first to seventh prize.
    pub fn prize_counts(&self) -> [Option<u32>; 7] {
        [
            self.prize_count1,
            self.prize_count2,
            self.prize_count3,
            self.prize_count4,
            self.prize_count5,
            self.prize_count6,
            self.prize_count7,
        ]
    }
}

/// Sort key accepted by `/verification/stats/ranking`. Unknown keys are
/// ranked as composite by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingSort {
    /// Weighted mix of hit and prize rates.
    #[default]
    Composite,
    /// Average front + back hits.
    Hit,
    /// Prize rate.
    Prize,
    /// Count of first to third prizes.
    High,
}

impl RankingSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Composite => "composite",
            Self::Hit => "hit",
            Self::Prize => "prize",
            Self::High => "high",
        }
    }
}

/// A verified prediction alongside the actual draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationHistoryRecord {
    pub id: u64,
    pub target_issue: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub predict_method: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub method_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub front_balls_str: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub back_balls_str: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub actual_front_balls_str: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub actual_back_balls_str: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub front_hit_count: u8,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub back_hit_count: u8,
    #[serde(default)]
    pub prize_level: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub verified_at: Option<String>,
}

/// Outcome of a historical backtest for one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestResult {
    pub method: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub method_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_issues: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_predictions: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub avg_front_hit: Decimal,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub avg_back_hit: Decimal,
    #[serde(default)]
    pub front_hit_rate: Option<f64>,
    #[serde(default)]
    pub back_hit_rate: Option<f64>,
    #[serde(default)]
    pub prize_count1: Option<u32>,
    #[serde(default)]
    pub prize_count2: Option<u32>,
    #[serde(default)]
    pub prize_count3: Option<u32>,
    #[serde(default)]
    pub prize_count4: Option<u32>,
    #[serde(default)]
    pub prize_count5: Option<u32>,
    #[serde(default)]
    pub prize_count6: Option<u32>,
    #[serde(default)]
    pub prize_count7: Option<u32>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_prize_count: u32,
    #[serde(default)]
    pub prize_rate: Option<f64>,
    #[serde(default)]
    pub high_prize_count: Option<u32>,
    #[serde(default)]
    pub total_cost: Option<u64>,
    #[serde(default)]
    pub total_prize_money: Option<i64>,
    #[serde(default)]
    pub profit_loss: Option<i64>,
    #[serde(default)]
    pub roi: Option<f64>,
    #[serde(default)]
    pub best_issue: Option<String>,
    #[serde(default)]
    pub best_prize: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub details: Vec<BacktestDetail>,
    #[serde(default)]
    pub evaluation: Option<String>,
}

/// Per-issue line of a backtest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestDetail {
    pub issue: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub prediction: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub actual_result: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub front_hit: u8,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub back_hit: u8,
    #[serde(default)]
    pub prize_level: Option<String>,
    #[serde(default)]
    pub prize_money: Option<i64>,
}
