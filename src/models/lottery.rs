//! Draw results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryResult {
    pub id: u64,
    pub issue: String,
    pub draw_date: NaiveDate,
    pub front_ball1: u8,
    pub front_ball2: u8,
    pub front_ball3: u8,
    pub front_ball4: u8,
    pub front_ball5: u8,
    pub back_ball1: u8,
    pub back_ball2: u8,
    #[serde(default)]
    pub front_sum: Option<u32>,
    #[serde(default)]
    pub back_sum: Option<u32>,
    #[serde(default)]
    pub odd_count_front: Option<u8>,
    #[serde(default)]
    pub odd_count_back: Option<u8>,
    #[serde(default)]
    pub ac_value: Option<u8>,
    #[serde(default)]
    pub consecutive_count_front: Option<u8>,
    #[serde(default)]
    pub consecutive_count_back: Option<u8>,
}

impl LotteryResult {
    /// Front-zone numbers in draw order.
    pub fn front_balls(&self) -> [u8; 5] {
        [
            self.front_ball1,
            self.front_ball2,
            self.front_ball3,
            self.front_ball4,
            self.front_ball5,
        ]
    }

    /// Back-zone numbers in draw order.
    pub fn back_balls(&self) -> [u8; 2] {
        [self.back_ball1, self.back_ball2]
    }
}

/// Body of `POST /lottery/add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLotteryResult {
    pub issue: String,
    pub draw_date: NaiveDate,
    pub front_ball1: u8,
    pub front_ball2: u8,
    pub front_ball3: u8,
    pub front_ball4: u8,
    pub front_ball5: u8,
    pub back_ball1: u8,
    pub back_ball2: u8,
}

impl NewLotteryResult {
    pub fn new(
        issue: impl Into<String>,
        draw_date: NaiveDate,
        front: [u8; 5],
        back: [u8; 2],
    ) -> Self {
        Self {
            issue: issue.into(),
            draw_date,
            front_ball1: front[0],
            front_ball2: front[1],
            front_ball3: front[2],
            front_ball4: front[3],
            front_ball5: front[4],
            back_ball1: back[0],
            back_ball2: back[1],
        }
    }
}

/// Summary counters from `/lottery/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryStats {
    pub total_count: u64,
    #[serde(default)]
    pub next_issue: Option<String>,
    #[serde(default)]
    pub method_count: Option<u32>,
    #[serde(default)]
    pub stats_count: Option<u32>,
    #[serde(default)]
    pub latest_result: Option<LotteryResult>,
}
