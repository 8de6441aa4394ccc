//! Payload shapes exchanged with the lottery backend.
//!
//! Every record mirrors the backend's camelCase JSON. The client never
//! derives or validates these values; they are exposed as received.

mod analysis;
mod dashboard;
mod learning;
mod lottery;
mod prediction;
mod verification;

pub use analysis::{AssociationRule, Frequency, Missing, NumberPicks, TrendPoint, Zone};
pub use dashboard::{DashboardData, DashboardStats};
pub use learning::{MethodWeight, WeightUpdate};
pub(crate) use learning::WeightBody;
pub use lottery::{LotteryResult, LotteryStats, NewLotteryResult};
pub use prediction::{PredictionMethod, PredictionMethodInfo, PredictionRecord, PredictionResult};
pub use verification::{
    AccuracyStats, BacktestDetail, BacktestResult, RankingSort, VerificationHistoryRecord,
};

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope code the backend uses for success.
pub const CODE_OK: i32 = 200;
/// Alternate success code accepted by the client.
pub const CODE_ZERO: i32 = 0;

/// Universal response envelope: `{code, msg, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub msg: String,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Whether the envelope carries a logical success code.
    pub fn is_success(&self) -> bool {
        is_success_code(self.code)
    }
}

/// Success iff the code is `200` or `0`.
pub fn is_success_code(code: i32) -> bool {
    code == CODE_OK || code == CODE_ZERO
}

/// Pagination envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub records: Vec<T>,
    pub total: u64,
    pub size: u32,
    pub current: u32,
    pub pages: u32,
}

impl<T> PageResult<T> {
    /// Whether more pages follow the current one.
    pub fn has_next(&self) -> bool {
        self.current < self.pages
    }
}

/// Page/size parameters for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
}

impl PageQuery {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_SIZE: u32 = 20;

    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Query pairs in wire order.
    pub fn to_query(self) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ]
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_SIZE)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ball lists arrive as a JSON array, a single number, or the backend's
/// comma-separated string (`"3,6,17,21,33"`).
pub(crate) fn ball_list<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<u8>),
        One(u8),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(Raw::List(list)) => Ok(list),
        Some(Raw::One(n)) => Ok(vec![n]),
        Some(Raw::Text(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<u8>().map_err(serde::de::Error::custom))
            .collect(),
    }
}
