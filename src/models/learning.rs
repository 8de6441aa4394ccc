//! Method weights used by the backend's adaptive learning.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current weight of one prediction method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodWeight {
    pub id: u64,
    #[serde(default)]
    pub method_code: Option<String>,
    #[serde(default)]
    pub method_name: String,
    pub weight: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_predictions: Option<u32>,
    #[serde(default)]
    pub total_hits: Option<u32>,
    #[serde(default)]
    pub hit_rate: Option<Decimal>,
}

/// Body of `PUT /learning/weights/{id}`; the backend reads a double.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct WeightBody {
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
}

/// Element of `PUT /learning/weights/batch`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightUpdate {
    pub id: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
}

impl WeightUpdate {
    pub fn new(id: u64, weight: Decimal) -> Self {
        Self { id, weight }
    }
}
