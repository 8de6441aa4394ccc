//! Statistical analysis payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the two disjoint number pools of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    #[default]
    Front,
    Back,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occurrence statistics for a single number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frequency {
    pub number: u8,
    #[serde(default, alias = "type")]
    pub zone: Option<Zone>,
    pub count: u32,
    #[serde(default, alias = "frequency")]
    pub percentage: Option<f64>,
}

/// Missing-streak statistics for a single number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Missing {
    pub number: u8,
    pub current_missing: u32,
    pub avg_missing: f64,
    pub max_missing: u32,
    #[serde(default, rename = "type")]
    pub zone: Option<Zone>,
}

/// One row of trend data. Fields beyond `issue` vary by backend version
/// and are kept as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub issue: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl TrendPoint {
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }
}

/// Hot, cold or missing-due recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPicks {
    #[serde(default)]
    pub front: Vec<u8>,
    #[serde(default)]
    pub back: Vec<u8>,
}

/// Mined association rule `antecedent => consequent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRule {
    #[serde(deserialize_with = "super::ball_list")]
    pub antecedent: Vec<u8>,
    #[serde(deserialize_with = "super::ball_list")]
    pub consequent: Vec<u8>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}
