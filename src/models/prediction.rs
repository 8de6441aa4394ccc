//! Prediction records and method metadata.

use serde::{Deserialize, Serialize};

/// A stored prediction, before or after verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub id: u64,
    pub target_issue: String,
    #[serde(default)]
    pub predict_method: Option<String>,
    #[serde(default)]
    pub method_name: Option<String>,
    #[serde(default, deserialize_with = "super::ball_list")]
    pub front_balls: Vec<u8>,
    #[serde(default, deserialize_with = "super::ball_list")]
    pub back_balls: Vec<u8>,
    #[serde(default)]
    pub is_verified: u8,
    #[serde(default)]
    pub front_hit_count: Option<u8>,
    #[serde(default)]
    pub back_hit_count: Option<u8>,
    #[serde(default)]
    pub prize_level: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub verified_at: Option<String>,
}

impl PredictionRecord {
    pub fn verified(&self) -> bool {
        self.is_verified != 0
    }

    /// Label for the method, preferring the backend's display name.
    pub fn method_label(&self) -> String {
        match (&self.method_name, &self.predict_method) {
            (Some(name), _) => name.clone(),
            (None, Some(code)) => PredictionMethod::display_name_for(code),
            (None, None) => String::new(),
        }
    }
}

/// Prediction output, optionally scored and verified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predict_method: Option<String>,
    #[serde(default)]
    pub method_name: String,
    #[serde(default, deserialize_with = "super::ball_list")]
    pub front_balls: Vec<u8>,
    #[serde(default, deserialize_with = "super::ball_list")]
    pub back_balls: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_balls_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_balls_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_hit_count: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_hit_count: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Entry of `/prediction/methods`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionMethodInfo {
    pub code: String,
    pub name: String,
}

/// Prediction methods known to the backend.
///
/// The algorithms themselves run remotely; the client only passes codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionMethod {
    Hot,
    Missing,
    Balanced,
    Ml,
    Adaptive,
    Bayesian,
    Markov,
    #[serde(rename = "MONTECARLO")]
    MonteCarlo,
    GradientBoost,
    Ensemble,
}

impl PredictionMethod {
    pub const ALL: [PredictionMethod; 10] = [
        Self::Hot,
        Self::Missing,
        Self::Balanced,
        Self::Ml,
        Self::Adaptive,
        Self::Bayesian,
        Self::Markov,
        Self::MonteCarlo,
        Self::GradientBoost,
        Self::Ensemble,
    ];

    /// Wire code passed to the backend.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hot => "HOT",
            Self::Missing => "MISSING",
            Self::Balanced => "BALANCED",
            Self::Ml => "ML",
            Self::Adaptive => "ADAPTIVE",
            Self::Bayesian => "BAYESIAN",
            Self::Markov => "MARKOV",
            Self::MonteCarlo => "MONTECARLO",
            Self::GradientBoost => "GRADIENT_BOOST",
            Self::Ensemble => "ENSEMBLE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hot => "Hot Numbers First",
            Self::Missing => "Missing Rebound",
            Self::Balanced => "Hot/Cold Balance",
            Self::Ml => "Machine Learning",
            Self::Adaptive => "Adaptive",
            Self::Bayesian => "Bayesian",
            Self::Markov => "Markov Chain",
            Self::MonteCarlo => "Monte Carlo",
            Self::GradientBoost => "Gradient Boosting",
            Self::Ensemble => "Ensemble",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Hot => "Favors numbers that appeared most often in recent draws",
            Self::Missing => "Picks numbers whose missing streak suggests a rebound",
            Self::Balanced => "Mixes hot and cold numbers for a balanced ticket",
            Self::Ml => "Mines historical draws with a machine-learning model",
            Self::Adaptive => "Selects a strategy from the current data profile",
            Self::Bayesian => "Scores numbers with Bayesian probability updates",
            Self::Markov => "Uses Markov chain transition probabilities",
            Self::MonteCarlo => "Samples tickets from Monte Carlo simulation",
            Self::GradientBoost => "Ranks numbers with gradient-boosted decision trees",
            Self::Ensemble => "Votes across the results of several methods",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    /// Display name for a wire code, falling back to the code itself.
    pub fn display_name_for(code: &str) -> String {
        Self::from_code(code)
            .map(|m| m.display_name().to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

impl std::fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
