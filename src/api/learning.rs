//! Method weight endpoints (`/learning`).

use super::client::{HttpClient, RequestOptions};
use crate::error::Result;
use crate::models::{MethodWeight, WeightBody, WeightUpdate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Learning endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LearningApi<'a> {
    client: &'a HttpClient,
}

impl HttpClient {
    pub fn learning(&self) -> LearningApi<'_> {
        LearningApi { client: self }
    }
}

impl LearningApi<'_> {
    pub async fn weights(&self) -> Result<Vec<MethodWeight>> {
        self.client
            .get("/learning/weights", RequestOptions::new())
            .await
    }

    /// Weights keyed by method code.
    pub async fn weights_map(&self) -> Result<BTreeMap<String, f64>> {
        self.client
            .get("/learning/weights/map", RequestOptions::new())
            .await
    }

    pub async fn update_weight(&self, id: u64, weight: Decimal) -> Result<()> {
        let options = RequestOptions::new().json(&WeightBody { weight })?;
        self.client
            .put(&format!("/learning/weights/{id}"), options)
            .await
    }

    pub async fn batch_update_weights(&self, weights: &[WeightUpdate]) -> Result<()> {
        let options = RequestOptions::new().json(weights)?;
        self.client.put("/learning/weights/batch", options).await
    }

    /// Restore initial weights. Returns the backend's confirmation text.
    pub async fn reset_weights(&self) -> Result<String> {
        self.client
            .post("/learning/weights/reset", RequestOptions::new())
            .await
    }

    pub async fn retrain(&self) -> Result<()> {
        self.client
            .post("/learning/retrain", RequestOptions::new())
            .await
    }
}
