//! Thin HTTP client for the Jupiter limit-order API.

use std::time::Duration;

use reqwest::Client;

use crate::error::AdapterError;
use crate::jupiter::wire::{CreateOrder, CreateOrderResponse};
use crate::network::JUPITER_LIMIT_API_URL;

/// Client for order creation. No retries — order creation is not idempotent,
/// and the caller inherits the transport's 30s timeout.
#[derive(Clone)]
pub struct JupiterClient {
    base_url: String,
    client: Client,
}

impl JupiterClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn mainnet() -> Self {
        Self::new(JUPITER_LIMIT_API_URL)
    }

    /// Submit an order description; returns the unsigned transaction encoding
    /// and the order account address.
    pub async fn create_order(
        &self,
        order: &CreateOrder,
    ) -> Result<CreateOrderResponse, AdapterError> {
        let url = format!("{}/createOrder", self.base_url);
        let resp = self.client.post(&url).json(order).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        tracing::debug!(%status, %body, "createOrder response");

        if !status.is_success() {
            return Err(AdapterError::new(format!(
                "order service returned {status}: {body}"
            )));
        }

        let parsed: CreateOrderResponse = serde_json::from_str(&body)?;
        tracing::debug!(order = %parsed.order, "order created");
        Ok(parsed)
    }
}
