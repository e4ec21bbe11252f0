//! HTTP implementation of [`RentalBackend`] over reqwest.
//!
//! Every endpoint exchanges JSON. Any non-2xx status is a failure; the error
//! body is probed for a `detail` field (FastAPI style) to produce a readable
//! message.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::backend::{ApiError, RentalBackend};
use super::types::{
    Car, Invoice, NewCar, Rental, ReturnRentalRequest, ReturnRentalResponse, StartRentalRequest,
};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Rental backend reached over HTTP.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {}", path);
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(path, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(path, response).await
    }
}

/// Decode a success body, or turn a failure status into [`ApiError::Api`].
async fn read_json<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    debug!("{} -> {}", path, status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        warn!("Backend error on {}: {} - {}", path, status, body);
        return Err(ApiError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| {
        warn!("Undecodable body from {}: {}", path, e);
        ApiError::Parse(e.to_string())
    })
}

/// Pull a human-readable message out of an error body.
///
/// A string `detail` is used as-is. A list of validation errors (each with a
/// `msg`) is joined with `"; "`. Anything else yields `None`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[async_trait]
impl RentalBackend for HttpBackend {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_cars(&self) -> Result<Vec<Car>, ApiError> {
        self.get_json("/api/cars").await
    }

    async fn add_car(&self, car: &NewCar) -> Result<Car, ApiError> {
        info!("Adding car: plate={}", car.plate_number);
        self.post_json("/api/cars", car).await
    }

    async fn list_active_rentals(&self) -> Result<Vec<Rental>, ApiError> {
        self.get_json("/api/rentals/active").await
    }

    async fn start_rental(&self, request: &StartRentalRequest) -> Result<Rental, ApiError> {
        info!("Starting rental: car_id={}", request.car_id);
        self.post_json("/api/rentals/start", request).await
    }

    async fn return_rental(
        &self,
        rental_id: &str,
        request: &ReturnRentalRequest,
    ) -> Result<Invoice, ApiError> {
        info!(
            "Returning rental: rental_id={}, tax_rate={}",
            rental_id, request.tax_rate
        );
        let path = format!("/api/rentals/{rental_id}/return");
        let response: ReturnRentalResponse = self.post_json(&path, request).await?;
        Ok(response.invoice)
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.get_json("/api/invoices").await
    }
}
