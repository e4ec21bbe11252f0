use std::fmt;

use async_trait::async_trait;

use super::types::{Car, Invoice, NewCar, Rental, ReturnRentalRequest, StartRentalRequest};

/// Errors that can occur while talking to the rental backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, reset).
    Network(String),
    /// The backend answered with a non-2xx status.
    /// `detail` is the human-readable message from the error body, if any.
    Api { status: u16, detail: Option<String> },
    /// A 2xx body that did not match the expected shape.
    Parse(String),
}

impl ApiError {
    /// Text shown to the user when a mutation fails.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Api { status, .. } => format!("Failed ({status})"),
            ApiError::Network(msg) | ApiError::Parse(msg) => msg.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, detail } => match detail {
                Some(detail) => write!(f, "backend error (HTTP {status}): {detail}"),
                None => write!(f, "backend error (HTTP {status})"),
            },
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The operations the client needs from the rental backend.
///
/// The backend owns every invariant (availability, one rental per car,
/// invoice arithmetic); implementors only move requests and responses.
#[async_trait]
pub trait RentalBackend: Send + Sync {
    /// Base URL shown in the title bar.
    fn base_url(&self) -> &str;

    async fn list_cars(&self) -> Result<Vec<Car>, ApiError>;

    async fn add_car(&self, car: &NewCar) -> Result<Car, ApiError>;

    async fn list_active_rentals(&self) -> Result<Vec<Rental>, ApiError>;

    async fn start_rental(&self, request: &StartRentalRequest) -> Result<Rental, ApiError>;

    /// Returns the car and yields the invoice the backend generated.
    async fn return_rental(
        &self,
        rental_id: &str,
        request: &ReturnRentalRequest,
    ) -> Result<Invoice, ApiError>;

    async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError>;
}
