//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{
    ApiError, Car, Invoice, NewCar, Rental, RentalBackend, ReturnRentalRequest,
    StartRentalRequest,
};
use crate::core::state::App;

/// Creates a test App pointed at a placeholder backend.
pub fn test_app() -> App {
    App::new("http://backend.test".to_string(), "0.1".to_string())
}

pub fn sample_car(id: &str, available: bool) -> Car {
    Car {
        id: id.to_string(),
        make: "Toyota".to_string(),
        model: "Corolla".to_string(),
        year: 2020,
        plate_number: format!("PLATE-{id}"),
        daily_rate: 50.0,
        available,
    }
}

pub fn sample_rental(id: &str, car_id: &str) -> Rental {
    Rental {
        id: id.to_string(),
        car_id: car_id.to_string(),
        customer_name: "Ada Lovelace".to_string(),
        start_date: "2024-03-01T10:00:00".to_string(),
        end_date: None,
    }
}

/// The invoice for a 3-day rental at $50/day with 10% tax.
pub fn sample_invoice(id: &str) -> Invoice {
    Invoice {
        id: id.to_string(),
        rental_id: Some("r1".to_string()),
        car_id: Some("c1".to_string()),
        customer_name: "Ada Lovelace".to_string(),
        daily_rate: 50.0,
        days: 3,
        subtotal: 150.0,
        tax_rate: 0.1,
        tax_amount: 15.0,
        total: 165.0,
        start_date: "2024-03-01T10:00:00".to_string(),
        end_date: "2024-03-04T10:00:00".to_string(),
    }
}

/// In-memory backend that records the calls it receives.
///
/// Lists come from the fields; mutations succeed unless `fail_mutations` is set.
#[derive(Default)]
pub struct RecordingBackend {
    pub cars: Vec<Car>,
    pub rentals: Vec<Rental>,
    pub invoices: Vec<Invoice>,
    pub fail_mutations: bool,
    pub fail_lists: bool,
    pub calls: Mutex<Vec<String>>,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn list<T: Clone>(&self, items: &[T]) -> Result<Vec<T>, ApiError> {
        if self.fail_lists {
            Err(ApiError::Network("connection refused".to_string()))
        } else {
            Ok(items.to_vec())
        }
    }

    fn mutation_error(&self) -> Option<ApiError> {
        self.fail_mutations.then(|| ApiError::Api {
            status: 400,
            detail: Some("rejected".to_string()),
        })
    }
}

#[async_trait]
impl RentalBackend for RecordingBackend {
    fn base_url(&self) -> &str {
        "memory://"
    }

    async fn list_cars(&self) -> Result<Vec<Car>, ApiError> {
        self.record("GET /api/cars".to_string());
        self.list(&self.cars)
    }

    async fn add_car(&self, car: &NewCar) -> Result<Car, ApiError> {
        self.record(format!("POST /api/cars {}", car.plate_number));
        if let Some(e) = self.mutation_error() {
            return Err(e);
        }
        Ok(Car {
            id: "new".to_string(),
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year.unwrap_or_default(),
            plate_number: car.plate_number.clone(),
            daily_rate: car.daily_rate.unwrap_or_default(),
            available: true,
        })
    }

    async fn list_active_rentals(&self) -> Result<Vec<Rental>, ApiError> {
        self.record("GET /api/rentals/active".to_string());
        self.list(&self.rentals)
    }

    async fn start_rental(&self, request: &StartRentalRequest) -> Result<Rental, ApiError> {
        self.record(format!(
            "POST /api/rentals/start {} {}",
            request.car_id, request.customer_name
        ));
        if let Some(e) = self.mutation_error() {
            return Err(e);
        }
        Ok(sample_rental("r-new", &request.car_id))
    }

    async fn return_rental(
        &self,
        rental_id: &str,
        request: &ReturnRentalRequest,
    ) -> Result<Invoice, ApiError> {
        self.record(format!(
            "POST /api/rentals/{rental_id}/return {}",
            request.tax_rate
        ));
        if let Some(e) = self.mutation_error() {
            return Err(e);
        }
        Ok(sample_invoice("i-new"))
    }

    async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.record("GET /api/invoices".to_string());
        self.list(&self.invoices)
    }
}
