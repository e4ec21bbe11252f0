//! # Application State
//!
//! Core business state for rentdesk. This module contains domain logic only -
//! no TUI-specific types. Presentation state (focus, selection) lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── cars / active_rentals / invoices   // last copies fetched from the backend
//! ├── car_form, adding_car, car_error    // Add Car form
//! ├── renting_car_id, customer_name,     // start-rental modal
//! │   rent_error, starting_rental
//! ├── returning_rental_id, tax_rate,     // return modal
//! │   returning_rental
//! ├── last_invoice                       // invoice modal
//! ├── alert                              // blocking alert
//! └── status_message                     // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::api::{Car, Invoice, Rental};
use crate::core::config::ResolvedConfig;
use crate::core::form::CarForm;

pub struct App {
    pub backend_url: String,
    pub default_tax_rate: String,
    pub status_message: String,

    pub cars: Vec<Car>,
    pub active_rentals: Vec<Rental>,
    pub invoices: Vec<Invoice>,

    pub car_form: CarForm,
    pub adding_car: bool,
    pub car_error: Option<String>,

    /// Some = start-rental modal open for this car.
    pub renting_car_id: Option<String>,
    pub customer_name: String,
    pub rent_error: Option<String>,
    pub starting_rental: bool,

    /// Some = return modal open for this rental.
    pub returning_rental_id: Option<String>,
    pub tax_rate: String,
    pub returning_rental: bool,

    /// Invoice from the most recent return, until dismissed.
    pub last_invoice: Option<Invoice>,
    /// Blocking alert text, until dismissed.
    pub alert: Option<String>,
}

impl App {
    pub fn new(backend_url: String, default_tax_rate: String) -> Self {
        Self {
            backend_url,
            tax_rate: default_tax_rate.clone(),
            default_tax_rate,
            status_message: String::from("Welcome to Car Rental!"),
            cars: Vec::new(),
            active_rentals: Vec::new(),
            invoices: Vec::new(),
            car_form: CarForm::default(),
            adding_car: false,
            car_error: None,
            renting_car_id: None,
            customer_name: String::new(),
            rent_error: None,
            starting_rental: false,
            returning_rental_id: None,
            returning_rental: false,
            last_invoice: None,
            alert: None,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.backend_url.clone(), config.default_tax_rate.clone())
    }

    /// The start control is enabled exactly when the car is available.
    pub fn can_start_rental(car: &Car) -> bool {
        car.available
    }

    pub fn car(&self, car_id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == car_id)
    }

    /// Car the start-rental modal is open for, if it is still listed.
    pub fn renting_car(&self) -> Option<&Car> {
        self.renting_car_id.as_deref().and_then(|id| self.car(id))
    }
}
