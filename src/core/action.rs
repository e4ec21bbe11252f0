//! # Actions
//!
//! Everything that can happen in rentdesk becomes an `Action`.
//! User presses Enter on a car? That's `Action::OpenStartRental(car_id)`.
//! Backend responds? That's `Action::RentalStarted(result)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the outside world should perform.
//! No I/O here; effects run in `core::workflow`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Results of async calls arrive as typed actions carrying
//! `Result<T, ApiError>`, so every transition is a plain function of
//! (state, outcome).
//!
//! Error reporting differs per operation and is observable behavior:
//! - add car, start rental: inline message next to the control
//! - return rental: blocking alert
//! - list refreshes: logged only, previous data stays on screen

use log::{debug, info, warn};

use crate::api::{ApiError, Car, Invoice, NewCar, Rental};
use crate::core::form::{InputTarget, TextEdit, coerce_tax_rate};
use crate::core::state::App;

pub const CUSTOMER_NAME_REQUIRED: &str = "Customer name is required";

/// A list the client can re-fetch from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cars,
    ActiveRentals,
    Invoices,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Cars, Resource::ActiveRentals, Resource::Invoices];
}

#[derive(Debug)]
pub enum Action {
    Quit,

    // Refreshes
    Refresh(Resource),
    RefreshAll,
    CarsLoaded(Result<Vec<Car>, ApiError>),
    ActiveRentalsLoaded(Result<Vec<Rental>, ApiError>),
    InvoicesLoaded(Result<Vec<Invoice>, ApiError>),

    // Text inputs
    Edit(InputTarget, TextEdit),

    // Add car
    SubmitCar,
    CarAdded(Result<Car, ApiError>),

    // Start rental
    OpenStartRental(String),
    CancelStartRental,
    ConfirmStartRental,
    RentalStarted(Result<Rental, ApiError>),

    // Return rental
    OpenReturnRental(String),
    CancelReturnRental,
    ConfirmReturnRental,
    RentalReturned(Result<Invoice, ApiError>),

    DismissInvoice,
    DismissAlert,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Re-fetch the lists, one after another, in the given order.
    Refresh(Vec<Resource>),
    AddCar(NewCar),
    StartRental {
        car_id: String,
        customer_name: String,
    },
    ReturnRental {
        rental_id: String,
        tax_rate: f64,
    },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::Refresh(resource) => Effect::Refresh(vec![resource]),
        Action::RefreshAll => Effect::Refresh(Resource::ALL.to_vec()),

        Action::CarsLoaded(result) => {
            match result {
                Ok(cars) => {
                    debug!("Loaded {} cars", cars.len());
                    app.cars = cars;
                }
                Err(e) => warn!("Failed to refresh cars: {}", e),
            }
            Effect::None
        }
        Action::ActiveRentalsLoaded(result) => {
            match result {
                Ok(rentals) => {
                    debug!("Loaded {} active rentals", rentals.len());
                    app.active_rentals = rentals;
                }
                Err(e) => warn!("Failed to refresh active rentals: {}", e),
            }
            Effect::None
        }
        Action::InvoicesLoaded(result) => {
            match result {
                Ok(invoices) => {
                    debug!("Loaded {} invoices", invoices.len());
                    app.invoices = invoices;
                }
                Err(e) => warn!("Failed to refresh invoices: {}", e),
            }
            Effect::None
        }

        Action::Edit(target, edit) => {
            match target {
                InputTarget::Car(field) => edit.apply(app.car_form.field_mut(field)),
                InputTarget::CustomerName => edit.apply(&mut app.customer_name),
                InputTarget::TaxRate => edit.apply(&mut app.tax_rate),
            }
            Effect::None
        }

        Action::SubmitCar => {
            if app.adding_car {
                return Effect::None;
            }
            app.adding_car = true;
            app.car_error = None;
            app.status_message = "Adding car...".to_string();
            Effect::AddCar(app.car_form.to_payload())
        }
        Action::CarAdded(result) => {
            app.adding_car = false;
            match result {
                Ok(car) => {
                    info!("Car added: {} {} ({})", car.make, car.model, car.id);
                    app.car_form = Default::default();
                    app.status_message = format!("Added {} {}", car.make, car.model);
                    Effect::Refresh(vec![Resource::Cars])
                }
                Err(e) => {
                    warn!("Add car failed: {}", e);
                    app.car_error = Some(e.user_message());
                    app.status_message.clear();
                    Effect::None
                }
            }
        }

        Action::OpenStartRental(car_id) => {
            match app.car(&car_id).map(App::can_start_rental) {
                Some(true) => {
                    app.renting_car_id = Some(car_id);
                    app.customer_name.clear();
                    app.rent_error = None;
                }
                Some(false) => debug!("Ignoring start rental for unavailable car {}", car_id),
                None => debug!("Ignoring start rental for unknown car {}", car_id),
            }
            Effect::None
        }
        Action::CancelStartRental => {
            app.renting_car_id = None;
            app.rent_error = None;
            Effect::None
        }
        Action::ConfirmStartRental => {
            let Some(car_id) = app.renting_car_id.clone() else {
                return Effect::None;
            };
            if app.starting_rental {
                return Effect::None;
            }
            let customer_name = app.customer_name.trim();
            if customer_name.is_empty() {
                app.rent_error = Some(CUSTOMER_NAME_REQUIRED.to_string());
                return Effect::None;
            }
            let customer_name = customer_name.to_string();
            app.rent_error = None;
            app.starting_rental = true;
            Effect::StartRental {
                car_id,
                customer_name,
            }
        }
        Action::RentalStarted(result) => {
            app.starting_rental = false;
            match result {
                Ok(rental) => {
                    info!("Rental started: {} for {}", rental.id, rental.customer_name);
                    app.renting_car_id = None;
                    app.customer_name.clear();
                    app.status_message = format!("Rental started for {}", rental.customer_name);
                    Effect::Refresh(vec![Resource::Cars, Resource::ActiveRentals])
                }
                Err(e) => {
                    warn!("Start rental failed: {}", e);
                    app.rent_error = Some(e.user_message());
                    Effect::None
                }
            }
        }

        Action::OpenReturnRental(rental_id) => {
            app.returning_rental_id = Some(rental_id);
            app.tax_rate = app.default_tax_rate.clone();
            Effect::None
        }
        Action::CancelReturnRental => {
            app.returning_rental_id = None;
            Effect::None
        }
        Action::ConfirmReturnRental => {
            let Some(rental_id) = app.returning_rental_id.clone() else {
                return Effect::None;
            };
            if app.returning_rental {
                return Effect::None;
            }
            app.returning_rental = true;
            Effect::ReturnRental {
                rental_id,
                tax_rate: coerce_tax_rate(&app.tax_rate),
            }
        }
        Action::RentalReturned(result) => {
            app.returning_rental = false;
            match result {
                Ok(invoice) => {
                    info!("Rental returned, invoice {}", invoice.id);
                    app.status_message = format!("Invoice {} generated", invoice.id);
                    app.last_invoice = Some(invoice);
                    app.returning_rental_id = None;
                    Effect::Refresh(Resource::ALL.to_vec())
                }
                Err(e) => {
                    warn!("Return rental failed: {}", e);
                    app.alert = Some(format!("Return failed: {}", e.user_message()));
                    Effect::None
                }
            }
        }

        Action::DismissInvoice => {
            app.last_invoice = None;
            Effect::None
        }
        Action::DismissAlert => {
            app.alert = None;
            Effect::None
        }
    }
}
