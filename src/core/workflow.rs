//! # Rental Workflow
//!
//! Performs the effects requested by `update()` against a [`RentalBackend`]
//! and reports each outcome as an [`Action`].
//!
//! ```text
//! Effect::StartRental ──► POST /api/rentals/start ──► Action::RentalStarted(result)
//!                                                          │
//!                     update() ◄───────────────────────────┘
//!                        │
//!                        └─► Effect::Refresh([Cars, ActiveRentals])
//!                                 ├─► GET /api/cars           ──► Action::CarsLoaded
//!                                 └─► GET /api/rentals/active ──► Action::ActiveRentalsLoaded
//! ```
//!
//! Calls within one effect are awaited one after another. Nothing is retried
//! or cancelled.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Sender};

use log::{debug, warn};

use crate::api::{RentalBackend, ReturnRentalRequest, StartRentalRequest};
use crate::core::action::{Action, Effect, Resource, update};
use crate::core::state::App;

/// Fetch one list and wrap the outcome in its `*Loaded` action.
pub async fn fetch(backend: &dyn RentalBackend, resource: Resource) -> Action {
    match resource {
        Resource::Cars => Action::CarsLoaded(backend.list_cars().await),
        Resource::ActiveRentals => Action::ActiveRentalsLoaded(backend.list_active_rentals().await),
        Resource::Invoices => Action::InvoicesLoaded(backend.list_invoices().await),
    }
}

/// Run one effect, sending result actions to `tx` as they arrive.
///
/// `Effect::None` and `Effect::Quit` are not backend work and send nothing.
pub async fn execute(backend: &dyn RentalBackend, effect: Effect, tx: &Sender<Action>) {
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::Refresh(resources) => {
            for resource in resources {
                debug!("Refreshing {:?}", resource);
                if !send(tx, fetch(backend, resource).await) {
                    return;
                }
            }
        }
        Effect::AddCar(car) => {
            send(tx, Action::CarAdded(backend.add_car(&car).await));
        }
        Effect::StartRental {
            car_id,
            customer_name,
        } => {
            let request = StartRentalRequest {
                car_id,
                customer_name,
            };
            send(tx, Action::RentalStarted(backend.start_rental(&request).await));
        }
        Effect::ReturnRental {
            rental_id,
            tax_rate,
        } => {
            let request = ReturnRentalRequest { tax_rate };
            let result = backend.return_rental(&rental_id, &request).await;
            send(tx, Action::RentalReturned(result));
        }
    }
}

fn send(tx: &Sender<Action>, action: Action) -> bool {
    if tx.send(action).is_err() {
        warn!("Failed to send workflow action: receiver dropped");
        return false;
    }
    true
}

/// Dispatch `action` and keep executing effects until the workflow settles.
///
/// Runs the same reducer/executor loop as the TUI, but inline, so a caller
/// can await a whole user interaction (mutation plus follow-up refreshes).
/// Returns `true` if a quit was requested.
pub async fn drive(app: &mut App, backend: &dyn RentalBackend, action: Action) -> bool {
    let mut queue = VecDeque::from([action]);
    while let Some(action) = queue.pop_front() {
        let effect = update(app, action);
        if effect == Effect::Quit {
            return true;
        }
        let (tx, rx) = mpsc::channel();
        execute(backend, effect, &tx).await;
        drop(tx);
        queue.extend(rx.try_iter());
    }
    false
}
