pub mod backend;
pub mod client;
pub mod types;

pub use backend::{ApiError, RentalBackend};
pub use client::{DEFAULT_BACKEND_URL, HttpBackend};
pub use types::{
    Car, Invoice, NewCar, Rental, ReturnRentalRequest, ReturnRentalResponse, StartRentalRequest,
};
