//! Destination recommendation tool service.
//!
//! A stateless HTTP service exposing canned travel-destination
//! recommendations as callable tools under `/v1/tools`, plus health and
//! info endpoints. All recommendation data is compiled in; see
//! [`services::catalog`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::ValidationError;
pub use models::FilterCriteria;
pub use routes::create_router;
