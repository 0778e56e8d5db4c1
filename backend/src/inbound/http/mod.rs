//! HTTP inbound adapter exposing the REST endpoints.

pub mod cars;
pub mod error;
pub mod health;
pub mod state;
pub mod validation;

pub use error::ApiResult;
