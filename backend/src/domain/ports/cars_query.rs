//! Driving port for car read operations.
//!
//! Inbound adapters (HTTP handlers) use this port so they depend on domain
//! use-cases rather than on outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::car::Car;

/// Use-case port for listing and filtering cars.
#[async_trait]
pub trait CarsQuery: Send + Sync {
    /// Return every stored car. An empty store yields an empty list; the
    /// adapter decides how to render emptiness.
    async fn list_cars(&self) -> Result<Vec<Car>, Error>;

    /// Return the cars produced within the inclusive year range spanned by
    /// `from` and `to`, tolerating swapped bounds. An empty result is
    /// returned as an empty list.
    async fn cars_in_year_range(&self, from: i64, to: i64) -> Result<Vec<Car>, Error>;
}
