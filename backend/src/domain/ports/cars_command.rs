//! Driving port for car mutations.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::car::{Car, CarDraft, CarId};

/// Use-case port for creating, updating, and deleting cars.
#[async_trait]
pub trait CarsCommand: Send + Sync {
    /// Validate the draft and persist a new car, returning the stored record
    /// with its assigned identity. Nothing is persisted when validation
    /// fails.
    async fn create_car(&self, draft: CarDraft) -> Result<Car, Error>;

    /// Overwrite every mutable field of an existing car, preserving its
    /// identity. Fails with `NotFound` when the id has no record, before the
    /// draft is validated.
    async fn update_car(&self, id: CarId, draft: CarDraft) -> Result<Car, Error>;

    /// Remove an existing car. Fails with `NotFound` when the id has no
    /// record.
    async fn delete_car(&self, id: CarId) -> Result<(), Error>;
}
