//! Driven port for the car record store.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::car::{Car, CarId, CarInput};

/// Persistence failures raised by record-store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarRepositoryError {
    /// The store could not be reached.
    #[error("car store connection failed: {message}")]
    Connection { message: String },
    /// A query or mutation failed during execution.
    #[error("car store query failed: {message}")]
    Query { message: String },
}

/// Record store holding car rows keyed by identity.
///
/// The store is assumed durable and ACID for single-row operations. Identity
/// assignment is the store's responsibility: [`CarRepository::insert`] mints
/// the [`CarId`], and ids are never reused within a store's lifetime.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Return every stored car in stable id order.
    async fn list(&self) -> Result<Vec<Car>, CarRepositoryError>;

    /// Fetch a car by identity.
    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarRepositoryError>;

    /// Persist a new record, assigning and returning its identity.
    async fn insert(&self, input: CarInput) -> Result<Car, CarRepositoryError>;

    /// Overwrite the row matching `car.id()` with the given record.
    async fn update(&self, car: &Car) -> Result<(), CarRepositoryError>;

    /// Remove the row with the given identity. Removing an absent id is a
    /// no-op; existence checks belong to the caller.
    async fn delete(&self, id: CarId) -> Result<(), CarRepositoryError>;
}
