//! Car domain services.
//!
//! These services implement the car driving ports over a [`CarRepository`],
//! keeping validation and the not-found path out of the HTTP adapter.
//! Collaborators arrive through constructors; there is no ambient container.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::car::{Car, CarDraft, CarId, filter_by_year};
use crate::domain::ports::{CarRepository, CarRepositoryError, CarsCommand, CarsQuery};

fn map_repository_error(error: CarRepositoryError) -> Error {
    match error {
        CarRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("car store unavailable: {message}"))
        }
        CarRepositoryError::Query { message } => {
            Error::internal(format!("car store error: {message}"))
        }
    }
}

fn car_not_found(id: CarId) -> Error {
    Error::not_found(format!("car {id} not found"))
}

/// Read-side service implementing [`CarsQuery`].
#[derive(Clone)]
pub struct CarQueryService<R> {
    car_repo: Arc<R>,
}

impl<R> CarQueryService<R> {
    /// Create a query service over the given record store.
    pub fn new(car_repo: Arc<R>) -> Self {
        Self { car_repo }
    }
}

#[async_trait]
impl<R> CarsQuery for CarQueryService<R>
where
    R: CarRepository,
{
    async fn list_cars(&self) -> Result<Vec<Car>, Error> {
        self.car_repo.list().await.map_err(map_repository_error)
    }

    async fn cars_in_year_range(&self, from: i64, to: i64) -> Result<Vec<Car>, Error> {
        let cars = self.car_repo.list().await.map_err(map_repository_error)?;
        Ok(filter_by_year(cars, from, to))
    }
}

/// Write-side service implementing [`CarsCommand`].
#[derive(Clone)]
pub struct CarCommandService<R> {
    car_repo: Arc<R>,
}

impl<R> CarCommandService<R> {
    /// Create a command service over the given record store.
    pub fn new(car_repo: Arc<R>) -> Self {
        Self { car_repo }
    }
}

#[async_trait]
impl<R> CarsCommand for CarCommandService<R>
where
    R: CarRepository,
{
    async fn create_car(&self, draft: CarDraft) -> Result<Car, Error> {
        let input = draft.validate().map_err(Error::from_violations)?;
        self.car_repo
            .insert(input)
            .await
            .map_err(map_repository_error)
    }

    async fn update_car(&self, id: CarId, draft: CarDraft) -> Result<Car, Error> {
        let mut car = self
            .car_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| car_not_found(id))?;

        let input = draft.validate().map_err(Error::from_violations)?;
        car.apply(input);

        self.car_repo
            .update(&car)
            .await
            .map_err(map_repository_error)?;
        Ok(car)
    }

    async fn delete_car(&self, id: CarId) -> Result<(), Error> {
        let car = self
            .car_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| car_not_found(id))?;

        self.car_repo
            .delete(car.id())
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "car_service_tests.rs"]
mod car_service_tests;
