//! In-memory record-store adapter.
//!
//! Backs the [`CarRepository`] port with a lock-guarded ordered map. Ids are
//! minted from a monotonic counter and never reused within the process, so
//! id order equals insertion order and listing preserves creation order.
//! A database-backed adapter would implement the same port.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::car::{Car, CarId, CarInput};
use crate::domain::ports::{CarRepository, CarRepositoryError};

#[derive(Debug, Default)]
struct Store {
    cars: BTreeMap<i64, Car>,
    next_id: i64,
}

/// Process-local car store.
#[derive(Debug, Default)]
pub struct MemoryCarRepository {
    inner: RwLock<Store>,
}

impl MemoryCarRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Store>, CarRepositoryError> {
        self.inner.read().map_err(|_| CarRepositoryError::Connection {
            message: "car store lock poisoned".to_owned(),
        })
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Store>, CarRepositoryError> {
        self.inner.write().map_err(|_| CarRepositoryError::Connection {
            message: "car store lock poisoned".to_owned(),
        })
    }
}

#[async_trait]
impl CarRepository for MemoryCarRepository {
    async fn list(&self) -> Result<Vec<Car>, CarRepositoryError> {
        let store = self.read()?;
        Ok(store.cars.values().cloned().collect())
    }

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, CarRepositoryError> {
        let store = self.read()?;
        Ok(store.cars.get(&id.value()).cloned())
    }

    async fn insert(&self, input: CarInput) -> Result<Car, CarRepositoryError> {
        let mut store = self.write()?;
        store.next_id += 1;
        let car = Car::new(CarId::new(store.next_id), input);
        store.cars.insert(car.id().value(), car.clone());
        Ok(car)
    }

    async fn update(&self, car: &Car) -> Result<(), CarRepositoryError> {
        let mut store = self.write()?;
        store.cars.insert(car.id().value(), car.clone());
        Ok(())
    }

    async fn delete(&self, id: CarId) -> Result<(), CarRepositoryError> {
        let mut store = self.write()?;
        store.cars.remove(&id.value());
        Ok(())
    }
}
