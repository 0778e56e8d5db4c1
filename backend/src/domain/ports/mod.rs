//! Domain ports: driving use-case traits and the driven record-store trait.

pub mod car_repository;
pub mod cars_command;
pub mod cars_query;

pub use car_repository::{CarRepository, CarRepositoryError};
pub use cars_command::CarsCommand;
pub use cars_query::CarsQuery;
