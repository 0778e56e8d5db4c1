//! Domain entities, validation, errors, ports, and services.
//!
//! Purpose: hold everything transport- and storage-agnostic. Inbound
//! adapters depend on the driving ports in [`ports`]; outbound adapters
//! implement the driven [`ports::CarRepository`].

pub mod car;
pub mod car_service;
pub mod error;
pub mod ports;

pub use self::car::{Car, CarDraft, CarId, CarInput, CarValidationError, Color, filter_by_year};
pub use self::car_service::{CarCommandService, CarQueryService};
pub use self::error::{Error, ErrorCode};
