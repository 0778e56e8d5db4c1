//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the domain's driving ports and stay testable without real I/O.

use std::sync::Arc;

use crate::domain::ports::{CarsCommand, CarsQuery};

/// Dependency bundle for HTTP handlers, assembled at startup.
#[derive(Clone)]
pub struct HttpState {
    pub queries: Arc<dyn CarsQuery>,
    pub commands: Arc<dyn CarsCommand>,
}

impl HttpState {
    /// Bundle the driving-port implementations handlers will call.
    pub fn new(queries: Arc<dyn CarsQuery>, commands: Arc<dyn CarsCommand>) -> Self {
        Self { queries, commands }
    }
}
