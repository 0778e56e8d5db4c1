//! Application wiring: assemble the store, services, and actix app.
//!
//! Collaborators are constructed here and passed down explicitly; handlers
//! only ever see the driving ports bundled in `HttpState`.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{CarCommandService, CarQueryService};
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::{cars, state::HttpState};
use crate::middleware::Trace;
use crate::outbound::persistence::MemoryCarRepository;

pub mod config;

pub use config::ServerConfig;

/// Build the HTTP handler state over a fresh in-memory record store.
#[must_use]
pub fn http_state() -> HttpState {
    let repo = Arc::new(MemoryCarRepository::new());
    HttpState::new(
        Arc::new(CarQueryService::new(Arc::clone(&repo))),
        Arc::new(CarCommandService::new(repo)),
    )
}

/// Assemble the actix application: car endpoints, health probes, trace
/// middleware, and (in debug builds) Swagger UI.
pub fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(state)
        .app_data(health_state)
        .wrap(Trace)
        .service(cars::scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Run the server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(http_state());
    let health_state = web::Data::new(HealthState::new());

    let server_state = state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    tracing::info!(addr = %config.bind_addr(), "car registry listening");
    server.run().await
}
