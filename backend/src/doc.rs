//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: the car
//! CRUD and filter paths, the health probes, and the request/response and
//! error schemas. Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::cars::{CarBody, CarResponseBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car registry API",
        description = "CRUD and production-year range filtering over a car record store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cars::list_cars,
        crate::inbound::http::cars::filter_cars,
        crate::inbound::http::cars::create_car,
        crate::inbound::http::cars::update_car,
        crate::inbound::http::cars::delete_car,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(CarBody, CarResponseBody, Error, ErrorCode)),
    tags(
        (name = "cars", description = "Car record management"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
