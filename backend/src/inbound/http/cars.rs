//! Car HTTP handlers.
//!
//! ```text
//! GET    /cars
//! GET    /cars/filter?from=&to=
//! POST   /cars
//! PUT    /cars/{id}
//! DELETE /cars/{id}
//! ```

use actix_web::{HttpResponse, delete, get, http::header, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Error;
use crate::domain::car::{Car, CarDraft, CarId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_year_bound};

/// Request payload for creating or updating a car.
///
/// Fields are optional so absence surfaces as a field-level violation
/// instead of an opaque deserialisation failure.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarBody {
    #[schema(example = "Audi")]
    pub brand: Option<String>,
    #[schema(example = "A4")]
    pub model: Option<String>,
    #[schema(example = "BLACK")]
    pub color: Option<String>,
    #[schema(example = 2020)]
    pub production_year: Option<i64>,
}

impl From<CarBody> for CarDraft {
    fn from(body: CarBody) -> Self {
        Self {
            brand: body.brand,
            model: body.model,
            color: body.color,
            production_year: body.production_year,
        }
    }
}

/// A car record as rendered on the wire.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarResponseBody {
    #[schema(example = 1)]
    pub car_id: i64,
    #[schema(example = "Audi")]
    pub brand: String,
    #[schema(example = "A4")]
    pub model: String,
    #[schema(example = "BLACK")]
    pub color: String,
    #[schema(example = 2020)]
    pub production_year: i64,
}

impl From<Car> for CarResponseBody {
    fn from(car: Car) -> Self {
        Self {
            car_id: car.id().value(),
            brand: car.brand().to_owned(),
            model: car.model().to_owned(),
            color: car.color().to_string(),
            production_year: car.production_year(),
        }
    }
}

fn to_bodies(cars: Vec<Car>) -> Vec<CarResponseBody> {
    cars.into_iter().map(CarResponseBody::from).collect()
}

/// Year-range bounds for the filter endpoint. Both are required and must be
/// 1900 or later; their order does not matter.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    /// One bound of the inclusive production-year range.
    pub from: Option<i64>,
    /// The other bound of the inclusive production-year range.
    pub to: Option<i64>,
}

/// List every stored car.
///
/// An empty store renders 204 rather than an empty list. The filtered query
/// below renders its empty result as 404 instead; the asymmetry is kept for
/// compatibility with existing clients, not by recommendation.
#[utoipa::path(
    get,
    path = "/cars",
    responses(
        (status = 200, description = "Stored cars", body = [CarResponseBody]),
        (status = 204, description = "No cars stored")
    ),
    tags = ["cars"],
    operation_id = "listCars"
)]
#[get("")]
pub async fn list_cars(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let cars = state.queries.list_cars().await?;
    if cars.is_empty() {
        return Ok(HttpResponse::NoContent().finish());
    }
    Ok(HttpResponse::Ok().json(to_bodies(cars)))
}

/// List the cars produced within an inclusive year range.
///
/// The bounds may arrive in either order, but each must independently be
/// 1900 or later; that check runs before any filtering. An empty result is
/// 404 (see [`list_cars`] for the empty-result asymmetry).
#[utoipa::path(
    get,
    path = "/cars/filter",
    params(FilterQuery),
    responses(
        (status = 200, description = "Cars in the requested range", body = [CarResponseBody]),
        (status = 400, description = "Missing bound or bound before 1900", body = Error),
        (status = 404, description = "No cars in the requested range", body = Error)
    ),
    tags = ["cars"],
    operation_id = "filterCarsByYear"
)]
#[get("/filter")]
pub async fn filter_cars(
    state: web::Data<HttpState>,
    query: web::Query<FilterQuery>,
) -> ApiResult<web::Json<Vec<CarResponseBody>>> {
    let from = require_year_bound(query.from, FieldName::new("from"))?;
    let to = require_year_bound(query.to, FieldName::new("to"))?;

    let cars = state.queries.cars_in_year_range(from, to).await?;
    if cars.is_empty() {
        return Err(Error::not_found(format!(
            "no cars produced between {} and {}",
            from.min(to),
            from.max(to)
        )));
    }
    Ok(web::Json(to_bodies(cars)))
}

/// Create a car from a validated payload.
#[utoipa::path(
    post,
    path = "/cars",
    request_body = CarBody,
    responses(
        (status = 201, description = "Car created; Location names the new record", body = CarResponseBody),
        (status = 400, description = "Payload failed validation", body = Error)
    ),
    tags = ["cars"],
    operation_id = "createCar"
)]
#[post("")]
pub async fn create_car(
    state: web::Data<HttpState>,
    body: web::Json<CarBody>,
) -> ApiResult<HttpResponse> {
    let car = state.commands.create_car(body.into_inner().into()).await?;
    let location = format!("/cars/{}", car.id());
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(CarResponseBody::from(car)))
}

/// Overwrite every mutable field of an existing car.
#[utoipa::path(
    put,
    path = "/cars/{id}",
    params(("id" = i64, Path, description = "Car identifier")),
    request_body = CarBody,
    responses(
        (status = 200, description = "Updated car", body = CarResponseBody),
        (status = 400, description = "Payload failed validation", body = Error),
        (status = 404, description = "Unknown car id", body = Error)
    ),
    tags = ["cars"],
    operation_id = "updateCar"
)]
#[put("/{id}")]
pub async fn update_car(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    body: web::Json<CarBody>,
) -> ApiResult<web::Json<CarResponseBody>> {
    let id = CarId::new(path.into_inner());
    let car = state
        .commands
        .update_car(id, body.into_inner().into())
        .await?;
    Ok(web::Json(CarResponseBody::from(car)))
}

/// Delete a car by identity.
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    params(("id" = i64, Path, description = "Car identifier")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 404, description = "Unknown car id", body = Error)
    ),
    tags = ["cars"],
    operation_id = "deleteCar"
)]
#[delete("/{id}")]
pub async fn delete_car(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = CarId::new(path.into_inner());
    state.commands.delete_car(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the car endpoints under the `/cars` scope.
pub fn scope() -> actix_web::Scope {
    web::scope("/cars")
        .service(list_cars)
        .service(filter_cars)
        .service(create_car)
        .service(update_car)
        .service(delete_car)
}

#[cfg(test)]
#[path = "cars_tests.rs"]
mod cars_tests;
