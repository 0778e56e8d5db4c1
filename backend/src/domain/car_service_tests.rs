//! Tests for the car domain services.

use std::sync::Arc;

use rstest::rstest;

use super::{CarCommandService, CarQueryService};
use crate::domain::ErrorCode;
use crate::domain::car::{Car, CarDraft, CarId, Color};
use crate::domain::ports::{CarsCommand, CarsQuery};
use crate::outbound::persistence::MemoryCarRepository;

fn draft(brand: &str, model: &str, color: &str, year: i64) -> CarDraft {
    CarDraft {
        brand: Some(brand.to_owned()),
        model: Some(model.to_owned()),
        color: Some(color.to_owned()),
        production_year: Some(year),
    }
}

fn services() -> (
    CarQueryService<MemoryCarRepository>,
    CarCommandService<MemoryCarRepository>,
) {
    let repo = Arc::new(MemoryCarRepository::new());
    (
        CarQueryService::new(Arc::clone(&repo)),
        CarCommandService::new(repo),
    )
}

async fn seed(commands: &impl CarsCommand, years: &[i64]) -> Vec<Car> {
    let mut cars = Vec::with_capacity(years.len());
    for year in years {
        let car = commands
            .create_car(draft("Audi", "A4", "BLACK", *year))
            .await
            .expect("seed car");
        cars.push(car);
    }
    cars
}

#[tokio::test]
async fn list_is_empty_for_a_fresh_store() {
    let (queries, _) = services();

    let cars = queries.list_cars().await.expect("list");

    assert!(cars.is_empty());
}

#[tokio::test]
async fn list_includes_a_created_car_with_its_assigned_id() {
    let (queries, commands) = services();

    let created = commands
        .create_car(draft("Fiat", "Punto", "RED", 2016))
        .await
        .expect("create");

    let cars = queries.list_cars().await.expect("list");
    assert_eq!(cars, vec![created.clone()]);
    assert_eq!(created.brand(), "Fiat");
    assert_eq!(created.color(), Color::Red);
}

#[tokio::test]
async fn create_rejects_an_invalid_draft_and_persists_nothing() {
    let (queries, commands) = services();

    let err = commands
        .create_car(draft("", "Punto", "RED", 2016))
        .await
        .expect_err("empty brand must be rejected");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert!(queries.list_cars().await.expect("list").is_empty());
}

#[rstest]
#[case(2014, 2019)]
#[case(2019, 2014)]
#[tokio::test]
async fn range_query_tolerates_swapped_bounds(#[case] from: i64, #[case] to: i64) {
    let (queries, commands) = services();
    seed(&commands, &[2010, 2015, 2016, 2020]).await;

    let matched = queries.cars_in_year_range(from, to).await.expect("filter");
    let years: Vec<i64> = matched.iter().map(Car::production_year).collect();

    assert_eq!(years, vec![2015, 2016]);
}

#[tokio::test]
async fn range_query_with_equal_bounds_matches_a_single_year() {
    let (queries, commands) = services();
    seed(&commands, &[2015, 2016, 2020]).await;

    let matched = queries
        .cars_in_year_range(2016, 2016)
        .await
        .expect("filter");

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].production_year(), 2016);
}

#[tokio::test]
async fn range_query_without_matches_is_empty() {
    let (queries, commands) = services();
    seed(&commands, &[2010, 2020]).await;

    let matched = queries
        .cars_in_year_range(2011, 2019)
        .await
        .expect("filter");

    assert!(matched.is_empty());
}

#[tokio::test]
async fn update_overwrites_fields_and_preserves_identity() {
    let (_, commands) = services();
    let created = commands
        .create_car(draft("Brand1", "Model1", "GREEN", 2020))
        .await
        .expect("create");

    let updated = commands
        .update_car(created.id(), draft("Brand2", "Model2", "BLACK", 2022))
        .await
        .expect("update");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.brand(), "Brand2");
    assert_eq!(updated.model(), "Model2");
    assert_eq!(updated.color(), Color::Black);
    assert_eq!(updated.production_year(), 2022);
}

#[tokio::test]
async fn update_of_an_unknown_id_is_not_found() {
    let (_, commands) = services();

    let err = commands
        .update_car(CarId::new(42), draft("Fiat", "Punto", "RED", 2016))
        .await
        .expect_err("unknown id must fail");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_removes_the_car_and_later_operations_see_not_found() {
    let (queries, commands) = services();
    let created = commands
        .create_car(draft("Audi", "A4", "BLACK", 2020))
        .await
        .expect("create");

    commands.delete_car(created.id()).await.expect("delete");

    assert!(queries.list_cars().await.expect("list").is_empty());
    let err = commands
        .update_car(created.id(), draft("Audi", "A4", "BLACK", 2020))
        .await
        .expect_err("deleted id must fail");
    assert_eq!(err.code(), ErrorCode::NotFound);

    let err = commands
        .delete_car(created.id())
        .await
        .expect_err("second delete must fail");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
