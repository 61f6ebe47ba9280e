use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use crate::controllers::driver_controller::DriverController;
use crate::dto::common::Lookup;
use crate::dto::driver_dto::{DriverFilters, DriverResponse};
use crate::models::driver::DriverRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/driver", get(list_drivers).post(create_driver))
        .route(
            "/driver/:id",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
}

async fn list_drivers(
    State(state): State<AppState>,
    Query(filters): Query<DriverFilters>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_driver(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Lookup<DriverResponse>>, AppError> {
    let Path(id) = id?;
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response.into()))
}

async fn create_driver(
    State(state): State<AppState>,
    payload: Result<Json<DriverRequest>, JsonRejection>,
) -> Result<Json<DriverResponse>, AppError> {
    let Json(request) = payload?;
    let controller = DriverController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_driver(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<DriverRequest>, JsonRejection>,
) -> Result<Json<DriverResponse>, AppError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let controller = DriverController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_driver(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DriverResponse>, AppError> {
    let Path(id) = id?;
    let controller = DriverController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
