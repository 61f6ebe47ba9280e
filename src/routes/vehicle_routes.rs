use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common::Lookup;
use crate::dto::vehicle_dto::{AssignmentResponse, VehicleFilters, VehicleResponse};
use crate::models::vehicle::{CreateVehicleRequest, SetDriverRequest, UpdateVehicleRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicle", get(list_vehicles).post(create_vehicle))
        .route(
            "/vehicle/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/set_driver/:vehicle_id", post(set_driver))
        .route("/set_driver/:vehicle_id/", post(set_driver))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Lookup<VehicleResponse>>, AppError> {
    let Path(id) = id?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response.into()))
}

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<CreateVehicleRequest>, JsonRejection>,
) -> Result<Json<VehicleResponse>, AppError> {
    let Json(request) = payload?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateVehicleRequest>, JsonRejection>,
) -> Result<Json<VehicleResponse>, AppError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<VehicleResponse>, AppError> {
    let Path(id) = id?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn set_driver(
    State(state): State<AppState>,
    vehicle_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<SetDriverRequest>, JsonRejection>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let Path(vehicle_id) = vehicle_id?;
    let Json(request) = payload?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.set_driver(vehicle_id, request).await?;
    Ok(Json(response))
}
