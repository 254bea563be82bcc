use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    middleware,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, CreateVehicleResponse, UpdateVehicleRequest, VehicleResponse,
};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", put(update_vehicle).delete(delete_vehicle))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<VehicleResponse>>> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.list(user.user_id).await?;

    Ok(Json(vehicles))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateVehicleRequest>,
) -> AppResult<(StatusCode, Json<CreateVehicleResponse>)> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(user.user_id, request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<i32>,
    Json(request): Json<UpdateVehicleRequest>,
) -> AppResult<StatusCode> {
    let controller = VehicleController::new(state.pool.clone());
    controller.update(vehicle_id, user.user_id, request).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<i32>,
) -> AppResult<StatusCode> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(vehicle_id, user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
