use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};

use crate::controllers::location_controller::LocationController;
use crate::dto::location_dto::{CreateLocationRequest, CreateLocationResponse, LocationResponse};
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_location_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_locations).post(create_location))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_locations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LocationResponse>>> {
    let controller = LocationController::new(state.pool.clone());
    let locations = controller.list().await?;

    Ok(Json(locations))
}

async fn create_location(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationRequest>,
) -> AppResult<(StatusCode, Json<CreateLocationResponse>)> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.create(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
