use axum::{
    extract::{Extension, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};

use crate::controllers::user_location_controller::UserLocationController;
use crate::dto::user_location_dto::{
    AddUserLocationRequest, DeleteUserLocationRequest, UserLocationResponse,
};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_user_location_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_user_locations)
                .post(add_user_location)
                .delete(delete_user_location),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_user_locations(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<UserLocationResponse>>> {
    let controller = UserLocationController::new(state.pool.clone());
    let locations = controller.list(user.user_id).await?;

    Ok(Json(locations))
}

async fn add_user_location(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<AddUserLocationRequest>,
) -> AppResult<StatusCode> {
    let controller = UserLocationController::new(state.pool.clone());
    controller.add(user.user_id, request).await?;

    Ok(StatusCode::CREATED)
}

async fn delete_user_location(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<DeleteUserLocationRequest>,
) -> AppResult<StatusCode> {
    let controller = UserLocationController::new(state.pool.clone());
    controller.delete(user.user_id, request.location_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
