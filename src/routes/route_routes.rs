use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::{
    CreateRouteRequest, CreateRouteResponse, RouteRowResponse, SaveRouteRequest,
    SaveSkippedResponse,
};
use crate::middleware::auth::{auth_middleware, optional_auth_middleware, AuthenticatedUser};
use crate::services::SaveOutcome;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_route_router(state: AppState) -> Router<AppState> {
    // /save acepta sesiones ausentes: responde 200 {saved:false} en vez de 401
    let save = Router::new()
        .route("/save", post(save_route))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_auth_middleware,
        ));

    Router::new()
        .route("/", get(list_routes).post(create_route))
        .route("/:id", delete(delete_route))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
        .merge(save)
}

async fn list_routes(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<RouteRowResponse>>> {
    let controller = RouteController::new(state.pool.clone());
    let rows = controller.list(user.user_id).await?;

    Ok(Json(rows))
}

async fn create_route(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateRouteRequest>,
) -> AppResult<(StatusCode, Json<CreateRouteResponse>)> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(user.user_id, request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

async fn save_route(
    State(state): State<AppState>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<SaveRouteRequest>,
) -> AppResult<Response> {
    let controller = RouteController::new(state.pool.clone());
    let outcome = controller
        .save(user.map(|Extension(u)| u), request)
        .await?;

    let response = match outcome {
        SaveOutcome::Saved { route_id } => {
            (StatusCode::CREATED, Json(CreateRouteResponse { route_id })).into_response()
        }
        SaveOutcome::NotAuthenticated => {
            let body = SaveSkippedResponse {
                saved: false,
                message: "Inicia sesión para guardar rutas".to_string(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
    };

    Ok(response)
}

async fn delete_route(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(route_id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let controller = RouteController::new(state.pool.clone());
    controller.delete(user.user_id, route_id).await?;

    Ok(Json(json!({ "message": "Route deleted" })))
}
