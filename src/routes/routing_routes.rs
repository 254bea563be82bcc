use axum::{extract::State, routing::post, Json, Router};

use crate::dto::routing_dto::{ComputeRouteRequest, RoutingOutcome};
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppResult};

/// Router de cálculo de rutas. Público: el mapa funciona sin sesión.
pub fn create_routing_router() -> Router<AppState> {
    Router::new().route("/route", post(compute_route))
}

async fn compute_route(
    State(state): State<AppState>,
    Json(request): Json<ComputeRouteRequest>,
) -> AppResult<Json<RoutingOutcome>> {
    if request.points.len() < 2 {
        return Err(validation_error(
            "points",
            "Se necesitan al menos 2 puntos para calcular una ruta",
        ));
    }

    let outcome = state
        .routing
        .compute_route(
            &request.points,
            &request.constraints,
            request.profile.as_deref(),
        )
        .await;

    Ok(Json(outcome))
}
