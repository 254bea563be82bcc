//! Middleware de autenticación JWT
//!
//! Este módulo maneja la extracción de tokens Bearer, su verificación
//! y la inyección del usuario autenticado en las requests. Un token
//! inválido o expirado produce siempre el mismo rechazo, sin detallar
//! la causa al cliente.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_header, user_id_from_claims, verify_token, JwtConfig},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .map(extract_token_from_header)
        .transpose()?
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let jwt_config = JwtConfig::from(&state.config);

    // Rechazo uniforme: firma incorrecta, token expirado o payload
    // malformado responden igual
    let claims = verify_token(token, &jwt_config)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    let user_id = user_id_from_claims(&claims)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    // Inyectar usuario autenticado en las extensions
    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Middleware opcional de autenticación (para rutas que pueden ser
/// públicas o privadas, como el guardado de rutas)
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(token) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
    {
        let jwt_config = JwtConfig::from(&state.config);

        if let Ok(claims) = verify_token(token, &jwt_config) {
            if let Ok(user_id) = user_id_from_claims(&claims) {
                request.extensions_mut().insert(AuthenticatedUser { user_id });
            }
        }
    }

    Ok(next.run(request).await)
}
