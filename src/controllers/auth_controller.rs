//! Controller de autenticación
//!
//! Registro, login y consulta del usuario actual. Las credenciales
//! inválidas responden siempre el mismo 401, sin distinguir si el
//! email existe.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::MySqlPool;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, MeResponse, RegisterRequest};
use crate::repositories::UserRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: MySqlPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<(), AppError> {
        // Validar antes de tocar la base de datos
        request.validate().map_err(AppError::Validation)?;

        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Err(conflict_error("User", "email", &request.email));
        }

        let hashed = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hasheando password: {}", e)))?;

        self.repository
            .create(&request.name, &request.email, &hashed)
            .await?;

        Ok(())
    }

    pub async fn login(&self, request: LoginRequest) -> Result<String, AppError> {
        request.validate().map_err(AppError::Validation)?;

        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        let password_valid = verify(&request.password, &user.password)
            .map_err(|e| AppError::Hash(format!("Error verificando password: {}", e)))?;

        if !password_valid {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        generate_token(user.id, &self.jwt_config)
    }

    pub async fn me(&self, user_id: i32) -> Result<MeResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User", &user_id.to_string()))?;

        Ok(MeResponse {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}
