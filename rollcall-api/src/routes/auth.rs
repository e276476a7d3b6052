/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /auth/signup` - Register a new user
/// - `POST /auth/login` - Authenticate and receive a bearer token
/// - `DELETE /auth/delete/:id` - Delete a user (requires a valid token)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};
use chrono::Duration;
use rollcall_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Display name
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password (validated for strength separately)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    /// Optional role; defaults to ROLE_STUDENT
    pub role: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    pub password: String,
}

/// Login response
///
/// Echoes the identity claims embedded in the token so clients don't have
/// to decode it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed bearer token
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    /// Role string, e.g. "ROLE_PRINCIPAL"
    pub role: String,

    /// Display name
    pub full_name: String,

    /// User ID
    pub id: i32,
}

fn collect_validation_errors(e: validator::ValidationErrors) -> ApiError {
    let errors: Vec<ValidationErrorDetail> = e
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| ValidationErrorDetail {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string()),
            })
        })
        .collect();
    ApiError::ValidationError(errors)
}

/// Register a new user
///
/// The password is hashed before storage; the stored hash is never
/// serialized back out.
///
/// # Errors
///
/// - `409 Conflict`: Email already exists
/// - `422 Unprocessable Entity`: Validation failed
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<User>> {
    req.validate().map_err(collect_validation_errors)?;

    password::validate_password_strength(&req.password).map_err(|e| {
        ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "password".to_string(),
            message: e,
        }])
    })?;

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            full_name: req.full_name,
            email: req.email,
            password_hash,
            role: req.role.unwrap_or_else(|| "ROLE_STUDENT".to_string()),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(Json(user))
}

/// Login endpoint
///
/// Validates credentials and issues a signed token with the user's role,
/// full name and id embedded as claims.
///
/// # Errors
///
/// - `401 Unauthorized`: Invalid credentials
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    req.validate().map_err(collect_validation_errors)?;

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let expires_in = state.config.jwt.expiration_secs;
    let claims = jwt::Claims::new(
        user.id,
        &user.role,
        &user.full_name,
        Duration::seconds(expires_in),
    );
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(Json(LoginResponse {
        token,
        expires_in,
        role: user.role,
        full_name: user.full_name,
        id: user.id,
    }))
}

/// Delete a user account
///
/// Requires a valid bearer token in the Authorization header. The token is
/// only checked for validity; any authenticated caller may delete.
///
/// # Errors
///
/// - `401 Unauthorized`: Missing, malformed, invalid or expired token
/// - `404 Not Found`: No user with the given id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> ApiResult<String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Expected Bearer token".to_string()))?;

    if !jwt::token_is_valid(token, state.jwt_secret()) {
        return Err(ApiError::Unauthorized(
            "Invalid or expired token.".to_string(),
        ));
    }

    let deleted = User::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("User not found: {}", id)));
    }

    tracing::info!(user_id = id, "User deleted");

    Ok(format!("User with ID {} has been deleted successfully.", id))
}
