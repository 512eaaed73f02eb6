/// Users API routes
///
/// `User` never serializes its password, so both routes return the record
/// as-is.
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chainstream_core::{CreateUser, User, UserId};

/// GET /api/users/:id
pub async fn get_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// POST /api/users
pub async fn create_user(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<CreateUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let invalid = || ServerError::BadRequest("Invalid user data".to_string());

    let Json(input) = body.map_err(|rejection| {
        tracing::debug!("Rejected user body: {}", rejection.body_text());
        invalid()
    })?;

    let user = app_state
        .store
        .create_user(input)
        .await
        .map_err(|err| {
            tracing::debug!("Rejected user: {}", err);
            invalid()
        })?;

    tracing::info!(user_id = user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}
