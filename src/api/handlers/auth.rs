use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::LoginRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Owner PIN gate. A plain phone+pin equality lookup, matching the
/// product's single-owner model; hardening it is explicitly out of scope.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.phone.trim().is_empty() || payload.pin.trim().is_empty() {
        return Err(AppError::Validation("Please enter phone number and PIN".into()));
    }

    let user = state.user_repo
        .find_by_phone_and_pin(&payload.phone, &payload.pin)
        .await?
        .ok_or(AppError::Unauthorized)?;

    info!("Owner login: {}", user.id);

    Ok(Json(serde_json::json!({
        "status": "ok",
        "name": user.name
    })))
}
