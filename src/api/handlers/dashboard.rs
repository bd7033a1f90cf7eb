use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use chrono::Utc;

use crate::domain::services::reporting;
use crate::error::AppError;
use crate::state::AppState;

/// Current-month overview: revenue split, joins, due/overdue counts.
pub async fn overview(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();
    let members = state.member_repo.list(None).await?;
    let payments = state.payment_repo.list_all().await?;

    let stats = reporting::dashboard_stats(&members, &payments, today);
    Ok(Json(stats))
}
