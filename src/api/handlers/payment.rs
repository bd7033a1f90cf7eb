use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

use crate::api::dtos::requests::RecordPaymentRequest;
use crate::api::dtos::responses::{PaymentHistoryResponse, RecordPaymentResponse};
use crate::domain::models::payment::TYPE_MEMBERSHIP;
use crate::domain::services::{payments, reporting};
use crate::error::AppError;
use crate::state::AppState;

pub async fn record_payment(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
    Json(payload): Json<RecordPaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let today = Utc::now().date_naive();

    let member = state.member_repo.find_by_id(&member_id).await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    let method = payload.method
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::MissingField("Payment method".to_string()))?;

    let amount = payload.amount.unwrap_or(member.membership_fee);
    let payment_type = payload.payment_type.unwrap_or_else(|| TYPE_MEMBERSHIP.to_string());

    // Validation happens before any write; persistence is one transaction.
    let (updated, record) = payments::apply_payment(&member, amount, &method, &payment_type, today)?;
    let payment = state.payment_repo.record_for_member(&record, &updated).await?;

    info!(
        member_id = %updated.id,
        amount,
        method = %payment.method,
        "Payment recorded, next due {}",
        updated.next_due_date.map(|d| d.to_string()).unwrap_or_else(|| "unset".into())
    );

    Ok(Json(RecordPaymentResponse { member: updated, payment }))
}

pub async fn payment_history(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let payments = state.payment_repo.list_by_member(&member_id).await?;
    let totals = reporting::payment_totals(&payments);

    Ok(Json(PaymentHistoryResponse { payments, totals }))
}
