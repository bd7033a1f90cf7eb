use axum::{extract::{Query, State}, response::{Html, IntoResponse}, Json};
use std::sync::Arc;
use chrono::{NaiveDate, Utc};

use crate::api::dtos::requests::ReportQuery;
use crate::domain::services::reporting;
use crate::error::AppError;
use crate::state::AppState;

fn month_label(month: u32, year: i32) -> Result<String, AppError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Validation("Month must be between 1 and 12".into()))?;
    Ok(first.format("%B %Y").to_string())
}

pub async fn monthly_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    // Validates the month before touching the store.
    month_label(query.month, query.year)?;

    let today = Utc::now().date_naive();
    let members = state.member_repo.list(None).await?;
    let payments = state.payment_repo.list_all().await?;

    let report = reporting::monthly_report(&members, &payments, query.month, query.year, today);
    Ok(Json(report))
}

/// Printable rendition of the monthly report, for the owner's PDF export.
pub async fn export_monthly_report(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let label = month_label(query.month, query.year)?;

    let today = Utc::now().date_naive();
    let members = state.member_repo.list(None).await?;
    let payments = state.payment_repo.list_all().await?;

    let report = reporting::monthly_report(&members, &payments, query.month, query.year, today);

    let mut context = tera::Context::new();
    context.insert("month_label", &label);
    context.insert("membership_revenue", &report.membership_revenue);
    context.insert("registration_revenue", &report.registration_revenue);
    context.insert("total_revenue", &report.total_revenue);
    context.insert("cash_total", &report.cash_total);
    context.insert("upi_total", &report.upi_total);
    context.insert("online_total", &report.online_total);
    context.insert("paid_count", &report.paid_members.len());
    context.insert("unpaid_count", &report.unpaid_members.len());

    let html = state.templates.render("report.html", &context)
        .map_err(|e| {
            tracing::error!("Report template render error: {:?}", e);
            AppError::Internal
        })?;

    Ok(Html(html))
}
